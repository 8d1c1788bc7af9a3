use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Remote source of the initial student list.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_seed_timeout")]
    pub timeout_secs: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { url: DEFAULT_SEED_URL.into(), timeout_secs: default_seed_timeout() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
fn default_seed_timeout() -> u64 { 10 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build a config purely from environment variables, used when no
    /// config file is present.
    pub fn from_env() -> Result<Self> {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        if let Some(t) = std::env::var("SEED_TIMEOUT_SECS").ok().and_then(|v| v.parse::<u64>().ok()) {
            cfg.seed.timeout_secs = t;
        }
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.seed.normalize_from_env();
        self.seed.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }
}

impl SeedConfig {
    /// `SEED_URL` overrides the file; an empty url falls back to the default.
    pub fn normalize_from_env(&mut self) {
        if let Ok(url) = std::env::var("SEED_URL") {
            if !url.trim().is_empty() {
                self.url = url;
            }
        }
        if self.url.trim().is_empty() {
            self.url = DEFAULT_SEED_URL.into();
        }
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("seed.url must start with http:// or https://"));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("seed.timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2

            [seed]
            url = "http://localhost:3000/users"
            timeout_secs = 3
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.seed.url, "http://localhost:3000/users");
        assert_eq!(cfg.seed.timeout_secs, 3);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let cfg = parse("").expect("parse");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.seed.url, DEFAULT_SEED_URL);
        assert_eq!(cfg.seed.timeout_secs, 10);
    }

    #[test]
    fn server_normalize_rejects_zero_port() {
        let mut s = ServerConfig { host: " ".into(), port: 0, worker_threads: None };
        assert!(s.normalize().is_err());
        s.port = 1;
        s.normalize().expect("valid");
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
    }

    #[test]
    fn seed_validate_checks_scheme_and_timeout() {
        let bad_scheme = SeedConfig { url: "ftp://example.com".into(), timeout_secs: 5 };
        assert!(bad_scheme.validate().is_err());
        let zero_timeout = SeedConfig { url: DEFAULT_SEED_URL.into(), timeout_secs: 0 };
        assert!(zero_timeout.validate().is_err());
        assert!(SeedConfig::default().validate().is_ok());
    }
}
