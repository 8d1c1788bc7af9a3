use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Log line format on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT=json` selects JSON; anything else, or unset, is compact.
    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Compact,
        }
    }

    /// Filter used when `RUST_LOG` is unset. JSON output is meant for
    /// collectors, so store events are kept at debug there.
    fn default_filter(self) -> &'static str {
        match self {
            Self::Compact => "info,tower_http=info,axum=info",
            Self::Json => "info,tower_http=info,service::students=debug",
        }
    }
}

/// Install the global tracing subscriber. Later calls are no-ops.
pub fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format.default_filter()));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
