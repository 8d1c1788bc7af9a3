//! HTTP client for the remote seed data.
//!
//! Fetches a JSON document once per call; callers own caching.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::CoreError;

#[derive(Clone, Debug)]
pub struct SeedClient {
    http: reqwest::Client,
    url: String,
}

impl SeedClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CoreError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(e.to_string()))?;
        Ok(Self { http, url: url.into() })
    }

    pub async fn fetch<T: DeserializeOwned>(&self) -> Result<T, CoreError> {
        debug!(url = %self.url, "fetching seed document");
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Status(status.as_u16()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| CoreError::Parse(e.to_string()))
    }
}
