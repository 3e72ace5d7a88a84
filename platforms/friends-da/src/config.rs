use std::time::Duration;

use thiserror::Error;

/// Production endpoint of the DA V2 service.
pub const DEFAULT_ENDPOINT: &str = "https://jlp.yahooapis.jp/DAService/V2/parse";

/// Environment variable the application id is usually read from.
pub const APP_ID_ENV: &str = "YAHOO_APP_ID";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Yahoo! Application ID is not specified")]
    MissingAppId,

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Settings of the DA client.
#[derive(Debug, Clone)]
pub struct DaConfig {
    /// URL the JSON-RPC request is posted to
    pub endpoint: String,
    /// Yahoo! Application ID, sent in the User-Agent header
    pub app_id: String,
    /// Timeout of a whole request
    pub timeout: Duration,
}

impl Default for DaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            app_id: String::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl DaConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::MissingAppId);
        }
        Ok(())
    }

    pub(crate) fn user_agent(&self) -> String {
        format!("Yahoo AppID: {}", self.app_id)
    }
}
