use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use friends_generator::{ParseClient, ParseError};
use friends_protocol::ParseResult;
use tracing::{debug, warn};

use crate::config::{ConfigError, DaConfig};
use crate::wire::{Request, Response};

/// Convert a reqwest failure into a transport error.
fn transport(e: reqwest::Error) -> ParseError {
    ParseError::Transport(e.to_string())
}

/// Client of the Yahoo! DA V2 dependency analysis API.
#[derive(Debug)]
pub struct DaClient {
    http: reqwest::Client,
    config: DaConfig,
    next_id: AtomicU64,
}

impl DaClient {
    pub fn new(config: DaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            http,
            config,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn config(&self) -> &DaConfig {
        &self.config
    }

    async fn request(&self, text: &str) -> Result<ParseResult, ParseError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed).to_string();
        debug!(%id, endpoint = %self.config.endpoint, "sending DA parse request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&Request::parse(id, text))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(ParseError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Response::decode(&body)?.into_parse_result()
    }
}

#[async_trait]
impl ParseClient for DaClient {
    async fn parse(&self, text: &str) -> Result<ParseResult, ParseError> {
        self.request(text).await.inspect_err(|e| {
            warn!(error = %e, "DA parse failed");
        })
    }
}
