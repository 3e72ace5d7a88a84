use async_trait::async_trait;
use friends_protocol::ParseResult;
use thiserror::Error;

/// Failures of the dependency-parse service.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The request never got a response (connect, timeout, body read)
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The service answered with an error object instead of a result
    #[error("service error {code}: {message}")]
    Service { code: i64, message: String },

    /// The response could not be decoded into a parse result
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Anything able to turn a sentence into its dependency parse.
#[async_trait]
pub trait ParseClient: Send + Sync {
    async fn parse(&self, text: &str) -> Result<ParseResult, ParseError>;
}

