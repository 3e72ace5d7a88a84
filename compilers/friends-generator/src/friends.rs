use friends_protocol::ParseResult;
use thiserror::Error;
use tracing::debug;

use crate::client::{ParseClient, ParseError};
use crate::generator::generate;

#[derive(Error, Debug)]
pub enum FriendsError {
    #[error("fail to parse the text")]
    Parse(#[source] ParseError),
}

/// A parsed sentence together with what the generator made of it.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub parse: ParseResult,
    pub statement: Option<String>,
}

/// Generator of friends statements backed by a parse service.
pub struct Friends<C> {
    client: C,
}

impl<C: ParseClient> Friends<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Parses `text` and keeps the parse alongside the statement.
    pub async fn analyze(&self, text: &str) -> Result<Analysis, FriendsError> {
        let parse = self.client.parse(text).await.map_err(FriendsError::Parse)?;
        debug!(chunks = parse.chunks.len(), "sentence parsed");

        let statement = generate(&parse);
        Ok(Analysis { parse, statement })
    }

    /// Parses `text` and renders its statement.
    ///
    /// `Ok(None)` means the sentence has no specialty to talk about; only a
    /// failing parse service is an error.
    pub async fn say(&self, text: &str) -> Result<Option<String>, FriendsError> {
        Ok(self.analyze(text).await?.statement)
    }
}
