//! JSON-RPC envelope of the DA V2 `jlp.daservice.parse` method.

use friends_generator::ParseError;
use friends_protocol::{Chunk, ChunkId, Morpheme, ParseResult};
use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";
pub const METHOD: &str = "jlp.daservice.parse";

#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub id: String,
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: Params<'a>,
}

#[derive(Debug, Serialize)]
pub struct Params<'a> {
    pub q: &'a str,
}

impl<'a> Request<'a> {
    pub fn parse(id: impl Into<String>, text: &'a str) -> Self {
        Self {
            id: id.into(),
            jsonrpc: JSONRPC_VERSION,
            method: METHOD,
            params: Params { q: text },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub result: Option<ResultSet>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub chunks: Vec<WireChunk>,
}

#[derive(Debug, Deserialize)]
pub struct WireChunk {
    pub id: u32,
    /// Id of the modified chunk, -1 at the root
    pub head: i64,
    /// `[surface, reading, base form, part of speech, detail...]`
    pub tokens: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// Minimum token fields: surface, reading, base form, part of speech.
const TOKEN_FIELDS: usize = 4;

impl Response {
    pub fn decode(body: &str) -> Result<Self, ParseError> {
        serde_json::from_str(body).map_err(|e| ParseError::Malformed(e.to_string()))
    }

    pub fn into_parse_result(self) -> Result<ParseResult, ParseError> {
        if let Some(RpcError { code, message }) = self.error {
            return Err(ParseError::Service { code, message });
        }

        let result = self
            .result
            .ok_or_else(|| ParseError::Malformed("response has neither result nor error".to_string()))?;

        let chunks = result
            .chunks
            .into_iter()
            .map(WireChunk::into_chunk)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParseResult::new(chunks))
    }
}

impl WireChunk {
    fn into_chunk(self) -> Result<Chunk, ParseError> {
        let id = self.id;
        let morphemes = self
            .tokens
            .into_iter()
            .map(|token| into_morpheme(id, token))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Chunk {
            id: ChunkId::new(id),
            head: u32::try_from(self.head).ok().map(ChunkId::new),
            morphemes,
        })
    }
}

fn into_morpheme(chunk: u32, token: Vec<String>) -> Result<Morpheme, ParseError> {
    if token.len() < TOKEN_FIELDS {
        return Err(ParseError::Malformed(format!(
            "chunk {} has a token with {} fields, expected at least {}",
            chunk,
            token.len(),
            TOKEN_FIELDS
        )));
    }

    let mut fields = token.into_iter();
    // Length checked above
    let mut next = || fields.next().unwrap_or_default();
    let (surface, reading, base_form, pos) = (next(), next(), next(), next());

    Ok(Morpheme {
        surface,
        reading,
        base_form,
        pos: pos.into(),
    })
}
