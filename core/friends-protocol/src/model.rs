use crate::ids::ChunkId;
use crate::pos::PartOfSpeech;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One tagged word of a chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Morpheme {
    pub surface: String,
    pub reading: String,
    pub base_form: String,
    pub pos: PartOfSpeech,
}

impl Morpheme {
    /// Builds a morpheme from its surface and tag only; reading and base form
    /// fall back to the surface.
    pub fn new(surface: impl Into<String>, pos: impl Into<PartOfSpeech>) -> Self {
        let surface = surface.into();
        Self {
            reading: surface.clone(),
            base_form: surface.clone(),
            surface,
            pos: pos.into(),
        }
    }

    pub fn is_noun(&self) -> bool {
        self.pos == PartOfSpeech::Noun
    }

    pub fn is_particle(&self) -> bool {
        self.pos == PartOfSpeech::Particle
    }
}

/// A phrase of the dependency tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chunk {
    pub id: ChunkId,
    /// The chunk this one modifies; `None` for the root of the sentence.
    pub head: Option<ChunkId>,
    pub morphemes: Vec<Morpheme>,
}

impl Chunk {
    pub fn new(id: u32, head: Option<u32>, morphemes: Vec<Morpheme>) -> Self {
        Self {
            id: ChunkId::new(id),
            head: head.map(ChunkId::new),
            morphemes,
        }
    }

    /// Concatenated surface of every morpheme.
    pub fn surface(&self) -> String {
        self.morphemes.iter().map(|m| m.surface.as_str()).collect()
    }

    pub fn last_morpheme(&self) -> Option<&Morpheme> {
        self.morphemes.last()
    }
}

/// Dependency parse of a single sentence, chunks in sentence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseResult {
    pub chunks: Vec<Chunk>,
}

impl ParseResult {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Reassembles the analysed sentence from the chunk surfaces.
    pub fn text(&self) -> String {
        self.chunks.iter().map(Chunk::surface).collect()
    }
}
