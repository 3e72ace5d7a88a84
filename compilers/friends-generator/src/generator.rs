use std::collections::HashMap;

use friends_protocol::{Chunk, ChunkId, ParseResult};
use tracing::debug;

/// Surface of the noun every recognised sentence hangs off.
pub const ANCHOR_SURFACE: &str = "得意";

/// Topic particle marking the subject.
pub const TOPIC_PARTICLE: &str = "は";

/// Particles marking the thing the subject is good at.
pub const SPECIALTY_PARTICLES: [&str; 2] = ["が", "も"];

/// Maps a chunk to the chunks that modify it, in sentence order.
#[derive(Debug, Default)]
pub struct DependencyIndex<'a> {
    dependents: HashMap<ChunkId, Vec<&'a Chunk>>,
}

impl<'a> DependencyIndex<'a> {
    pub fn dependents(&self, head: ChunkId) -> &[&'a Chunk] {
        self.dependents.get(&head).map(Vec::as_slice).unwrap_or(&[])
    }

    fn insert(&mut self, chunk: &'a Chunk) {
        if let Some(head) = chunk.head {
            self.dependents.entry(head).or_default().push(chunk);
        }
    }
}

/// Builds the dependency index and finds the anchor chunk in one scan.
///
/// The anchor is the first chunk holding the noun 得意; later ones are ignored.
pub fn index_chunks(parse: &ParseResult) -> (DependencyIndex<'_>, Option<ChunkId>) {
    let mut index = DependencyIndex::default();
    let mut anchor = None;

    for chunk in &parse.chunks {
        index.insert(chunk);

        if anchor.is_none() && is_anchor(chunk) {
            anchor = Some(chunk.id);
        }
    }

    (index, anchor)
}

fn is_anchor(chunk: &Chunk) -> bool {
    chunk
        .morphemes
        .iter()
        .any(|m| m.surface == ANCHOR_SURFACE && m.is_noun())
}

/// Role a dependent chunk plays relative to the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Subject(String),
    Specialty(String),
}

/// Classifies a chunk by its trailing particle.
///
/// The chunk needs at least one content morpheme in front of the particle;
/// the role text is those morphemes joined together.
pub fn classify(chunk: &Chunk) -> Option<Role> {
    let (last, content) = chunk.morphemes.split_last()?;
    if content.is_empty() || !last.is_particle() {
        return None;
    }

    let text: String = content.iter().map(|m| m.surface.as_str()).collect();
    match last.surface.as_str() {
        TOPIC_PARTICLE => Some(Role::Subject(text)),
        p if SPECIALTY_PARTICLES.contains(&p) => Some(Role::Specialty(text)),
        _ => None,
    }
}

/// Subject and specialty gathered from the anchor's dependents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub subject: String,
    pub specialty: String,
}

/// Walks the dependents in order; a later chunk overwrites an earlier one of
/// the same role.
pub fn extract<'a>(dependents: impl IntoIterator<Item = &'a Chunk>) -> Extraction {
    let mut found = Extraction::default();

    for chunk in dependents {
        match classify(chunk) {
            Some(Role::Subject(text)) => found.subject = text,
            Some(Role::Specialty(text)) => found.specialty = text,
            None => {}
        }
    }

    found
}

/// Renders the template for an already normalized subject.
pub fn render(subject: &str, specialty: &str) -> String {
    format!("すごーい！{}は{}が得意なフレンズなんだね！", subject, specialty)
}

/// Turns a parse of "X は Y が 得意" into the friends statement.
///
/// Returns `None` when the sentence does not have that shape.
pub fn generate(parse: &ParseResult) -> Option<String> {
    if parse.is_empty() {
        return None;
    }

    let (index, anchor) = index_chunks(parse);
    let Some(anchor) = anchor else {
        debug!("no {} noun in the sentence", ANCHOR_SURFACE);
        return None;
    };

    let dependents = index.dependents(anchor);
    if dependents.is_empty() {
        debug!(%anchor, "anchor chunk has no dependents");
        return None;
    }

    let Extraction { subject, specialty } = extract(dependents.iter().copied());
    if specialty.is_empty() {
        debug!(%anchor, subject = %subject, "no specialty among the dependents");
        return None;
    }

    let subject = friends_lexicon::normalize(&subject).map_or(subject, str::to_string);
    debug!(%anchor, subject = %subject, specialty = %specialty, "statement generated");

    Some(render(&subject, &specialty))
}
