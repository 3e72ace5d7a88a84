pub mod ids;
pub mod pos;

// Re-export core types for convenience
pub use ids::ChunkId;
pub use pos::PartOfSpeech;

pub mod model;
pub use model::*;
