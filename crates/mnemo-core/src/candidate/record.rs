use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{FusionError, FusionResult};

/// Which retrieval backend produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    Graph,
    Vector,
    Fused,
}

/// Record shape emitted by the originating system.
///
/// Node/edge/episode come from the graph store; the rest are the vector
/// store's document and media shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Node,
    Edge,
    Episode,
    Document,
    Chunk,
    Image,
    Pdf,
    Audio,
    Video,
}

impl CandidateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CandidateKind::Node => "node",
            CandidateKind::Edge => "edge",
            CandidateKind::Episode => "episode",
            CandidateKind::Document => "document",
            CandidateKind::Chunk => "chunk",
            CandidateKind::Image => "image",
            CandidateKind::Pdf => "pdf",
            CandidateKind::Audio => "audio",
            CandidateKind::Video => "video",
        }
    }
}

/// The unified candidate record. Every ranked item, regardless of which
/// backend produced it, is folded into this shape before fusion.
///
/// Records live only inside one fusion call: created from raw backend
/// records, returned in the ranked list, never persisted. `fused_score`
/// and `rank` are the only fields written after construction, assigned
/// exactly once after all source lists have been folded in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Canonical source-prefixed id, unique within one fusion call.
    pub id: String,
    /// Human-readable payload.
    pub content: String,
    /// Provenance.
    pub source: CandidateSource,
    /// Shape of the record in the originating system.
    pub kind: CandidateKind,
    /// The source system's own relevance signal, always >= 0.
    pub original_score: f64,
    /// Accumulated fusion score; 0.0 before fusion.
    pub fused_score: f64,
    /// 1-based position after fusion; 0 before fusion.
    pub rank: usize,
    /// Passthrough of source-specific fields (timestamps, entity type,
    /// original distance, ...).
    pub metadata: Map<String, Value>,
}

impl Candidate {
    /// Create an unfused candidate.
    ///
    /// Fails on an empty id or a negative original score; the parsing
    /// boundary screens raw inputs, but construction re-validates rather
    /// than trusting upstream data.
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        source: CandidateSource,
        kind: CandidateKind,
        original_score: f64,
    ) -> FusionResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(FusionError::EmptyCandidateId);
        }
        if original_score < 0.0 {
            return Err(FusionError::NegativeScore {
                score: original_score,
            });
        }
        Ok(Self {
            id,
            content: content.into(),
            source,
            kind,
            original_score,
            fused_score: 0.0,
            rank: 0,
            metadata: Map::new(),
        })
    }

    /// Attach source-specific passthrough fields.
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }
}
