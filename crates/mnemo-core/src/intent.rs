//! Declared operation intents.
//!
//! Callers declare what they are retrieving for; the strategy table maps
//! each intent to a fusion algorithm and its parameters. The set is closed:
//! adding an intent means adding a variant here and a row in the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FusionError;

/// What the caller is retrieving for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationIntent {
    /// Verification-canvas generation: needs high-precision graph facts.
    CanvasGeneration,
    /// Clustering a learner's weak points from mastery history.
    WeakPointClustering,
    /// Concept-relation lookup in the knowledge graph.
    ConceptRelation,
    /// Document retrieval from the vector store.
    DocumentRetrieval,
    /// General query with no stronger signal.
    GeneralQuery,
}

impl OperationIntent {
    pub const ALL: [OperationIntent; 5] = [
        OperationIntent::CanvasGeneration,
        OperationIntent::WeakPointClustering,
        OperationIntent::ConceptRelation,
        OperationIntent::DocumentRetrieval,
        OperationIntent::GeneralQuery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OperationIntent::CanvasGeneration => "canvas_generation",
            OperationIntent::WeakPointClustering => "weak_point_clustering",
            OperationIntent::ConceptRelation => "concept_relation",
            OperationIntent::DocumentRetrieval => "document_retrieval",
            OperationIntent::GeneralQuery => "general_query",
        }
    }
}

impl fmt::Display for OperationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationIntent {
    type Err = FusionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canvas_generation" => Ok(OperationIntent::CanvasGeneration),
            "weak_point_clustering" => Ok(OperationIntent::WeakPointClustering),
            "concept_relation" => Ok(OperationIntent::ConceptRelation),
            "document_retrieval" => Ok(OperationIntent::DocumentRetrieval),
            "general_query" => Ok(OperationIntent::GeneralQuery),
            other => Err(FusionError::UnknownIntent {
                name: other.to_string(),
            }),
        }
    }
}
