//! # mnemo-core
//!
//! Foundation crate for the mnemo retrieval fusion engine.
//! Defines the unified candidate record, errors, config, constants, and
//! operation intents. Every other crate in the workspace depends on this.

pub mod candidate;
pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;

// Re-export the most commonly used types at the crate root.
pub use candidate::{Candidate, CandidateKind, CandidateSource};
pub use config::{CascadeConfig, FusionAlgorithm, NormalizationMethod, StrategyConfig};
pub use errors::{FusionError, FusionResult};
pub use intent::OperationIntent;
