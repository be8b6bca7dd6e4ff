//! Error types for the fusion engine.
//!
//! Every variant is a caller-input error; this core performs no I/O and
//! never retries internally.

mod fusion_error;

pub use fusion_error::FusionError;

/// Result alias used across the workspace.
pub type FusionResult<T> = Result<T, FusionError>;
