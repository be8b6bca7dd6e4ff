//! # mnemo-retrieval
//!
//! Multi-source retrieval fusion for the mnemo engine: reciprocal-rank
//! fusion, weighted normalization fusion, and tiered cascade over the
//! graph and vector stores, plus intent-driven strategy dispatch and
//! MRR@K evaluation.
//!
//! All synchronous entry points are pure CPU-bound transforms: no I/O, no
//! shared mutable state, deterministic for a fixed input order and
//! configuration. The async cascade is the only suspension point.

pub mod eval;
pub mod fusion;
pub mod strategy;

pub use fusion::cascade::{CascadeOutcome, CascadeTier};
pub use strategy::StrategyTable;
