/// Mnemo system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical-id prefix for records originating in the graph store.
pub const GRAPH_ID_PREFIX: &str = "graphiti";

/// Canonical-id prefix for records originating in the vector store.
pub const VECTOR_ID_PREFIX: &str = "lancedb";

/// Tolerance when checking that fusion weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// MRR@10 acceptance target for the evaluation gate.
pub const MRR_ACCEPTANCE_TARGET: f64 = 0.350;
