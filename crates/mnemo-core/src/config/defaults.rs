//! Default parameter values for fusion strategies.

/// RRF smoothing constant. Higher k reduces the influence of high-ranking
/// items from any single list.
pub const DEFAULT_RRF_K: u32 = 60;

/// Weighted-fusion graph weight.
pub const DEFAULT_GRAPH_WEIGHT: f64 = 0.7;

/// Weighted-fusion vector weight.
pub const DEFAULT_VECTOR_WEIGHT: f64 = 0.3;

/// Cascade: minimum high-quality graph records to stay graph-only.
pub const DEFAULT_GRAPH_THRESHOLD: usize = 5;

/// Cascade: score at or above which a graph record counts as high quality.
pub const DEFAULT_GRAPH_MIN_SCORE: f64 = 0.7;

/// Cascade: result cutoff applied to whichever tier answers.
pub const DEFAULT_CASCADE_TOP_N: usize = 10;
