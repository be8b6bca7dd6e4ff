/// Fusion subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum FusionError {
    #[error("fusion weights must sum to 1.0: graph={graph}, vector={vector}")]
    InvalidWeights { graph: f64, vector: f64 },

    #[error("unknown normalization method: {name}")]
    UnknownNormalization { name: String },

    #[error("unknown fusion algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("unknown operation intent: {name}")]
    UnknownIntent { name: String },

    #[error("candidate id must not be empty")]
    EmptyCandidateId,

    #[error("candidate score must be non-negative, got {score}")]
    NegativeScore { score: f64 },

    #[error("invalid strategy config: {reason}")]
    ConfigParse { reason: String },
}
