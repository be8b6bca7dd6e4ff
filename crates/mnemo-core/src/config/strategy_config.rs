use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::FusionError;

/// Score normalization applied to each source before weighted combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMethod {
    /// `(x - min) / (max - min)`, all-equal source maps to 0.5.
    #[default]
    MinMax,
    /// `(x - mean) / std`, then rescaled into [0, 1] via min-max.
    ZScore,
}

impl NormalizationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            NormalizationMethod::MinMax => "min_max",
            NormalizationMethod::ZScore => "z_score",
        }
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationMethod {
    type Err = FusionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min_max" => Ok(NormalizationMethod::MinMax),
            "z_score" => Ok(NormalizationMethod::ZScore),
            other => Err(FusionError::UnknownNormalization {
                name: other.to_string(),
            }),
        }
    }
}

/// The closed set of fusion algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionAlgorithm {
    /// Rank-only reciprocal-rank fusion.
    #[default]
    Rrf,
    /// Normalized weighted score combination.
    Weighted,
    /// Graph tier first, RRF fallback when it is insufficient.
    Cascade,
}

impl FusionAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            FusionAlgorithm::Rrf => "rrf",
            FusionAlgorithm::Weighted => "weighted",
            FusionAlgorithm::Cascade => "cascade",
        }
    }
}

impl fmt::Display for FusionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FusionAlgorithm {
    type Err = FusionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rrf" => Ok(FusionAlgorithm::Rrf),
            "weighted" => Ok(FusionAlgorithm::Weighted),
            "cascade" => Ok(FusionAlgorithm::Cascade),
            other => Err(FusionError::UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// Full parameter set for one fusion strategy.
///
/// The struct is flat; `algorithm` decides which fields are read. Fields
/// not used by the selected algorithm are carried but ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub algorithm: FusionAlgorithm,
    /// RRF smoothing constant (also used by cascade tier 2).
    pub rrf_k: u32,
    pub graph_weight: f64,
    pub vector_weight: f64,
    pub normalization: NormalizationMethod,
    /// Cascade: minimum high-quality graph records to stay graph-only.
    pub graph_threshold: usize,
    /// Cascade: score at or above which a graph record is high quality.
    pub graph_min_score: f64,
    /// Cascade: whether tier 2 may run at all.
    pub use_vector_fallback: bool,
    /// Result cutoff; `None` returns the full fused list (cascade falls
    /// back to its own default cutoff).
    pub top_n: Option<usize>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            algorithm: FusionAlgorithm::Rrf,
            rrf_k: defaults::DEFAULT_RRF_K,
            graph_weight: defaults::DEFAULT_GRAPH_WEIGHT,
            vector_weight: defaults::DEFAULT_VECTOR_WEIGHT,
            normalization: NormalizationMethod::MinMax,
            graph_threshold: defaults::DEFAULT_GRAPH_THRESHOLD,
            graph_min_score: defaults::DEFAULT_GRAPH_MIN_SCORE,
            use_vector_fallback: true,
            top_n: None,
        }
    }
}

impl StrategyConfig {
    /// Project the cascade-relevant fields into a `CascadeConfig`.
    pub fn cascade_config(&self) -> CascadeConfig {
        CascadeConfig {
            graph_threshold: self.graph_threshold,
            graph_min_score: self.graph_min_score,
            use_vector_fallback: self.use_vector_fallback,
            rrf_k: self.rrf_k,
            top_n: self.top_n.unwrap_or(defaults::DEFAULT_CASCADE_TOP_N),
        }
    }
}

/// Parameters for tiered cascade retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    /// Minimum number of high-quality graph records to stay graph-only.
    pub graph_threshold: usize,
    /// Score at or above which a graph record counts as high quality.
    pub graph_min_score: f64,
    /// Whether tier 2 (vector fallback fused via RRF) may run at all.
    pub use_vector_fallback: bool,
    /// RRF constant used when tier 2 fuses both lists.
    pub rrf_k: u32,
    /// Result cutoff applied to whichever tier answers.
    pub top_n: usize,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            graph_threshold: defaults::DEFAULT_GRAPH_THRESHOLD,
            graph_min_score: defaults::DEFAULT_GRAPH_MIN_SCORE,
            use_vector_fallback: true,
            rrf_k: defaults::DEFAULT_RRF_K,
            top_n: defaults::DEFAULT_CASCADE_TOP_N,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_parses_known_names() {
        assert_eq!("rrf".parse::<FusionAlgorithm>().unwrap(), FusionAlgorithm::Rrf);
        assert_eq!(
            "weighted".parse::<FusionAlgorithm>().unwrap(),
            FusionAlgorithm::Weighted
        );
        assert_eq!(
            "cascade".parse::<FusionAlgorithm>().unwrap(),
            FusionAlgorithm::Cascade
        );
    }

    #[test]
    fn unknown_algorithm_names_the_offender() {
        let err = "hybrid".parse::<FusionAlgorithm>().unwrap_err();
        assert_eq!(err.to_string(), "unknown fusion algorithm: hybrid");
    }

    #[test]
    fn unknown_normalization_names_the_offender() {
        let err = "softmax".parse::<NormalizationMethod>().unwrap_err();
        assert_eq!(err.to_string(), "unknown normalization method: softmax");
    }

    #[test]
    fn cascade_projection_uses_default_cutoff_when_top_n_unset() {
        let config = StrategyConfig {
            algorithm: FusionAlgorithm::Cascade,
            ..StrategyConfig::default()
        };
        assert_eq!(config.cascade_config().top_n, defaults::DEFAULT_CASCADE_TOP_N);

        let config = StrategyConfig {
            top_n: Some(3),
            ..config
        };
        assert_eq!(config.cascade_config().top_n, 3);
    }
}
