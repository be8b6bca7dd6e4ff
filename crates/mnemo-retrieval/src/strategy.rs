//! Intent → fusion strategy table and dispatch.
//!
//! Each declared operation intent maps to one fusion algorithm and its
//! parameters. Default strategies are hardcoded; they can be overridden
//! via TOML config. The table is built once at startup and never mutated,
//! so concurrent readers need no synchronization.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use mnemo_core::{
    Candidate, FusionAlgorithm, FusionError, FusionResult, NormalizationMethod, OperationIntent,
    StrategyConfig,
};

use crate::fusion::{cascade, rrf, weighted};

/// Static intent → strategy table.
#[derive(Debug)]
pub struct StrategyTable {
    strategies: HashMap<OperationIntent, StrategyConfig>,
    /// Served for intents without their own row.
    default_strategy: StrategyConfig,
}

impl StrategyTable {
    /// Create with hardcoded default strategies.
    pub fn with_defaults() -> Self {
        let mut strategies = HashMap::new();

        // Verification-canvas generation: only high-precision graph facts
        // are acceptable; cascade into fusion when the graph tier is thin.
        strategies.insert(
            OperationIntent::CanvasGeneration,
            StrategyConfig {
                algorithm: FusionAlgorithm::Cascade,
                ..StrategyConfig::default()
            },
        );

        // Weak-point clustering: mastery signals live in the graph.
        strategies.insert(
            OperationIntent::WeakPointClustering,
            StrategyConfig {
                algorithm: FusionAlgorithm::Weighted,
                graph_weight: 0.8,
                vector_weight: 0.2,
                ..StrategyConfig::default()
            },
        );

        // Concept-relation lookup: graph-led, vector as secondary evidence.
        strategies.insert(
            OperationIntent::ConceptRelation,
            StrategyConfig {
                algorithm: FusionAlgorithm::Weighted,
                graph_weight: 0.7,
                vector_weight: 0.3,
                ..StrategyConfig::default()
            },
        );

        // Document retrieval: the vector store is the native source.
        strategies.insert(
            OperationIntent::DocumentRetrieval,
            StrategyConfig {
                algorithm: FusionAlgorithm::Weighted,
                graph_weight: 0.3,
                vector_weight: 0.7,
                ..StrategyConfig::default()
            },
        );

        // General query: rank-only fusion, no score-scale assumptions.
        strategies.insert(OperationIntent::GeneralQuery, StrategyConfig::default());

        Self {
            strategies,
            default_strategy: StrategyConfig::default(),
        }
    }

    /// Merge per-intent overrides from a TOML document onto the defaults.
    ///
    /// ```toml
    /// [document_retrieval]
    /// algorithm = "weighted"
    /// graph_weight = 0.2
    /// vector_weight = 0.8
    /// ```
    ///
    /// Unknown intent, algorithm, or normalization names fail with an
    /// error naming the offending value.
    pub fn from_toml_str(overrides: &str) -> FusionResult<Self> {
        let parsed: HashMap<String, StrategyOverride> =
            toml::from_str(overrides).map_err(|e| FusionError::ConfigParse {
                reason: e.to_string(),
            })?;

        let mut table = Self::with_defaults();
        for (name, over) in parsed {
            let intent: OperationIntent = name.parse()?;
            let entry = table
                .strategies
                .entry(intent)
                .or_insert_with(StrategyConfig::default);
            over.apply(entry)?;
        }
        Ok(table)
    }

    /// Which algorithm serves the given intent.
    pub fn algorithm_for(&self, intent: OperationIntent) -> FusionAlgorithm {
        self.config_for(intent).algorithm
    }

    /// Full parameter set for the given intent.
    pub fn config_for(&self, intent: OperationIntent) -> &StrategyConfig {
        self.strategies.get(&intent).unwrap_or(&self.default_strategy)
    }

    /// Fuse with the strategy registered for `intent`. A caller-supplied
    /// `top_n` overrides the strategy's own cutoff.
    pub fn execute(
        &self,
        intent: OperationIntent,
        graph_results: &[Value],
        vector_results: &[Value],
        top_n: Option<usize>,
    ) -> FusionResult<Vec<Candidate>> {
        let config = self.config_for(intent);
        debug!(
            intent = %intent,
            algorithm = %config.algorithm,
            "dispatching fusion strategy"
        );
        Self::execute_config(config, graph_results, vector_results, top_n)
    }

    /// Single dispatch point over the closed algorithm set.
    pub fn execute_config(
        config: &StrategyConfig,
        graph_results: &[Value],
        vector_results: &[Value],
        top_n: Option<usize>,
    ) -> FusionResult<Vec<Candidate>> {
        let top_n = top_n.or(config.top_n);
        match config.algorithm {
            FusionAlgorithm::Rrf => rrf::fuse(graph_results, vector_results, config.rrf_k, top_n),
            FusionAlgorithm::Weighted => weighted::fuse(
                graph_results,
                vector_results,
                config.graph_weight,
                config.vector_weight,
                config.normalization,
                top_n,
            ),
            FusionAlgorithm::Cascade => {
                let mut cascade_config = config.cascade_config();
                if let Some(n) = top_n {
                    cascade_config.top_n = n;
                }
                Ok(cascade::cascade(graph_results, vector_results, &cascade_config)?.results)
            }
        }
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Partial per-intent override parsed from TOML. Algorithm and
/// normalization arrive as plain strings so bad values fail through the
/// same named errors as everywhere else.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StrategyOverride {
    algorithm: Option<String>,
    rrf_k: Option<u32>,
    graph_weight: Option<f64>,
    vector_weight: Option<f64>,
    normalization: Option<String>,
    graph_threshold: Option<usize>,
    graph_min_score: Option<f64>,
    use_vector_fallback: Option<bool>,
    top_n: Option<usize>,
}

impl StrategyOverride {
    fn apply(&self, config: &mut StrategyConfig) -> FusionResult<()> {
        if let Some(algorithm) = &self.algorithm {
            config.algorithm = algorithm.parse::<FusionAlgorithm>()?;
        }
        if let Some(normalization) = &self.normalization {
            config.normalization = normalization.parse::<NormalizationMethod>()?;
        }
        if let Some(rrf_k) = self.rrf_k {
            config.rrf_k = rrf_k;
        }
        if let Some(graph_weight) = self.graph_weight {
            config.graph_weight = graph_weight;
        }
        if let Some(vector_weight) = self.vector_weight {
            config.vector_weight = vector_weight;
        }
        if let Some(graph_threshold) = self.graph_threshold {
            config.graph_threshold = graph_threshold;
        }
        if let Some(graph_min_score) = self.graph_min_score {
            config.graph_min_score = graph_min_score;
        }
        if let Some(use_vector_fallback) = self.use_vector_fallback {
            config.use_vector_fallback = use_vector_fallback;
        }
        if let Some(top_n) = self.top_n {
            config.top_n = Some(top_n);
        }
        Ok(())
    }
}
