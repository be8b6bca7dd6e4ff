//! Tiered cascade retrieval: graph tier first, vector fallback via RRF.
//!
//! Tier 1 answers alone when the graph store returns enough high-quality
//! records. Tier 2 fuses both lists with RRF and is never issued
//! speculatively: in the async form the vector retrieval only runs after
//! the graph tier has been evaluated and found insufficient.

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use mnemo_core::candidate::{graph_candidates, vector_candidates};
use mnemo_core::{Candidate, CascadeConfig, FusionError, FusionResult};

use super::{rrf, Accumulator};

/// Which tier produced the final ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeTier {
    GraphOnly,
    Fused,
}

/// Outcome of one cascade call: the ranked list plus enough context for
/// the caller to log a degraded-quality warning when the graph tier was
/// insufficient and no fallback ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadeOutcome {
    pub results: Vec<Candidate>,
    pub tier: CascadeTier,
    /// Total graph records received.
    pub graph_count: usize,
    /// Graph records at or above the quality threshold.
    pub high_quality_count: usize,
    /// Whether the vector fallback was invoked.
    pub vector_triggered: bool,
    /// Decision annotations, e.g. `fallback_reason`.
    pub metadata: Map<String, Value>,
}

/// Run the cascade over pre-fetched raw result lists.
pub fn cascade(
    graph_results: &[Value],
    vector_results: &[Value],
    config: &CascadeConfig,
) -> FusionResult<CascadeOutcome> {
    let graph = graph_candidates(graph_results)?;
    let vector = vector_candidates(vector_results)?;
    Ok(cascade_candidates(graph, vector, config))
}

/// Async cascade: awaits the graph retrieval, evaluates the tier decision,
/// and awaits the vector retrieval only when tier 2 is required.
///
/// Retrieval-callback errors propagate unchanged; this layer never
/// retries or translates them.
pub async fn cascade_with<G, GFut, V, VFut, E>(
    query: &str,
    fetch_graph: G,
    fetch_vector: V,
    config: &CascadeConfig,
) -> Result<CascadeOutcome, E>
where
    G: FnOnce(&str) -> GFut,
    GFut: Future<Output = Result<Vec<Value>, E>>,
    V: FnOnce(&str) -> VFut,
    VFut: Future<Output = Result<Vec<Value>, E>>,
    E: From<FusionError>,
{
    let graph_results = fetch_graph(query).await?;
    let graph = graph_candidates(&graph_results).map_err(E::from)?;

    let high_quality_count = graph
        .iter()
        .filter(|c| c.original_score >= config.graph_min_score)
        .count();
    let needs_fallback =
        high_quality_count < config.graph_threshold && config.use_vector_fallback;

    let vector = if needs_fallback {
        let vector_results = fetch_vector(query).await?;
        vector_candidates(&vector_results).map_err(E::from)?
    } else {
        Vec::new()
    };

    Ok(cascade_candidates(graph, vector, config))
}

fn cascade_candidates(
    graph: Vec<Candidate>,
    vector: Vec<Candidate>,
    config: &CascadeConfig,
) -> CascadeOutcome {
    let graph_count = graph.len();
    let high_quality: Vec<Candidate> = graph
        .iter()
        .filter(|c| c.original_score >= config.graph_min_score)
        .cloned()
        .collect();
    let high_quality_count = high_quality.len();

    debug!(
        graph_count,
        high_quality_count,
        threshold = config.graph_threshold,
        "cascade tier decision"
    );

    if high_quality_count >= config.graph_threshold {
        return CascadeOutcome {
            results: rank_by_original(high_quality, config.top_n),
            tier: CascadeTier::GraphOnly,
            graph_count,
            high_quality_count,
            vector_triggered: false,
            metadata: Map::new(),
        };
    }

    if !config.use_vector_fallback || vector.is_empty() {
        let reason = if config.use_vector_fallback {
            "no_vector_results"
        } else {
            "vector_fallback_disabled"
        };
        warn!(
            reason,
            high_quality_count,
            threshold = config.graph_threshold,
            "cascade staying graph-only below quality threshold"
        );
        let mut metadata = Map::new();
        metadata.insert(
            "fallback_reason".to_string(),
            Value::String(reason.to_string()),
        );
        return CascadeOutcome {
            results: rank_by_original(graph, config.top_n),
            tier: CascadeTier::GraphOnly,
            graph_count,
            high_quality_count,
            vector_triggered: false,
            metadata,
        };
    }

    let results = rrf::fuse_candidates(graph, vector, config.rrf_k, Some(config.top_n));
    CascadeOutcome {
        results,
        tier: CascadeTier::Fused,
        graph_count,
        high_quality_count,
        vector_triggered: true,
        metadata: Map::new(),
    }
}

/// Rank a graph-only tier by the source's own score.
fn rank_by_original(candidates: Vec<Candidate>, top_n: usize) -> Vec<Candidate> {
    let mut accumulator = Accumulator::new();
    for candidate in candidates {
        let score = candidate.original_score;
        accumulator.fold(candidate, score);
    }
    accumulator.finalize(Some(top_n))
}
