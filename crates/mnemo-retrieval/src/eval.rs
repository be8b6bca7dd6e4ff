//! Ranking-quality evaluation: MRR@K and hit-rate@K over labeled queries.
//!
//! Offline-facing: wraps a fusion function and a labeled query set into a
//! plain metrics report suitable for logging or a CI acceptance gate. The
//! query loop is sequential; each fusion call is independent and
//! side-effect-free, so parallelizing it is a possible improvement, not a
//! required behavior.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use mnemo_core::constants::MRR_ACCEPTANCE_TARGET;
use mnemo_core::Candidate;

/// One labeled test query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledQuery {
    pub query: String,
    /// Canonical ids considered relevant for this query.
    pub relevant_ids: Vec<String>,
}

/// Reciprocal rank of the first relevant item within the top `k`:
/// `1/(position+1)` with 0-indexed position, or 0.0 when none of the
/// first `k` items is relevant.
pub fn reciprocal_rank_at_k(
    ranked_ids: &[String],
    relevant_ids: &HashSet<String>,
    k: usize,
) -> f64 {
    ranked_ids
        .iter()
        .take(k)
        .position(|id| relevant_ids.contains(id))
        .map(|position| 1.0 / (position as f64 + 1.0))
        .unwrap_or(0.0)
}

/// True when any of the first `k` items is relevant.
pub fn hit_at_k(ranked_ids: &[String], relevant_ids: &HashSet<String>, k: usize) -> bool {
    ranked_ids.iter().take(k).any(|id| relevant_ids.contains(id))
}

/// Per-query outcome retained in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub query: String,
    pub reciprocal_rank: f64,
}

/// Aggregate metrics for one strategy over a labeled query set.
/// Numbers only; serializable for logging or a CI gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    pub k: usize,
    pub query_count: usize,
    pub mrr_at_k: f64,
    pub hit_rate_at_1: f64,
    pub hit_rate_at_5: f64,
    pub hit_rate_at_10: f64,
    pub per_query: Vec<QueryOutcome>,
    /// Whether `mrr_at_k` clears the fixed 0.350 acceptance target
    /// (calibrated at k = 10).
    pub meets_target: bool,
}

/// Run `fusion` over every labeled query and aggregate MRR@K and hit
/// rates. An empty query set yields an all-zero report that fails the
/// target.
pub fn evaluate<F>(queries: &[LabeledQuery], fusion: F, k: usize) -> EvalReport
where
    F: Fn(&str) -> Vec<Candidate>,
{
    let mut per_query = Vec::with_capacity(queries.len());
    let mut reciprocal_rank_sum = 0.0;
    let (mut hits_1, mut hits_5, mut hits_10) = (0usize, 0usize, 0usize);

    for labeled in queries {
        let ranked_ids: Vec<String> = fusion(&labeled.query).into_iter().map(|c| c.id).collect();
        let relevant: HashSet<String> = labeled.relevant_ids.iter().cloned().collect();

        let reciprocal_rank = reciprocal_rank_at_k(&ranked_ids, &relevant, k);
        reciprocal_rank_sum += reciprocal_rank;
        hits_1 += usize::from(hit_at_k(&ranked_ids, &relevant, 1));
        hits_5 += usize::from(hit_at_k(&ranked_ids, &relevant, 5));
        hits_10 += usize::from(hit_at_k(&ranked_ids, &relevant, 10));

        per_query.push(QueryOutcome {
            query: labeled.query.clone(),
            reciprocal_rank,
        });
    }

    let count = queries.len().max(1) as f64;
    let mrr_at_k = reciprocal_rank_sum / count;

    EvalReport {
        k,
        query_count: queries.len(),
        mrr_at_k,
        hit_rate_at_1: hits_1 as f64 / count,
        hit_rate_at_5: hits_5 as f64 / count,
        hit_rate_at_10: hits_10 as f64 / count,
        per_query,
        meets_target: mrr_at_k >= MRR_ACCEPTANCE_TARGET,
    }
}

/// Evaluate several named strategies side by side. Output order follows
/// input order.
pub fn compare_strategies(
    queries: &[LabeledQuery],
    strategies: &[(&str, &dyn Fn(&str) -> Vec<Candidate>)],
    k: usize,
) -> Vec<(String, EvalReport)> {
    strategies
        .iter()
        .map(|(name, fusion)| ((*name).to_string(), evaluate(queries, fusion, k)))
        .collect()
}
