//! Reciprocal Rank Fusion: score = Σ 1/(k + rank_i)
//!
//! Combines the graph and vector result lists into a single fused ranking
//! without requiring score normalization across the two retrieval methods.
//! Input lists are consumed in the order given; they are never re-sorted.

use serde_json::Value;

use mnemo_core::candidate::{graph_candidates, vector_candidates};
use mnemo_core::{Candidate, FusionResult};

use super::Accumulator;

/// Fuse raw graph and vector result lists with RRF.
///
/// `k` is the smoothing constant (default 60). Higher k reduces the
/// influence of high-ranking items from any single list; smaller k
/// concentrates score mass on top ranks.
pub fn fuse(
    graph_results: &[Value],
    vector_results: &[Value],
    k: u32,
    top_n: Option<usize>,
) -> FusionResult<Vec<Candidate>> {
    let graph = graph_candidates(graph_results)?;
    let vector = vector_candidates(vector_results)?;
    Ok(fuse_candidates(graph, vector, k, top_n))
}

/// Fuse two already-canonicalized candidate lists.
///
/// An item at 1-based rank `r` in a list contributes `1/(k+r)` to its
/// accumulator. Ties keep first-insertion order: the graph list folds in
/// before the vector list, each in input order.
pub fn fuse_candidates(
    graph: Vec<Candidate>,
    vector: Vec<Candidate>,
    k: u32,
    top_n: Option<usize>,
) -> Vec<Candidate> {
    let mut accumulator = Accumulator::new();
    for list in [graph, vector] {
        for (position, candidate) in list.into_iter().enumerate() {
            let contribution = 1.0 / (f64::from(k) + (position as f64 + 1.0));
            accumulator.fold(candidate, contribution);
        }
    }
    accumulator.finalize(top_n)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rank_one_contributes_exactly_one_over_k_plus_one() {
        let fused = fuse(&[json!({"id": "n1", "score": 0.9})], &[], 60, None).unwrap();
        assert_eq!(fused.len(), 1);
        assert!((fused[0].fused_score - 1.0 / 61.0).abs() < 1e-12);
    }

    #[test]
    fn rank_one_ties_put_the_graph_record_first() {
        let graph = vec![
            json!({"id": "g1", "score": 0.9}),
            json!({"id": "g2", "score": 0.8}),
        ];
        let vector = vec![
            json!({"doc_id": "v1", "distance": 0.1}),
            json!({"doc_id": "v2", "distance": 0.2}),
        ];
        let fused = fuse(&graph, &vector, 60, None).unwrap();
        assert_eq!(fused.len(), 4);

        // Rank-1 graph and rank-1 vector tie at 1/61; first-seen order
        // resolves it in favor of the graph list.
        assert_eq!(fused[0].id, "graphiti_node_g1");
        assert_eq!(fused[1].id, "lancedb_v1");
        assert_eq!(fused[2].id, "graphiti_node_g2");
        assert_eq!(fused[3].id, "lancedb_v2");
    }

    #[test]
    fn candidate_seen_in_both_lists_accumulates_one_entry() {
        use mnemo_core::candidate::graph_candidates;

        // Canonical ids make the same item identical no matter which list
        // it arrives in, so a shared candidate fuses into one record with
        // both contributions.
        let shared = graph_candidates(&[json!({"id": "shared", "score": 0.9})]).unwrap();
        let fused = fuse_candidates(shared.clone(), shared, 60, None);

        assert_eq!(fused.len(), 1);
        assert!((fused[0].fused_score - 2.0 / 61.0).abs() < 1e-12);
    }

    #[test]
    fn smaller_k_concentrates_mass_on_top_ranks() {
        let graph = vec![json!({"id": "a"}), json!({"id": "b"})];
        let gap = |k: u32| {
            let fused = fuse(&graph, &[], k, None).unwrap();
            fused[0].fused_score - fused[1].fused_score
        };
        assert!(gap(1) > gap(60));
    }

    #[test]
    fn input_order_is_the_rank_no_resorting() {
        // The second graph item carries a higher original score; RRF must
        // still credit the first item with the rank-1 contribution.
        let graph = vec![
            json!({"id": "low", "score": 0.1}),
            json!({"id": "high", "score": 0.99}),
        ];
        let fused = fuse(&graph, &[], 60, None).unwrap();
        assert_eq!(fused[0].id, "graphiti_node_low");
    }

    #[test]
    fn truncates_to_top_n() {
        let graph: Vec<_> = (0..10).map(|i| json!({"id": format!("n{i}")})).collect();
        let fused = fuse(&graph, &[], 60, Some(3)).unwrap();
        assert_eq!(fused.len(), 3);
        assert_eq!(fused[2].rank, 3);
    }

    #[test]
    fn duplicate_in_one_list_accumulates_both_contributions() {
        let graph = vec![
            json!({"id": "dup", "score": 0.5, "generation": 1}),
            json!({"id": "dup", "score": 0.6, "generation": 2}),
        ];
        let fused = fuse(&graph, &[], 60, None).unwrap();
        assert_eq!(fused.len(), 1);
        assert!((fused[0].fused_score - (1.0 / 61.0 + 1.0 / 62.0)).abs() < 1e-12);
        // Last write wins for the record body.
        assert_eq!(fused[0].metadata["generation"], json!(2));
    }
}
