use proptest::collection::vec;
use proptest::prelude::*;
use serde_json::{json, Value};

use mnemo_core::NormalizationMethod;
use mnemo_retrieval::fusion::{rrf, weighted};

/// Raw graph records with unique per-index ids and bounded scores.
fn graph_list(max_len: usize) -> impl Strategy<Value = Vec<Value>> {
    vec(0.0f64..1.0, 0..max_len).prop_map(|scores| {
        scores
            .iter()
            .enumerate()
            .map(|(i, score)| json!({"id": format!("g{i}"), "score": score}))
            .collect()
    })
}

/// Raw vector records with unique per-index ids and bounded distances.
fn vector_list(max_len: usize) -> impl Strategy<Value = Vec<Value>> {
    vec(0.0f64..10.0, 0..max_len).prop_map(|distances| {
        distances
            .iter()
            .enumerate()
            .map(|(i, distance)| json!({"doc_id": format!("v{i}"), "distance": distance}))
            .collect()
    })
}

proptest! {
    #[test]
    fn rrf_output_is_sorted_descending_with_contiguous_ranks(
        graph in graph_list(24),
        vector in vector_list(24),
        k in 1u32..200,
    ) {
        let fused = rrf::fuse(&graph, &vector, k, None).unwrap();
        for window in fused.windows(2) {
            prop_assert!(window[0].fused_score >= window[1].fused_score);
        }
        for (position, candidate) in fused.iter().enumerate() {
            prop_assert_eq!(candidate.rank, position + 1);
        }
    }

    #[test]
    fn rrf_is_deterministic(graph in graph_list(16), vector in vector_list(16)) {
        let first = rrf::fuse(&graph, &vector, 60, None).unwrap();
        let second = rrf::fuse(&graph, &vector, 60, None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rrf_respects_top_n(
        graph in graph_list(24),
        vector in vector_list(24),
        top_n in 0usize..32,
    ) {
        let fused = rrf::fuse(&graph, &vector, 60, Some(top_n)).unwrap();
        prop_assert!(fused.len() <= top_n);
    }

    #[test]
    fn rrf_union_covers_all_distinct_ids(graph in graph_list(16), vector in vector_list(16)) {
        let fused = rrf::fuse(&graph, &vector, 60, None).unwrap();
        // Ids are unique per list and the two sources carry different
        // prefixes, so the union is exactly the sum of list lengths.
        prop_assert_eq!(fused.len(), graph.len() + vector.len());
    }

    #[test]
    fn weighted_scores_stay_in_unit_interval(
        graph in graph_list(16),
        vector in vector_list(16),
        graph_weight in 0.0f64..=1.0,
        normalization in prop_oneof![
            Just(NormalizationMethod::MinMax),
            Just(NormalizationMethod::ZScore),
        ],
    ) {
        let vector_weight = 1.0 - graph_weight;
        let fused = weighted::fuse(&graph, &vector, graph_weight, vector_weight, normalization, None)
            .unwrap();
        // Unique ids per source: each candidate gets one contribution of
        // weight * norm with norm in [0, 1].
        for candidate in &fused {
            prop_assert!(candidate.fused_score >= -1e-12);
            prop_assert!(candidate.fused_score <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn weighted_is_deterministic(graph in graph_list(12), vector in vector_list(12)) {
        let first = weighted::fuse(&graph, &vector, 0.7, 0.3, NormalizationMethod::ZScore, None)
            .unwrap();
        let second = weighted::fuse(&graph, &vector, 0.7, 0.3, NormalizationMethod::ZScore, None)
            .unwrap();
        prop_assert_eq!(first, second);
    }
}
