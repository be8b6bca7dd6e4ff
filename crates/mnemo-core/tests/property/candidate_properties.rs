use mnemo_core::candidate::{graph_candidate, vector_candidate};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn graph_parse_never_panics(
        id in "[a-zA-Z0-9_-]{0,12}",
        kind in "(node|edge|episode|unknown)",
        score in 0.0f64..1000.0,
        position in 0usize..64,
    ) {
        let record = json!({"id": id, "type": kind, "score": score});
        let candidate = graph_candidate(&record, position).unwrap();
        prop_assert!(candidate.id.starts_with("graphiti_"));
        prop_assert!(candidate.original_score >= 0.0);
    }

    #[test]
    fn vector_score_is_in_unit_interval(
        doc_id in "[a-zA-Z0-9_-]{1,12}",
        distance in -10.0f64..1000.0,
    ) {
        let record = json!({"doc_id": doc_id, "distance": distance});
        let candidate = vector_candidate(&record, 0).unwrap();
        // 1/(1+d) for d >= 0, clamped to 0 for negative distances.
        prop_assert!(candidate.original_score >= 0.0);
        prop_assert!(candidate.original_score <= 1.0);
    }

    #[test]
    fn canonical_id_is_position_independent_when_id_present(
        id in "[a-zA-Z0-9_-]{1,12}",
        a in 0usize..64,
        b in 0usize..64,
    ) {
        let record = json!({"id": id});
        let first = graph_candidate(&record, a).unwrap();
        let second = graph_candidate(&record, b).unwrap();
        prop_assert_eq!(first.id, second.id);
    }

    #[test]
    fn placeholder_ids_are_deterministic(position in 0usize..256) {
        let record = json!({"score": 0.5});
        let first = graph_candidate(&record, position).unwrap();
        let second = graph_candidate(&record, position).unwrap();
        prop_assert_eq!(first.id, second.id);
    }
}
