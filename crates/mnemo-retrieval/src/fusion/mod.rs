//! Fusion algorithms over graph-store and vector-store result lists.

pub mod cascade;
pub mod rrf;
pub mod weighted;

use std::collections::HashMap;

use mnemo_core::Candidate;

/// Insertion-ordered score accumulator keyed by canonical id.
///
/// Overlapping ids accumulate contributions instead of duplicating. The
/// record body is materialized on first sight; a duplicate id within the
/// same source list replaces the body (last write wins) while every
/// occurrence's contribution still counts. Insertion order is what the
/// final stable sort falls back to on score ties, so fold the graph list
/// before the vector list.
pub(crate) struct Accumulator {
    records: Vec<Candidate>,
    scores: Vec<f64>,
    by_id: HashMap<String, usize>,
}

impl Accumulator {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            scores: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    pub(crate) fn fold(&mut self, candidate: Candidate, contribution: f64) {
        if let Some(&slot) = self.by_id.get(&candidate.id) {
            self.scores[slot] += contribution;
            if self.records[slot].source == candidate.source {
                self.records[slot] = candidate;
            }
        } else {
            self.by_id.insert(candidate.id.clone(), self.records.len());
            self.records.push(candidate);
            self.scores.push(contribution);
        }
    }

    /// Assign fused scores and 1-based ranks, sort descending, truncate.
    ///
    /// The sort is stable, so equal scores keep first-insertion order.
    /// That, not hash-map iteration order, is what makes repeated runs
    /// byte-identical.
    pub(crate) fn finalize(self, top_n: Option<usize>) -> Vec<Candidate> {
        let Self {
            mut records, scores, ..
        } = self;
        for (record, score) in records.iter_mut().zip(&scores) {
            record.fused_score = *score;
        }
        records.sort_by(|a, b| {
            b.fused_score
                .partial_cmp(&a.fused_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (position, record) in records.iter_mut().enumerate() {
            record.rank = position + 1;
        }
        if let Some(n) = top_n {
            records.truncate(n);
        }
        records
    }
}
