//! Weighted score fusion with per-source normalization.
//!
//! Each source's score set is normalized independently (min-max or
//! z-score), then combined as `graph_weight * g + vector_weight * v`; a
//! missing source contributes 0. Vector-store distances were already
//! converted to similarity scores at the parsing boundary, so both
//! sources arrive as higher-is-better values here.

use serde_json::Value;

use mnemo_core::candidate::{graph_candidates, vector_candidates};
use mnemo_core::constants::WEIGHT_SUM_TOLERANCE;
use mnemo_core::{Candidate, FusionError, FusionResult, NormalizationMethod};

use super::Accumulator;

/// Fuse raw graph and vector result lists by normalized weighted scores.
///
/// Fails with `InvalidWeights` before any computation when the weights do
/// not sum to 1.0 within tolerance.
pub fn fuse(
    graph_results: &[Value],
    vector_results: &[Value],
    graph_weight: f64,
    vector_weight: f64,
    normalization: NormalizationMethod,
    top_n: Option<usize>,
) -> FusionResult<Vec<Candidate>> {
    check_weights(graph_weight, vector_weight)?;
    let graph = graph_candidates(graph_results)?;
    let vector = vector_candidates(vector_results)?;
    fuse_candidates(graph, vector, graph_weight, vector_weight, normalization, top_n)
}

/// Fuse two already-canonicalized candidate lists.
///
/// Same stable first-seen tie-break as RRF: graph list folds in first.
pub fn fuse_candidates(
    graph: Vec<Candidate>,
    vector: Vec<Candidate>,
    graph_weight: f64,
    vector_weight: f64,
    normalization: NormalizationMethod,
    top_n: Option<usize>,
) -> FusionResult<Vec<Candidate>> {
    check_weights(graph_weight, vector_weight)?;

    let mut accumulator = Accumulator::new();
    for (weight, list) in [(graph_weight, graph), (vector_weight, vector)] {
        let scores: Vec<f64> = list.iter().map(|c| c.original_score).collect();
        let normalized = normalize(normalization, &scores);
        for (candidate, norm) in list.into_iter().zip(normalized) {
            accumulator.fold(candidate, weight * norm);
        }
    }
    Ok(accumulator.finalize(top_n))
}

fn check_weights(graph_weight: f64, vector_weight: f64) -> FusionResult<()> {
    if (graph_weight + vector_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(FusionError::InvalidWeights {
            graph: graph_weight,
            vector: vector_weight,
        });
    }
    Ok(())
}

fn normalize(method: NormalizationMethod, values: &[f64]) -> Vec<f64> {
    match method {
        NormalizationMethod::MinMax => min_max(values),
        // Z-scores are unbounded; rescale them into [0, 1] so the weighted
        // combination stays comparable across sources.
        NormalizationMethod::ZScore => min_max(&z_scores(values)),
    }
}

fn min_max(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let range = max - min;
    if range.abs() < f64::EPSILON {
        // All-equal source: neutral midpoint instead of dividing by zero.
        return vec![0.5; values.len()];
    }
    values.iter().map(|v| (v - min) / range).collect()
}

fn z_scores(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    let std = if variance > 0.0 { variance.sqrt() } else { 1.0 };
    values.iter().map(|v| (v - mean) / std).collect()
}
