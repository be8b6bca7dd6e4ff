//! Parsing raw retrieval-backend records into unified candidates.
//!
//! Two narrow functions, one per source, each reading the documented field
//! names with fallbacks rather than reflecting on arbitrary keys. The
//! canonical id must come out identical whether a record is seen in one or
//! both source lists, so overlapping items accumulate instead of
//! duplicating.

use serde_json::{Map, Value};

use crate::constants::{GRAPH_ID_PREFIX, VECTOR_ID_PREFIX};
use crate::errors::FusionResult;

use super::record::{Candidate, CandidateKind, CandidateSource};

/// Convert a whole graph-store result list, preserving input order.
pub fn graph_candidates(records: &[Value]) -> FusionResult<Vec<Candidate>> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| graph_candidate(record, position))
        .collect()
}

/// Convert a whole vector-store result list, preserving input order.
pub fn vector_candidates(records: &[Value]) -> FusionResult<Vec<Candidate>> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| vector_candidate(record, position))
        .collect()
}

/// Convert one raw graph-store record.
///
/// Field contract: `id` or `uuid` (native identifier), `type` in
/// node|edge|episode (default node), `content` or `fact` (payload),
/// `score` (default 0.0). `position` feeds the placeholder id when the
/// record carries no identifier of its own.
pub fn graph_candidate(record: &Value, position: usize) -> FusionResult<Candidate> {
    let fields = record.as_object();
    let native = ident_field(fields, &["id", "uuid"]).unwrap_or_else(|| placeholder(position));
    let kind = match text_field(fields, &["type"]).as_deref() {
        Some("edge") => CandidateKind::Edge,
        Some("episode") => CandidateKind::Episode,
        _ => CandidateKind::Node,
    };
    let content = text_field(fields, &["content", "fact"]).unwrap_or_default();
    let score = float_field(fields, &["score"]).unwrap_or(0.0);
    let id = format!("{GRAPH_ID_PREFIX}_{}_{native}", kind.as_str());

    Ok(
        Candidate::new(id, content, CandidateSource::Graph, kind, score)?
            .with_metadata(fields.cloned().unwrap_or_default()),
    )
}

/// Convert one raw vector-store record.
///
/// Field contract: `doc_id` or `id` (native identifier), `content` or
/// `text` (payload), `distance` or `_distance` (default 0.0 = maximal
/// similarity), optional `type` selecting the media kind. The distance is
/// converted to a similarity score here, `score = 1/(1+distance)`; the raw
/// distance stays available in the metadata passthrough.
pub fn vector_candidate(record: &Value, position: usize) -> FusionResult<Candidate> {
    let fields = record.as_object();
    let native = ident_field(fields, &["doc_id", "id"]).unwrap_or_else(|| placeholder(position));
    let kind = match text_field(fields, &["type"]).as_deref() {
        Some("chunk") => CandidateKind::Chunk,
        Some("image") => CandidateKind::Image,
        Some("pdf") => CandidateKind::Pdf,
        Some("audio") => CandidateKind::Audio,
        Some("video") => CandidateKind::Video,
        _ => CandidateKind::Document,
    };
    let content = text_field(fields, &["content", "text"]).unwrap_or_default();
    let distance = float_field(fields, &["distance", "_distance"]).unwrap_or(0.0);
    let score = if distance < 0.0 {
        0.0
    } else {
        1.0 / (1.0 + distance)
    };
    let id = format!("{VECTOR_ID_PREFIX}_{native}");

    Ok(
        Candidate::new(id, content, CandidateSource::Vector, kind, score)?
            .with_metadata(fields.cloned().unwrap_or_default()),
    )
}

/// Deterministic stand-in identifier for a record that carries none.
fn placeholder(position: usize) -> String {
    format!("item{position}")
}

/// First present identifier among `keys`. Empty strings count as absent;
/// numeric ids are accepted and rendered in decimal.
fn ident_field(fields: Option<&Map<String, Value>>, keys: &[&str]) -> Option<String> {
    let fields = fields?;
    for key in keys {
        match fields.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// First present string among `keys`.
fn text_field(fields: Option<&Map<String, Value>>, keys: &[&str]) -> Option<String> {
    let fields = fields?;
    keys.iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// First present float among `keys`.
fn float_field(fields: Option<&Map<String, Value>>, keys: &[&str]) -> Option<f64> {
    let fields = fields?;
    keys.iter().find_map(|key| fields.get(*key).and_then(Value::as_f64))
}
