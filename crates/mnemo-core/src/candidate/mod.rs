//! The unified candidate record and the raw-record parsing boundary.

mod parse;
mod record;

pub use parse::{graph_candidate, graph_candidates, vector_candidate, vector_candidates};
pub use record::{Candidate, CandidateKind, CandidateSource};
