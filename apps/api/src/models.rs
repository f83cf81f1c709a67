use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An uploaded document: raw bytes plus the client-declared filename.
/// Owned by the request handling the upload; dropped once text is extracted.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub content: Bytes,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: Bytes) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

/// The scoring record produced for one resume against one job description.
///
/// `score` is always present and within 0–100. Files that fail extraction or
/// evaluation still produce a record (score 0 with sentinel fields) — the
/// batch never drops a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEvaluation {
    pub filename: String,
    pub score: u32,
    pub missing_skills: Vec<String>,
    pub remarks: String,
}
