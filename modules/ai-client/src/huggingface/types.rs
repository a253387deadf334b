use serde::{Deserialize, Serialize};

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClassificationRequest<'a> {
    pub inputs: &'a str,
    pub options: RequestOptions,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RequestOptions {
    /// Block until a cold model is loaded instead of answering 503.
    pub wait_for_model: bool,
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Single inputs come back nested (`[[...]]`) from the serverless API and flat
/// (`[...]`) from some dedicated endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    pub fn into_candidates(self) -> Vec<LabelScore> {
        match self {
            ClassificationResponse::Nested(batches) => {
                batches.into_iter().next().unwrap_or_default()
            }
            ClassificationResponse::Flat(candidates) => candidates,
        }
    }
}
