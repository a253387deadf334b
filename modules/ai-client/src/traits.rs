use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Classification Result
// =============================================================================

/// The winning label for one input and the model's confidence in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentiment {
    pub label: String,
    pub score: f64,
}

impl Sentiment {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

// =============================================================================
// Classifier Trait
// =============================================================================

/// Single-input text classification. One call is one forward pass.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Sentiment>;
}
