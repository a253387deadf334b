mod client;
pub(crate) mod types;

use crate::traits::{Classifier, Sentiment};
use crate::util::truncate_to_char_boundary;
use anyhow::{anyhow, Result};
use async_trait::async_trait;

use client::HuggingFaceClient;
use types::LabelScore;

/// RoBERTa fine-tuned on tweets; labels are `negative`, `neutral`, `positive`.
pub const DEFAULT_SENTIMENT_MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";

/// Byte budget for a single input. Comfortably under the model's 512-token
/// window for tweet-length text.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 2000;

// =============================================================================
// HuggingFace Classifier
// =============================================================================

/// Classifier backed by the hosted inference API. The token is optional;
/// anonymous access is rate limited but works for public models.
pub struct HuggingFace {
    client: HuggingFaceClient,
    model: String,
    max_input_bytes: usize,
}

impl HuggingFace {
    pub fn new(api_token: Option<&str>, model: impl Into<String>) -> Self {
        Self {
            client: HuggingFaceClient::new(api_token),
            model: model.into(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    pub fn with_max_input_bytes(mut self, max_bytes: usize) -> Self {
        self.max_input_bytes = max_bytes;
        self
    }

    /// Get the model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Classifier for HuggingFace {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        let input = truncate_to_char_boundary(text, self.max_input_bytes);
        let candidates = self.client.classify(&self.model, input).await?;
        best_label(candidates).ok_or_else(|| anyhow!("No labels returned by {}", self.model))
    }
}

fn best_label(candidates: Vec<LabelScore>) -> Option<Sentiment> {
    candidates
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|c| Sentiment::new(c.label, c.score))
}
