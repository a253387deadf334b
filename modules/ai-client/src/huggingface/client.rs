use anyhow::{anyhow, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::types::*;

pub(crate) const HF_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference";

pub(crate) struct HuggingFaceClient {
    api_token: Option<String>,
    http: reqwest::Client,
    base_url: String,
}

impl HuggingFaceClient {
    pub fn new(api_token: Option<&str>) -> Self {
        Self {
            api_token: api_token.map(String::from),
            http: reqwest::Client::new(),
            base_url: HF_INFERENCE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(ref token) = self.api_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    pub async fn classify(&self, model: &str, text: &str) -> Result<Vec<LabelScore>> {
        let url = format!("{}/models/{}", self.base_url, model);

        debug!(model, chars = text.chars().count(), "Hugging Face classification request");

        let request = ClassificationRequest {
            inputs: text,
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!(
                "Hugging Face inference error ({}): {}",
                status,
                error_text
            ));
        }

        let body: ClassificationResponse = response.json().await?;
        Ok(body.into_candidates())
    }
}
