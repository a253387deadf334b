use std::env;

use tracing::info;

use crate::error::{Result, TweetsenseError};

/// Collector configuration: the four OAuth 1.0a user-context credentials.
#[derive(Clone)]
pub struct CollectorConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl CollectorConfig {
    /// Load credentials from environment variables.
    /// Fails naming every missing variable, before any network call is made.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut missing: Vec<&'static str> = Vec::new();
        let mut required = |key: &'static str| match lookup(key).filter(|v| !v.trim().is_empty()) {
            Some(value) => value,
            None => {
                missing.push(key);
                String::new()
            }
        };

        let config = Self {
            consumer_key: required("TWITTER_CONSUMER_KEY"),
            consumer_secret: required("TWITTER_CONSUMER_SECRET"),
            access_token: required("TWITTER_ACCESS_TOKEN"),
            access_token_secret: required("TWITTER_ACCESS_TOKEN_SECRET"),
        };

        if !missing.is_empty() {
            return Err(TweetsenseError::Config(format!(
                "Twitter API credentials are not fully set, missing: {}",
                missing.join(", ")
            )));
        }

        Ok(config)
    }

    pub fn log_redacted(&self) {
        info!(
            consumer_key = %redact(&self.consumer_key),
            consumer_secret = %redact(&self.consumer_secret),
            access_token = %redact(&self.access_token),
            access_token_secret = %redact(&self.access_token_secret),
            "Collector config loaded"
        );
    }
}

impl std::fmt::Debug for CollectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectorConfig")
            .field("consumer_key", &redact(&self.consumer_key))
            .field("consumer_secret", &redact(&self.consumer_secret))
            .field("access_token", &redact(&self.access_token))
            .field("access_token_secret", &redact(&self.access_token_secret))
            .finish()
    }
}

/// Labeler configuration. Both values are optional.
#[derive(Clone, Default)]
pub struct LabelerConfig {
    pub hf_api_token: Option<String>,
    /// Overrides the hosted inference base URL (e.g. a dedicated endpoint).
    pub inference_url: Option<String>,
}

impl LabelerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            hf_api_token: optional("HF_API_TOKEN"),
            inference_url: optional("HF_INFERENCE_URL"),
        }
    }

    pub fn log_redacted(&self) {
        info!(
            hf_api_token = %self.hf_api_token.as_deref().map(redact).unwrap_or_else(|| "(none)".to_string()),
            inference_url = self.inference_url.as_deref().unwrap_or("(default)"),
            "Labeler config loaded"
        );
    }
}

impl std::fmt::Debug for LabelerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelerConfig")
            .field("hf_api_token", &self.hf_api_token.as_deref().map(redact))
            .field("inference_url", &self.inference_url)
            .finish()
    }
}

/// Keep the first four characters, mask the rest.
fn redact(value: &str) -> String {
    if value.chars().count() <= 4 {
        return "****".to_string();
    }
    let prefix: String = value.chars().take(4).collect();
    format!("{prefix}****")
}
