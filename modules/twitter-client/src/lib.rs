pub mod error;
pub mod oauth;
pub mod types;

pub use error::{Result, TwitterError};
pub use types::{
    Credentials, Entities, Hashtag, SearchParams, SearchResponse, Tweet, TweetUser,
    MAX_SEARCH_COUNT,
};

use std::time::Duration;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::StatusCode;

const BASE_URL: &str = "https://api.twitter.com/1.1";

/// Header carrying the epoch second at which the rate-limit window resets.
const RATE_LIMIT_RESET: &str = "x-rate-limit-reset";

/// Wait used when a 429 arrives without a usable reset header.
const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Search windows are 15 minutes; never sleep longer than one.
const MAX_RATE_LIMIT_WAIT: Duration = Duration::from_secs(15 * 60);

pub struct TwitterClient {
    client: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl TwitterClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch one page of standard search results.
    ///
    /// A 429 is waited out until the window resets and the same page is
    /// requested again.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        let url = format!("{}/search/tweets.json", self.base_url);
        let query = params.to_query();
        let full_url = format!("{url}?{}", encode_query(&query));

        loop {
            let header = oauth::authorization_header(
                &self.credentials,
                "GET",
                &url,
                &query,
                &oauth::nonce(),
                chrono::Utc::now().timestamp(),
            );

            tracing::debug!(
                query = %params.query,
                count = params.count,
                max_id = ?params.max_id,
                "Twitter search request"
            );

            let resp = self
                .client
                .get(&full_url)
                .header(AUTHORIZATION, header)
                .send()
                .await?;

            let status = resp.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                let wait = rate_limit_wait(resp.headers(), chrono::Utc::now().timestamp());
                tracing::warn!(wait_secs = wait.as_secs(), "Rate limited, waiting for window reset");
                tokio::time::sleep(wait).await;
                continue;
            }

            if status == StatusCode::UNAUTHORIZED {
                let body = resp.text().await.unwrap_or_default();
                return Err(TwitterError::Auth(body));
            }

            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(TwitterError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let body = resp.text().await?;
            let page: SearchResponse = serde_json::from_str(&body)?;
            tracing::debug!(count = page.statuses.len(), "Fetched search page");
            return Ok(page);
        }
    }
}

fn encode_query(query: &[(String, String)]) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", oauth::percent_encode(k), oauth::percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// How long to sleep after a 429, given the response headers and the current
/// epoch second.
pub fn rate_limit_wait(headers: &HeaderMap, now: i64) -> Duration {
    let reset = headers
        .get(RATE_LIMIT_RESET)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok());

    match reset {
        Some(reset) => {
            // One extra second so the retry lands inside the new window.
            let secs = (reset - now + 1).max(1) as u64;
            Duration::from_secs(secs).min(MAX_RATE_LIMIT_WAIT)
        }
        None => DEFAULT_RATE_LIMIT_WAIT,
    }
}
