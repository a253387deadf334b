use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Format of `created_at` in v1.1 payloads, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Largest `count` the standard search endpoint accepts per page.
pub const MAX_SEARCH_COUNT: u32 = 100;

/// The four OAuth 1.0a user-context credentials.
#[derive(Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &self.access_token)
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

/// Parameters for one page of `search/tweets.json`.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub query: String,
    pub count: u32,
    pub max_id: Option<u64>,
    pub lang: Option<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, count: u32) -> Self {
        Self {
            query: query.into(),
            count,
            max_id: None,
            lang: None,
        }
    }

    pub fn max_id(mut self, max_id: Option<u64>) -> Self {
        self.max_id = max_id;
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Query-string pairs, always in extended mode so `full_text` is populated.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("q".to_string(), self.query.clone()),
            ("tweet_mode".to_string(), "extended".to_string()),
            (
                "count".to_string(),
                self.count.min(MAX_SEARCH_COUNT).to_string(),
            ),
        ];
        if let Some(ref lang) = self.lang {
            query.push(("lang".to_string(), lang.clone()));
        }
        if let Some(max_id) = self.max_id {
            query.push(("max_id".to_string(), max_id.to_string()));
        }
        query
    }
}

/// Body of a `search/tweets.json` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub statuses: Vec<Tweet>,
}

/// Author of a tweet.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetUser {
    pub screen_name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub friends_count: i64,
    #[serde(default)]
    pub followers_count: i64,
    #[serde(default)]
    pub statuses_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub hashtags: Vec<Hashtag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hashtag {
    pub text: String,
}

/// A single status from the search API.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id: u64,
    pub full_text: Option<String>,
    pub text: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub retweet_count: i64,
    #[serde(default)]
    pub entities: Entities,
    pub retweeted_status: Option<Box<Tweet>>,
    pub user: TweetUser,
}

impl Tweet {
    /// The untruncated text. Retweets carry a clipped `RT @...` copy, so the
    /// retweeted status's text wins when present.
    pub fn content(&self) -> &str {
        if let Some(ref original) = self.retweeted_status {
            return original.own_text();
        }
        self.own_text()
    }

    fn own_text(&self) -> &str {
        self.full_text
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or_default()
    }

    pub fn hashtags(&self) -> Vec<String> {
        self.entities
            .hashtags
            .iter()
            .map(|h| h.text.clone())
            .collect()
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        DateTime::parse_from_str(raw, CREATED_AT_FORMAT)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
