// SearchSource: one page of keyword search results.
//
// The collector only talks to this trait, so pagination and row limits are
// tested against in-memory pages with no network.

use anyhow::Result;
use async_trait::async_trait;
use twitter_client::{SearchParams, Tweet, TwitterClient};

#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Fetch up to `count` posts matching `query`, newest first, with ids no
    /// greater than `max_id` when given.
    async fn search_page(&self, query: &str, max_id: Option<u64>, count: u32) -> Result<Vec<Tweet>>;
}

/// Standard search restricted to one language.
pub struct TwitterSource {
    client: TwitterClient,
    lang: String,
}

impl TwitterSource {
    pub fn new(client: TwitterClient, lang: impl Into<String>) -> Self {
        Self {
            client,
            lang: lang.into(),
        }
    }
}

#[async_trait]
impl SearchSource for TwitterSource {
    async fn search_page(&self, query: &str, max_id: Option<u64>, count: u32) -> Result<Vec<Tweet>> {
        let params = SearchParams::new(query, count)
            .max_id(max_id)
            .lang(self.lang.as_str());
        let page = self.client.search(&params).await?;
        Ok(page.statuses)
    }
}
