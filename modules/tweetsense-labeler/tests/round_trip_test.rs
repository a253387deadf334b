//! Collector output feeds straight into the labeler without renaming columns.

use anyhow::Result;
use async_trait::async_trait;
use ai_client::{Classifier, Sentiment};
use tweetsense_collector::{collect, write_rows, SearchSource, COLUMNS};
use tweetsense_common::Table;
use tweetsense_labeler::{label_file, LABEL_COLUMN, SCORE_COLUMN};
use twitter_client::Tweet;

struct FixedPage;

#[async_trait]
impl SearchSource for FixedPage {
    async fn search_page(&self, _query: &str, max_id: Option<u64>, count: u32) -> Result<Vec<Tweet>> {
        if max_id.is_some() {
            return Ok(Vec::new());
        }
        let tweets: Vec<Tweet> = (1..=count.min(4) as u64)
            .rev()
            .map(|id| {
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "full_text": format!("Post number {id}, with a comma"),
                    "user": {"screen_name": format!("user{id}"), "description": "line one\nline two"}
                }))
                .expect("invalid test tweet")
            })
            .collect();
        Ok(tweets)
    }
}

struct ConstantClassifier;

#[async_trait]
impl Classifier for ConstantClassifier {
    async fn classify(&self, _text: &str) -> Result<Sentiment> {
        Ok(Sentiment::new("neutral", 0.9))
    }
}

#[tokio::test]
async fn collector_output_is_valid_labeler_input() {
    let dir = tempfile::tempdir().unwrap();
    let scraped = dir.path().join("scraped_tweets.csv");
    let labeled = dir.path().join("sentiment_results.csv");

    let rows = collect(&FixedPage, "#covid", 10).await.unwrap();
    write_rows(&scraped, &rows).unwrap();

    let count = label_file(&ConstantClassifier, &scraped, &labeled)
        .await
        .unwrap();

    let output = Table::read(&labeled).unwrap();
    assert_eq!(count, 4);
    assert_eq!(output.len(), 4);

    let mut expected_headers: Vec<&str> = COLUMNS.to_vec();
    expected_headers.push(LABEL_COLUMN);
    expected_headers.push(SCORE_COLUMN);
    assert_eq!(output.headers, expected_headers);

    let texts: Vec<&str> = output.column("text").unwrap().collect();
    assert_eq!(texts[0], "Post number 4, with a comma");
    assert!(output.column("label").unwrap().all(|l| l == "neutral"));
}
