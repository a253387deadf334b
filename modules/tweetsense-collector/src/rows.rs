use std::path::Path;

use tweetsense_common::{Result, Table};
use twitter_client::Tweet;

/// Output columns, in file order. `text` is what the labeler reads.
pub const COLUMNS: [&str; 10] = [
    "username",
    "description",
    "location",
    "following",
    "followers",
    "totaltweets",
    "retweetcount",
    "text",
    "hashtags",
    "created_at",
];

/// One collected post, flattened to the fields written out.
#[derive(Debug, Clone, PartialEq)]
pub struct TweetRow {
    pub username: String,
    pub description: String,
    pub location: String,
    pub following: i64,
    pub followers: i64,
    pub totaltweets: i64,
    pub retweetcount: i64,
    pub text: String,
    /// JSON array of hashtag strings.
    pub hashtags: String,
    /// RFC 3339, empty when the API omitted or mangled the timestamp.
    pub created_at: String,
}

impl TweetRow {
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.description.clone(),
            self.location.clone(),
            self.following.to_string(),
            self.followers.to_string(),
            self.totaltweets.to_string(),
            self.retweetcount.to_string(),
            self.text.clone(),
            self.hashtags.clone(),
            self.created_at.clone(),
        ]
    }
}

pub fn tweet_to_row(tweet: &Tweet) -> TweetRow {
    let user = &tweet.user;
    let hashtags =
        serde_json::to_string(&tweet.hashtags()).unwrap_or_else(|_| "[]".to_string());

    TweetRow {
        username: user.screen_name.clone(),
        description: user.description.clone().unwrap_or_default(),
        location: user.location.clone().unwrap_or_default(),
        following: user.friends_count,
        followers: user.followers_count,
        totaltweets: user.statuses_count,
        retweetcount: tweet.retweet_count,
        text: tweet.content().to_string(),
        hashtags,
        created_at: tweet
            .created_at_utc()
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_default(),
    }
}

pub fn rows_to_table(rows: &[TweetRow]) -> Table {
    let mut table = Table::new(COLUMNS.iter().map(|c| c.to_string()).collect());
    table.rows = rows.iter().map(TweetRow::to_record).collect();
    table
}

/// Write rows with a header line; zero rows still produce a header-only file.
pub fn write_rows(path: impl AsRef<Path>, rows: &[TweetRow]) -> Result<()> {
    rows_to_table(rows).write(path)
}
