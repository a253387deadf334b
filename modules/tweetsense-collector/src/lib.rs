pub mod rows;
pub mod source;

pub use rows::{rows_to_table, tweet_to_row, write_rows, TweetRow, COLUMNS};
pub use source::{SearchSource, TwitterSource};

use anyhow::Result;
use tracing::{debug, info, warn};
use twitter_client::{Tweet, MAX_SEARCH_COUNT};

/// Page through search results until `limit` rows are gathered or the
/// results run out. Never returns more than `limit` rows.
///
/// Each page after the first asks for posts older than the oldest one seen
/// (`max_id = min(id) - 1`). Posts above `max_id` are dropped, so a repeated
/// post is never written twice; a page with nothing left ends the run.
pub async fn collect(source: &dyn SearchSource, query: &str, limit: usize) -> Result<Vec<TweetRow>> {
    info!(query, limit, "Starting search collection");

    let mut rows: Vec<TweetRow> = Vec::with_capacity(limit.min(MAX_SEARCH_COUNT as usize));
    let mut max_id: Option<u64> = None;
    let mut pages = 0usize;

    while rows.len() < limit {
        let remaining = limit - rows.len();
        let count = remaining.min(MAX_SEARCH_COUNT as usize) as u32;

        let page = source.search_page(query, max_id, count).await?;
        pages += 1;
        debug!(page = pages, returned = page.len(), ?max_id, "Search page received");

        // Posts newer than max_id were already seen on an earlier page.
        let fresh: Vec<&Tweet> = page
            .iter()
            .filter(|t| max_id.map_or(true, |m| t.id <= m))
            .collect();
        if fresh.len() < page.len() {
            warn!(
                dropped = page.len() - fresh.len(),
                ?max_id,
                "Search returned posts newer than max_id"
            );
        }

        let Some(oldest) = fresh.iter().map(|t| t.id).min() else {
            break;
        };

        rows.extend(fresh.iter().take(remaining).map(|t| tweet_to_row(t)));

        match oldest.checked_sub(1) {
            Some(next) => max_id = Some(next),
            None => break,
        }
    }

    info!(rows = rows.len(), pages, "Search collection complete");
    Ok(rows)
}
