use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tweetsense_collector::{collect, write_rows, TwitterSource};
use tweetsense_common::CollectorConfig;
use twitter_client::{Credentials, TwitterClient};

/// Collect posts matching a search query into a CSV file.
#[derive(Parser, Debug)]
#[command(name = "tweetsense-collect")]
struct Args {
    /// Search query, e.g. '#SayNoToVaccines -filter:retweets'
    query: String,

    /// Maximum number of posts to collect
    #[arg(long, default_value_t = 100)]
    limit: usize,

    /// CSV file to write
    #[arg(long, default_value = "scraped_tweets.csv")]
    output: PathBuf,

    /// Restrict results to this language code
    #[arg(long, default_value = "en")]
    lang: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tweetsense=info".parse()?)
                .add_directive("twitter_client=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = CollectorConfig::from_env()?;
    config.log_redacted();

    let client = TwitterClient::new(Credentials {
        consumer_key: config.consumer_key,
        consumer_secret: config.consumer_secret,
        access_token: config.access_token,
        access_token_secret: config.access_token_secret,
    });
    let source = TwitterSource::new(client, args.lang);

    let rows = collect(&source, &args.query, args.limit)
        .await
        .with_context(|| format!("search for {:?} failed", args.query))?;

    write_rows(&args.output, &rows)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(rows = rows.len(), output = %args.output.display(), "Wrote collected rows");

    println!("Scraping has completed!");
    Ok(())
}
