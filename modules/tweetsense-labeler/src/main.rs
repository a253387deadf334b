use std::path::PathBuf;

use ai_client::{HuggingFace, DEFAULT_SENTIMENT_MODEL};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tweetsense_common::LabelerConfig;
use tweetsense_labeler::label_file;

/// Analyze post sentiment with a pre-trained transformer model.
#[derive(Parser, Debug)]
#[command(name = "tweetsense-label")]
struct Args {
    /// CSV file with posts in a 'text' column
    input: PathBuf,

    /// CSV file to write with sentiment labels
    #[arg(long, default_value = "sentiment_results.csv")]
    output: PathBuf,

    /// Hosted text-classification model
    #[arg(long, default_value = DEFAULT_SENTIMENT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tweetsense=info".parse()?)
                .add_directive("ai_client=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = LabelerConfig::from_env();
    config.log_redacted();

    let mut classifier = HuggingFace::new(config.hf_api_token.as_deref(), args.model);
    if let Some(ref url) = config.inference_url {
        classifier = classifier.with_base_url(url);
    }
    info!(model = classifier.model(), "Classifier ready");

    let rows = label_file(&classifier, &args.input, &args.output)
        .await
        .with_context(|| format!("failed to label {}", args.input.display()))?;
    info!(rows, output = %args.output.display(), "Wrote labeled rows");

    println!("Sentiment analysis complete: {}", args.output.display());
    Ok(())
}
