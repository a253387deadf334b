use thiserror::Error;

pub type Result<T> = std::result::Result<T, TweetsenseError>;

#[derive(Error, Debug)]
pub enum TweetsenseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input table is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Input table has no header row")]
    MissingHeader,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
