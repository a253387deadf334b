pub mod huggingface;
pub mod traits;
pub mod util;

pub use huggingface::{HuggingFace, DEFAULT_MAX_INPUT_BYTES, DEFAULT_SENTIMENT_MODEL};
pub use traits::{Classifier, Sentiment};
