pub mod config;
pub mod error;
pub mod table;

pub use config::{CollectorConfig, LabelerConfig};
pub use error::{Result, TweetsenseError};
pub use table::Table;
