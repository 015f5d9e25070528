pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::client::{AnkiClient, HttpTransport, RetryPolicy};
pub use crate::core::parser::parse_cards;
pub use crate::core::uploader::Uploader;
pub use crate::domain::model::{AnkiRequest, Card, ParsedCards, UploadSummary};
pub use crate::utils::error::{LoaderError, Result};
