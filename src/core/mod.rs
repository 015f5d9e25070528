pub mod client;
pub mod parser;
pub mod uploader;

pub use crate::domain::model::{Card, ParsedCards, UploadSummary};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
