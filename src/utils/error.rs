use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("service error: {message}")]
    Service { message: String },

    #[error("failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    #[error("deck \"{deck}\" still not found after creation attempt")]
    DeckNotConfirmed { deck: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, LoaderError>;
