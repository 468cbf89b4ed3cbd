use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message} (status {status})")]
    Http {
        message: String,
        status: StatusCode,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to parse {context} response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Play text does not contain enough words ({play}: {available} available, {requested} requested)")]
    InsufficientText {
        play: &'static str,
        available: usize,
        requested: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn http(message: impl Into<String>, status: StatusCode) -> Self {
        Error::Http {
            message: message.into(),
            status,
        }
    }
}
