use std::env;
use std::time::Duration;

use crate::application::sources::config::{FOLGER_TEXTS_URL, RANDOM_WORDS_API};
use crate::application::word_bank::WordBankStrategy;
use crate::error::{Error, Result};

/// Base URLs of the two upstream text services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub random_words: String,
    pub folger_texts: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            random_words: RANDOM_WORDS_API.to_string(),
            folger_texts: FOLGER_TEXTS_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn play_text_url(&self, play_code: &str) -> String {
        format!("{}/{}/text", self.folger_texts.trim_end_matches('/'), play_code)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WordBankConfig {
    pub endpoints: Endpoints,
    pub http_timeout: Option<Duration>,
    pub strategy: WordBankStrategy,
}

impl Default for WordBankConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            http_timeout: None,
            strategy: WordBankStrategy::default(),
        }
    }
}

impl WordBankConfig {
    /// Reads `RANDOM_WORDS_API_URL`, `FOLGER_TEXTS_URL`, `WORD_BANK_HTTP_TIMEOUT_SECS`
    /// and `WORD_BANK_SOURCE`. Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            random_words: value("RANDOM_WORDS_API_URL").unwrap_or(defaults.random_words),
            folger_texts: value("FOLGER_TEXTS_URL").unwrap_or(defaults.folger_texts),
        };

        let http_timeout = match value("WORD_BANK_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    Error::Config(format!(
                        "WORD_BANK_HTTP_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let strategy = match value("WORD_BANK_SOURCE") {
            Some(raw) => raw.parse()?,
            None => WordBankStrategy::default(),
        };

        Ok(Self {
            endpoints,
            http_timeout,
            strategy,
        })
    }
}
