//! Builds word banks for typing practice from random dictionary words and
//! excerpts of Shakespeare plays.

pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;

pub use application::sources::{
    CORPUS_CLIENT, CorpusClient, DEFAULT_WORD_COUNT, PLAYS, Play, fetch_random_words,
    fetch_shakespeare_text,
};
pub use application::text::{clean_word, decode_html_entities, strip_html_tags};
pub use application::word_bank::{
    SourceSelector, WordBankOptions, WordBankStrategy, load_word_bank, word_bank_tokens,
};
pub use config::{Endpoints, WordBankConfig};
pub use error::{Error, Result};
