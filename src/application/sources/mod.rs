pub mod client;
pub mod config;
pub mod plays;
pub mod random_words;
pub mod shakespeare;

pub use client::{CORPUS_CLIENT, CorpusClient};
pub use config::DEFAULT_WORD_COUNT;
pub use plays::{PLAYS, Play, find_play, play_codes};
pub use random_words::fetch_random_words;
pub use shakespeare::{choose_play, extract_play_words, fetch_shakespeare_text, select_window};
