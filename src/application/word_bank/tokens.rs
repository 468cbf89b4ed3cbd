use crate::application::text::clean_word;

/// Splits a corpus on whitespace and cleans each token, dropping the ones
/// that clean to nothing. Order is preserved.
pub fn word_bank_tokens(corpus: &str) -> Vec<String> {
    corpus.split_whitespace().filter_map(clean_word).collect()
}
