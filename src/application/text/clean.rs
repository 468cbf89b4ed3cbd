use super::html::{decode_html_entities, strip_html_tags};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INTERNAL_PERIOD: Regex = Regex::new(r"[A-Za-z0-9]\.[A-Za-z0-9]").unwrap();
}

fn is_edge_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

fn is_edge_punctuation_keeping_period(ch: char) -> bool {
    ch != '.' && ch.is_ascii_punctuation()
}

/// Normalises one raw token for the word bank.
///
/// Markup and entities are removed first, then ASCII punctuation is trimmed
/// from both ends and the result lowercased. Tokens with an internal period
/// such as `U.S.A.` keep their trailing periods; everything else loses them.
/// Returns `None` when nothing is left.
pub fn clean_word(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }

    let without_tags = strip_html_tags(word);
    let decoded = decode_html_entities(&without_tags);
    let unbracketed: String = decoded.chars().filter(|c| !matches!(c, '<' | '>')).collect();

    let word = unbracketed.trim();
    if word.is_empty() {
        return None;
    }

    let trailing: fn(char) -> bool = if INTERNAL_PERIOD.is_match(word) {
        is_edge_punctuation_keeping_period
    } else {
        is_edge_punctuation
    };

    let cleaned = word.trim_start_matches(is_edge_punctuation);
    let cleaned = cleaned.trim_end_matches(trailing);

    if cleaned.is_empty() {
        return None;
    }

    Some(cleaned.to_lowercase())
}
