pub mod clean;
pub mod html;

pub use clean::clean_word;
pub use html::{decode_html_entities, html_to_text, strip_html_tags, strip_non_content};
