use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static! {
    static ref SCRIPT_BLOCK: Regex = Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap();
    static ref STYLE_BLOCK: Regex = Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap();
    static ref HEAD_BLOCK: Regex = Regex::new(r"(?is)<head\b[^>]*>.*?</head\s*>").unwrap();
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref ENTITY: Regex =
        Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});").unwrap();
}

/// Removes script, style and head blocks plus comments: content a browser
/// would not render as body text.
pub fn strip_non_content(html: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(html, "");
    let text = STYLE_BLOCK.replace_all(&text, "");
    let text = HEAD_BLOCK.replace_all(&text, "");
    COMMENT.replace_all(&text, "").into_owned()
}

/// Drops every `<...>` tag, keeping the text between them.
pub fn strip_html_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

/// Plain text of an HTML document. Tags become spaces so adjacent block
/// elements never fuse into a single word.
pub fn html_to_text(html: &str) -> String {
    let body = strip_non_content(html);
    let text = TAG.replace_all(&body, " ");
    decode_html_entities(&text).into_owned()
}

/// Decodes named, decimal and hex character references in a single pass.
/// Named references cover the full HTML5 table; unknown names are left untouched.
pub fn decode_html_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    ENTITY.replace_all(text, |caps: &Captures| {
        let whole = &caps[0];
        match caps[1].strip_prefix('#') {
            Some(num) => decode_numeric(num).map_or_else(|| whole.to_string(), String::from),
            None => decode_named(whole).unwrap_or_else(|| whole.to_string()),
        }
    })
}

fn decode_numeric(num: &str) -> Option<char> {
    let code = match num.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => num.parse::<u32>().ok()?,
    };
    Some(
        char::from_u32(code)
            .filter(|c| *c != '\0')
            .unwrap_or(char::REPLACEMENT_CHARACTER),
    )
}

fn decode_named(reference: &str) -> Option<String> {
    match html_escape::decode_html_entities(reference) {
        Cow::Owned(decoded) if decoded != reference => Some(decoded),
        _ => None,
    }
}
