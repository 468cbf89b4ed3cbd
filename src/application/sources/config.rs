pub const DEFAULT_WORD_COUNT: usize = 100;
pub const RANDOM_WORDS_API: &str = "https://random-word-api.vercel.app/api";
pub const FOLGER_TEXTS_URL: &str = "https://www.folgerdigitaltexts.org";
