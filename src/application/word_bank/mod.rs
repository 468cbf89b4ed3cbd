pub mod loader;
pub mod tokens;
pub mod types;

pub use loader::load_word_bank;
pub use tokens::word_bank_tokens;
pub use types::{SourceSelector, WordBankOptions, WordBankStrategy};
