pub mod sources;
pub mod text;
pub mod word_bank;
