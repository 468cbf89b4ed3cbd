use super::types::{SourceSelector, WordBankOptions, WordBankStrategy};
use crate::application::sources::{CORPUS_CLIENT, CorpusClient, DEFAULT_WORD_COUNT};
use crate::error::Result;

impl CorpusClient {
    /// Builds the corpus for `strategy`. Sources are fetched one after the
    /// other and any failure aborts the whole load.
    pub async fn load_word_bank(&self, strategy: impl Into<WordBankStrategy>) -> Result<String> {
        let strategy = strategy.into();
        log::debug!("word_bank.load strategy={}", strategy);

        let parts = match strategy {
            WordBankStrategy::Flags(options) => self.load_flagged(options).await?,
            WordBankStrategy::Selector(selector) => self.load_selected(selector).await?,
        };

        let corpus = parts.join(" ");
        log::info!(
            "word_bank.loaded strategy={} parts={} words={}",
            strategy,
            parts.len(),
            corpus.split_whitespace().count()
        );
        Ok(corpus)
    }

    async fn load_flagged(&self, options: WordBankOptions) -> Result<Vec<String>> {
        let mut parts = Vec::with_capacity(2);

        if options.include_shakespeare {
            parts.push(self.fetch_shakespeare_text(DEFAULT_WORD_COUNT).await?);
        }

        if options.include_random {
            let words = self.fetch_random_words(DEFAULT_WORD_COUNT).await?;
            parts.push(words.join(" "));
        }

        Ok(parts)
    }

    async fn load_selected(&self, selector: SourceSelector) -> Result<Vec<String>> {
        let mut parts = Vec::with_capacity(2);

        if selector == SourceSelector::Shakespeare {
            parts.push(self.fetch_shakespeare_text(DEFAULT_WORD_COUNT).await?);
        }

        let words = self.fetch_random_words(DEFAULT_WORD_COUNT).await?;
        parts.push(words.join(" "));

        Ok(parts)
    }
}

pub async fn load_word_bank(strategy: impl Into<WordBankStrategy>) -> Result<String> {
    CORPUS_CLIENT.load_word_bank(strategy).await
}
