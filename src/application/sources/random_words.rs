use super::client::{CORPUS_CLIENT, CorpusClient};
use crate::error::{Error, Result};
use crate::infrastructure::http::send_checked;

const FAILURE_MESSAGE: &str = "Failed to fetch random words";

impl CorpusClient {
    /// Fetches `count` random dictionary words. The upstream list is returned
    /// as-is, even when its length differs from `count`.
    pub async fn fetch_random_words(&self, count: usize) -> Result<Vec<String>> {
        let url = &self.endpoints().random_words;
        log::debug!("random_words.request url={} count={}", url, count);

        let request = self.http().get(url).query(&[("words", count)]);
        let response = send_checked(request, FAILURE_MESSAGE).await?;
        let body = response.text().await?;
        let words = parse_word_list(&body)?;

        if words.len() != count {
            log::debug!(
                "random_words.count_mismatch requested={} received={}",
                count,
                words.len()
            );
        }

        Ok(words)
    }
}

pub async fn fetch_random_words(count: usize) -> Result<Vec<String>> {
    CORPUS_CLIENT.fetch_random_words(count).await
}

fn parse_word_list(body: &str) -> Result<Vec<String>> {
    serde_json::from_str(body).map_err(|source| Error::Decode {
        context: "random words",
        source,
    })
}
