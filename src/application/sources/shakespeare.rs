use super::client::{CORPUS_CLIENT, CorpusClient};
use super::plays::{PLAYS, Play};
use crate::application::text::html_to_text;
use crate::error::{Error, Result};
use crate::infrastructure::http::send_checked;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

impl CorpusClient {
    pub async fn fetch_shakespeare_text(&self, num_words: usize) -> Result<String> {
        let mut rng = StdRng::from_os_rng();
        self.fetch_shakespeare_text_with(num_words, &mut rng).await
    }

    /// Downloads one uniformly chosen play and returns a random contiguous run
    /// of exactly `num_words` words joined by single spaces.
    pub async fn fetch_shakespeare_text_with<R>(
        &self,
        num_words: usize,
        rng: &mut R,
    ) -> Result<String>
    where
        R: Rng + ?Sized,
    {
        let play = choose_play(rng);
        let url = self.endpoints().play_text_url(play.code);
        log::debug!(
            "shakespeare.request play={} title='{}' url={}",
            play.code,
            play.title,
            url
        );

        let failure_message = format!("Failed to fetch play text for {}", play.code);
        let response = send_checked(self.http().get(&url), &failure_message).await?;
        let html = response.text().await?;

        let words = extract_play_words(&html);
        log::debug!("shakespeare.parsed play={} words={}", play.code, words.len());

        select_window(play, &words, num_words, rng)
    }
}

pub async fn fetch_shakespeare_text(num_words: usize) -> Result<String> {
    CORPUS_CLIENT.fetch_shakespeare_text(num_words).await
}

pub fn choose_play<R: Rng + ?Sized>(rng: &mut R) -> &'static Play {
    &PLAYS[rng.random_range(0..PLAYS.len())]
}

pub fn extract_play_words(html: &str) -> Vec<String> {
    html_to_text(html)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

pub fn select_window<R: Rng + ?Sized>(
    play: &Play,
    words: &[String],
    num_words: usize,
    rng: &mut R,
) -> Result<String> {
    if words.len() < num_words {
        log::warn!(
            "shakespeare.too_short play={} available={} requested={}",
            play.code,
            words.len(),
            num_words
        );
        return Err(Error::InsufficientText {
            play: play.code,
            available: words.len(),
            requested: num_words,
        });
    }

    let max_start = words.len() - num_words;
    let start = rng.random_range(0..=max_start);
    Ok(words[start..start + num_words].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn test_every_play_is_reachable() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<&str> = (0..5_000).map(|_| choose_play(&mut rng).code).collect();
        assert_eq!(seen.len(), PLAYS.len());
    }

    #[test]
    fn test_play_choice_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(11);
        let draws = 38_000;
        let mut counts = std::collections::HashMap::new();
        for _ in 0..draws {
            *counts.entry(choose_play(&mut rng).code).or_insert(0usize) += 1;
        }
        // Expected 1000 per play.
        assert!(counts.values().all(|&n| (800..1200).contains(&n)));
    }

    #[test]
    fn test_window_has_exact_length_and_is_contiguous() {
        let source = words("a b c d e f g h i j");
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let out = select_window(&PLAYS[0], &source, 4, &mut rng).unwrap();
            let picked: Vec<&str> = out.split(' ').collect();
            assert_eq!(picked.len(), 4);
            let start = source.iter().position(|w| w == picked[0]).unwrap();
            let expected: Vec<&str> = source[start..start + 4].iter().map(String::as_str).collect();
            assert_eq!(picked, expected);
        }
    }

    #[test]
    fn test_window_covers_whole_text_when_lengths_match() {
        let source = words("now is the winter");
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            select_window(&PLAYS[0], &source, 4, &mut rng).unwrap(),
            "now is the winter"
        );
    }

    #[test]
    fn test_window_reaches_both_ends() {
        let source = words("first middle last");
        let mut rng = StdRng::seed_from_u64(5);
        let seen: HashSet<String> = (0..200)
            .map(|_| select_window(&PLAYS[0], &source, 1, &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_short_text_is_an_error() {
        let source = words("too short");
        let mut rng = StdRng::seed_from_u64(1);
        let err = select_window(&PLAYS[6], &source, 3, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientText {
                play: "Ham",
                available: 2,
                requested: 3
            }
        ));
    }

    #[test]
    fn test_extract_play_words_drops_markup() {
        let html = "<html><head><title>Macbeth</title><style>.x{}</style></head>\
                    <body><script>alert(1)</script>\
                    <div class=\"line\">When shall we three meet again</div>\
                    <div>In thunder,&nbsp;lightning, or in rain?</div></body></html>";
        assert_eq!(
            extract_play_words(html),
            words("When shall we three meet again In thunder, lightning, or in rain?")
        );
    }
}
