use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Independent source switches. With neither set the corpus is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordBankOptions {
    pub include_shakespeare: bool,
    pub include_random: bool,
}

/// Single-choice source. Random words are always part of the corpus;
/// `Shakespeare` additionally puts a play excerpt in front of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSelector {
    Shakespeare,
    Random,
}

/// The two loader behaviours callers can choose between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordBankStrategy {
    Flags(WordBankOptions),
    Selector(SourceSelector),
}

impl Default for WordBankStrategy {
    fn default() -> Self {
        WordBankStrategy::Flags(WordBankOptions {
            include_shakespeare: true,
            include_random: true,
        })
    }
}

impl From<WordBankOptions> for WordBankStrategy {
    fn from(options: WordBankOptions) -> Self {
        WordBankStrategy::Flags(options)
    }
}

impl From<SourceSelector> for WordBankStrategy {
    fn from(selector: SourceSelector) -> Self {
        WordBankStrategy::Selector(selector)
    }
}

impl FromStr for WordBankStrategy {
    type Err = Error;

    /// Accepts `shakespeare`, `random`, `both`, `none` (flag strategy) and
    /// `selector:shakespeare`, `selector:random`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let flags = |include_shakespeare, include_random| {
            WordBankStrategy::Flags(WordBankOptions {
                include_shakespeare,
                include_random,
            })
        };

        match normalized.as_str() {
            "shakespeare" => Ok(flags(true, false)),
            "random" => Ok(flags(false, true)),
            "both" => Ok(flags(true, true)),
            "none" => Ok(flags(false, false)),
            "selector:shakespeare" => Ok(SourceSelector::Shakespeare.into()),
            "selector:random" => Ok(SourceSelector::Random.into()),
            _ => Err(Error::Config(format!("unknown word bank source '{}'", s))),
        }
    }
}

impl fmt::Display for WordBankStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordBankStrategy::Flags(o) => match (o.include_shakespeare, o.include_random) {
                (true, true) => write!(f, "both"),
                (true, false) => write!(f, "shakespeare"),
                (false, true) => write!(f, "random"),
                (false, false) => write!(f, "none"),
            },
            WordBankStrategy::Selector(SourceSelector::Shakespeare) => {
                write!(f, "selector:shakespeare")
            }
            WordBankStrategy::Selector(SourceSelector::Random) => write!(f, "selector:random"),
        }
    }
}
