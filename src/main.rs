use anyhow::Context;
use std::env;

use wordbank::infrastructure::logging;
use wordbank::{CorpusClient, WordBankConfig, WordBankStrategy, word_bank_tokens};

const USAGE: &str = "usage: wordbank [shakespeare|random|both|none|selector:shakespeare|selector:random] [--tokens] [-v]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    logging::init(args.iter().any(|a| a == "-v" || a == "--verbose"));

    let mut config = WordBankConfig::from_env().context("Failed to read configuration")?;
    let mut print_tokens = false;

    for arg in &args {
        match arg.as_str() {
            "--tokens" => print_tokens = true,
            "-v" | "--verbose" => {}
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            other => {
                config.strategy = other
                    .parse::<WordBankStrategy>()
                    .with_context(|| USAGE.to_string())?;
            }
        }
    }

    log::info!(
        "Loading word bank strategy={} random_words={} folger={}",
        config.strategy,
        config.endpoints.random_words,
        config.endpoints.folger_texts
    );

    let client = CorpusClient::from_config(&config).context("Failed to create HTTP client")?;
    let corpus = client
        .load_word_bank(config.strategy)
        .await
        .context("Failed to load word bank")?;

    if print_tokens {
        for token in word_bank_tokens(&corpus) {
            println!("{}", token);
        }
    } else {
        println!("{}", corpus);
    }

    Ok(())
}
