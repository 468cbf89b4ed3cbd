use std::env;
use std::io::Write as _;

use log::Level;
use pretty_env_logger::env_logger;

const DEFAULT_FILTER: &str = "wordbank=info";
const VERBOSE_FILTER: &str = "wordbank=debug";

/// Installs the global logger on stderr so the corpus on stdout stays
/// pipeable. `WORD_BANK_LOG` wins over `RUST_LOG`; `verbose` only raises the
/// crate default when neither is set.
pub fn init(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.parse_filters(&filters(
        env::var("WORD_BANK_LOG").ok(),
        env::var("RUST_LOG").ok(),
        verbose,
    ));
    builder.target(env_logger::Target::Stderr);

    builder.format(|buf, record| {
        let mut level_style = buf.style();
        level_style
            .set_color(match record.level() {
                Level::Error => env_logger::fmt::Color::Red,
                Level::Warn => env_logger::fmt::Color::Yellow,
                Level::Info => env_logger::fmt::Color::Green,
                Level::Debug | Level::Trace => env_logger::fmt::Color::Blue,
            })
            .set_bold(record.level() <= Level::Warn);

        writeln!(
            buf,
            "{} {} [{}] {}",
            buf.timestamp_millis(),
            level_style.value(format!("{:<5}", record.level())),
            short_target(record.target()),
            record.args()
        )
    });

    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}

fn filters(word_bank_log: Option<String>, rust_log: Option<String>, verbose: bool) -> String {
    word_bank_log
        .or(rust_log)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| {
            let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
            default.to_string()
        })
}

/// `wordbank::application::sources::shakespeare` → `sources::shakespeare`.
fn short_target(target: &str) -> &str {
    ["wordbank::application::", "wordbank::infrastructure::", "wordbank::"]
        .iter()
        .find_map(|prefix| target.strip_prefix(prefix))
        .unwrap_or(target)
}
