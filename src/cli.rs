use std::path::PathBuf;

use clap::Parser;

/// Scrape a bookstore's category listings into one JSON document.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Storefront base URL (must be http/https).
    #[arg(long, default_value = "https://www.martinus.sk/")]
    pub base_url: String,

    /// Output file for the scraped records (overwritten if present).
    #[arg(long, default_value = "output.json")]
    pub out: PathBuf,

    /// Minimum delay before each request, in milliseconds.
    #[arg(long, default_value_t = 1_000)]
    pub delay_min_ms: u64,

    /// Maximum delay before each request, in milliseconds.
    #[arg(long, default_value_t = 7_000)]
    pub delay_max_ms: u64,

    /// Retries after a failed request before giving a page up.
    #[arg(long, default_value_t = 5)]
    pub max_tries: u32,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
