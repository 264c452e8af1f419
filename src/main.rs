use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    let cli = bookscrape::cli::Cli::parse();

    bookscrape::logging::init(cli.verbose, cli.quiet).context("init logging")?;
    tracing::debug!(?cli, "parsed cli");

    bookscrape::crawl::run(cli).await.context("scrape")?;

    Ok(())
}
