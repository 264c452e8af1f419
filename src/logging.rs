use anyhow::Context as _;

pub fn init(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    // RUST_LOG wins; the verbosity flags only pick the fallback directive.
    let default_directive = if quiet {
        "bookscrape=error"
    } else {
        match verbose {
            0 => "bookscrape=info",
            1 => "bookscrape=debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_directive))
        .context("build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))?;

    Ok(())
}
