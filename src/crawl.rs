use std::io;
use std::time::Instant;

use anyhow::Context as _;
use futures::future::join_all;
use url::Url;

use crate::catalog::{self, Category};
use crate::cli::Cli;
use crate::extract;
use crate::fetch::{FetchConfig, Fetcher};
use crate::formats::BookRecord;
use crate::prompt;
use crate::store;

/// Categories run one after another; the pages and books inside one fan out concurrently.
pub async fn run(args: Cli) -> anyhow::Result<()> {
    let started = Instant::now();

    let base = Url::parse(&args.base_url).context("parse --base-url")?;
    if base.scheme() != "http" && base.scheme() != "https" {
        anyhow::bail!("--base-url must be http/https: {base}");
    }

    let fetcher = Fetcher::new(FetchConfig {
        delay_min_ms: args.delay_min_ms,
        delay_max_ms: args.delay_max_ms,
        max_tries: args.max_tries,
    })
    .context("build fetcher")?;

    let categories = {
        let Some(home) = fetcher.fetch(&base).await else {
            anyhow::bail!("storefront page stayed unreachable: {base}");
        };
        catalog::discover_categories(&home, &base).context("discover categories")?
    };
    tracing::info!(count = categories.len(), "discovered categories");
    for category in &categories {
        tracing::info!(slug = %category.slug, "category");
    }

    let picks = prompt::select_categories(io::stdin().lock(), io::stdout(), &categories)
        .context("select categories")?;

    let mut batches: Vec<(String, Vec<Url>)> = Vec::new();
    for slug in &picks {
        let category = categories
            .iter()
            .find(|category| category.slug == *slug)
            .with_context(|| format!("selected category disappeared: {slug}"))?;
        let pages = discover_listing_pages(&fetcher, category).await;
        batches.push((slug.clone(), pages));
    }

    let mut records: Vec<BookRecord> = Vec::new();
    for (slug, pages) in &batches {
        tracing::info!(category = %slug, pages = pages.len(), "scraping category");
        let scraped = scrape_category(&fetcher, &base, pages, slug).await;
        tracing::info!(category = %slug, books = scraped.len(), "category done");
        records.extend(scraped);
    }

    store::write_records(&args.out, &records)
        .with_context(|| format!("write output: {}", args.out.display()))?;

    tracing::info!(
        records = records.len(),
        out = %args.out.display(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "scrape finished"
    );
    Ok(())
}

async fn discover_listing_pages(fetcher: &Fetcher, category: &Category) -> Vec<Url> {
    let pages = match fetcher.fetch(&category.url).await {
        Some(doc) => catalog::page_count(&doc),
        None => {
            tracing::warn!(category = %category.slug, "listing unreachable; assuming one page");
            1
        }
    };
    catalog::listing_page_urls(&category.url, pages)
}

async fn scrape_category(
    fetcher: &Fetcher,
    base: &Url,
    pages: &[Url],
    category: &str,
) -> Vec<BookRecord> {
    let page_jobs = pages
        .iter()
        .map(|page| scrape_page(fetcher, base, page, category));
    join_all(page_jobs).await.into_iter().flatten().collect()
}

async fn scrape_page(fetcher: &Fetcher, base: &Url, page: &Url, category: &str) -> Vec<BookRecord> {
    let links = match fetcher.fetch(page).await {
        Some(doc) => catalog::book_links(&doc, base),
        None => {
            tracing::warn!(%page, "listing page unreachable; its books are omitted");
            return Vec::new();
        }
    };

    let book_jobs = links.iter().map(|link| scrape_book(fetcher, link, category));
    join_all(book_jobs).await
}

async fn scrape_book(fetcher: &Fetcher, url: &Url, category: &str) -> BookRecord {
    match fetcher.fetch(url).await {
        Some(doc) => extract::book_record(&doc, category),
        None => BookRecord::failed_fetch(category),
    }
}
