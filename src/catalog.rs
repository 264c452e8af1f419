use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

const SECONDARY_LINK_CLASS: &str = "link--grey";

static CATEGORY_MENU: LazyLock<Selector> =
    LazyLock::new(|| selector("div.mega-menu__categories"));
static PAGINATION: LazyLock<Selector> = LazyLock::new(|| selector("div.btn-layout--horizontal"));
static TEASER: LazyLock<Selector> = LazyLock::new(|| selector("div.listing__item"));
static TEASER_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".listing__item__title"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("hardcoded css selector is valid")
}

#[derive(Debug, Clone)]
pub struct Category {
    pub slug: String,
    pub url: Url,
}

pub fn discover_categories(doc: &Html, base: &Url) -> anyhow::Result<Vec<Category>> {
    let Some(menu) = doc.select(&CATEGORY_MENU).next() else {
        anyhow::bail!("category menu not found on the storefront page");
    };

    let mut categories: Vec<Category> = Vec::new();
    for link in menu.select(&ANCHOR) {
        if link
            .value()
            .classes()
            .any(|class| class == SECONDARY_LINK_CLASS)
        {
            continue;
        }
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let Ok(url) = base.join(href) else {
            tracing::debug!(href, "skipping category link with an unusable href");
            continue;
        };

        let slug = category_slug(&link.text().collect::<String>());
        if slug.is_empty() || categories.iter().any(|known| known.slug == slug) {
            continue;
        }
        categories.push(Category { slug, url });
    }

    if categories.is_empty() {
        anyhow::bail!("category menu has no usable category links");
    }

    Ok(categories)
}

pub fn category_slug(text: &str) -> String {
    text.to_lowercase()
        .replace(',', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn page_count(doc: &Html) -> usize {
    let Some(control) = doc.select(&PAGINATION).next() else {
        return 1;
    };

    // Largest numeric link wins; a trailing arrow must not skew the count.
    control
        .select(&ANCHOR)
        .filter_map(|link| link.text().collect::<String>().trim().parse::<usize>().ok())
        .max()
        .unwrap_or(1)
        .max(1)
}

pub fn listing_page_urls(category_url: &Url, pages: usize) -> Vec<Url> {
    (1..=pages)
        .map(|page| {
            let mut url = category_url.clone();
            url.query_pairs_mut().append_pair("page", &page.to_string());
            url
        })
        .collect()
}

pub fn book_links(doc: &Html, base: &Url) -> Vec<Url> {
    doc.select(&TEASER)
        .filter_map(|teaser| {
            let link = teaser.select(&TEASER_TITLE).next()?;
            let href = link.value().attr("href")?;
            match base.join(href) {
                Ok(url) => Some(url),
                Err(err) => {
                    tracing::debug!(href, ?err, "skipping teaser with an unusable href");
                    None
                }
            }
        })
        .collect()
}
