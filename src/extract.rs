use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::formats::BookRecord;

const MISSING_TITLE: &str = "undefined";

const COOKIE_BANNER_CLASS: &str = "cookieconsent-optout-marketing";

static TITLE_META: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[property="og:title"]"#));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector("#description"));
static DESCRIPTION_BODY: LazyLock<Selector> = LazyLock::new(|| selector(".cms-article"));
static PRICE_HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h1.product-price__main"));
static RATING_WIDGET: LazyLock<Selector> = LazyLock::new(|| selector("#star-rating"));
static RATING_VALUE: LazyLock<Selector> = LazyLock::new(|| selector("span.text-bold"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("hardcoded css selector is valid")
}

pub fn book_record(doc: &Html, category: &str) -> BookRecord {
    BookRecord::new(
        title(doc),
        description(doc),
        price(doc),
        rating(doc),
        category,
    )
}

pub fn title(doc: &Html) -> String {
    doc.select(&TITLE_META)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::to_owned)
        .unwrap_or_else(|| MISSING_TITLE.to_owned())
}

pub fn description(doc: &Html) -> String {
    let Some(container) = doc.select(&DESCRIPTION).next() else {
        return String::new();
    };
    let Some(article) = container.select(&DESCRIPTION_BODY).next() else {
        return String::new();
    };

    let mut text = String::new();
    for node in article.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let in_cookie_banner = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| el.value().classes().any(|class| class == COOKIE_BANNER_CLASS));
        if in_cookie_banner {
            continue;
        }
        text.push_str(fragment);
    }

    normalize_description(&text)
}

pub fn price(doc: &Html) -> Option<f64> {
    let heading = doc.select(&PRICE_HEADING).next()?;
    let text = heading.text().collect::<String>();
    let token = text.split_whitespace().next()?;
    token.replace(',', ".").parse::<f64>().ok()
}

pub fn rating(doc: &Html) -> Option<i32> {
    let widget = doc.select(&RATING_WIDGET).next()?;
    let value = widget.select(&RATING_VALUE).next()?;
    let text = value.text().collect::<String>();
    let integer_part = text.split(',').next()?;
    integer_part.trim().parse::<i32>().ok()
}

fn normalize_description(text: &str) -> String {
    text.replace('\n', "")
        .replace('\r', " ")
        .replace('\t', "")
        .trim()
        .to_owned()
}
