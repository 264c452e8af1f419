use serde::{Deserialize, Serialize};

pub const UNKNOWN_PRICE: f64 = -1.0;
pub const UNRATED: i32 = -1;

/// Every field of a book whose detail page never came back.
const FETCH_FAILED: &str = "Undefined";

/// One scraped book, in the exact shape of the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub description: String,
    pub available: bool,
    pub price: f64,
    pub is_rated: bool,
    pub rating: i32,
    pub category: String,
}

impl BookRecord {
    pub fn new(
        title: String,
        description: String,
        price: Option<f64>,
        rating: Option<i32>,
        category: &str,
    ) -> Self {
        Self {
            title,
            description,
            available: price.is_some(),
            price: price.unwrap_or(UNKNOWN_PRICE),
            is_rated: rating.is_some(),
            rating: rating.unwrap_or(UNRATED),
            category: category.to_owned(),
        }
    }

    pub fn failed_fetch(category: &str) -> Self {
        Self::new(
            FETCH_FAILED.to_owned(),
            FETCH_FAILED.to_owned(),
            None,
            None,
            category,
        )
    }
}
