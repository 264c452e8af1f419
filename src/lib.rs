#![forbid(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod crawl;
pub mod extract;
pub mod fetch;
pub mod formats;
pub mod logging;
pub mod prompt;
pub mod store;
