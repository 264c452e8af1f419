use std::time::Duration;

use anyhow::Context as _;
use rand::Rng as _;
use scraper::Html;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// The storefront serves degraded markup to clients it does not recognize.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_1) AppleWebKit/605.1.15 \
     (KHTML, like Gecko) Version/16.1 Safari/605.1.15";

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    /// Retries after the initial attempt fails.
    pub max_tries: u32,
}

pub struct Fetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> anyhow::Result<Self> {
        if config.delay_min_ms > config.delay_max_ms {
            anyhow::bail!(
                "delay range is inverted: {}..{} ms",
                config.delay_min_ms,
                config.delay_max_ms
            );
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build http client")?;

        Ok(Self { client, config })
    }

    /// Fetches and parses one page; `None` means it stayed unreachable after retries.
    pub async fn fetch(&self, url: &Url) -> Option<Html> {
        let tries = attempt_budget(self.config.max_tries);
        for attempt in 1..=tries {
            self.pause().await;

            match self.get_text(url).await {
                Ok(body) => return Some(Html::parse_document(&body)),
                Err(err) => {
                    tracing::warn!(%url, attempt, ?err, "request failed");
                }
            }
        }

        tracing::error!(%url, tries, "giving up on page");
        None
    }

    async fn get_text(&self, url: &Url) -> reqwest::Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        response.text().await
    }

    async fn pause(&self) {
        let wait_ms =
            rand::rng().random_range(self.config.delay_min_ms..=self.config.delay_max_ms);
        tokio::time::sleep(Duration::from_millis(wait_ms)).await;
    }
}

// Initial attempt plus the configured retries.
fn attempt_budget(max_tries: u32) -> u64 {
    u64::from(max_tries) + 1
}
