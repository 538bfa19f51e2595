//! Wikipedia "On This Day" feed.
//!
//! One call to the `/feed/onthisday/all` endpoint serves four categories
//! (births, deaths, events, holidays) plus the fun fact, so the fetch layer
//! issues it once per date regardless of how many of those are enabled.

mod models;
mod normalize;

pub use models::{OnThisDayEntry, OnThisDayFeed, PageSummary};
pub use normalize::{entry_to_record, fun_fact, short_title};

use crate::client::HttpClient;
use crate::error::{Error, Result};
use dayfacts_types::DateSelection;

pub const BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

pub struct WikipediaProvider {
    base_url: String,
}

impl Default for WikipediaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WikipediaProvider {
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Feed path for a date, month and day zero-padded.
    pub fn feed_url(&self, date: &DateSelection) -> String {
        format!(
            "{}/feed/onthisday/all/{}/{}",
            self.base_url,
            date.mm(),
            date.dd()
        )
    }

    pub async fn fetch(&self, client: &HttpClient, date: &DateSelection) -> Result<OnThisDayFeed> {
        let body = client.get_json(&self.feed_url(date)).await?;
        serde_json::from_value(body).map_err(|e| Error::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_url_zero_pads_month_and_day() {
        let provider = WikipediaProvider::new();
        let date = DateSelection::parse("2024-7-4").unwrap();
        assert_eq!(
            provider.feed_url(&date),
            "https://en.wikipedia.org/api/rest_v1/feed/onthisday/all/07/04"
        );
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn live_feed_has_births() {
        let client = HttpClient::new(crate::DEFAULT_TIMEOUT_MS).unwrap();
        let date = DateSelection::parse("2024-07-04").unwrap();
        let feed = WikipediaProvider::new().fetch(&client, &date).await.unwrap();
        assert!(!feed.births.is_empty());
    }
}
