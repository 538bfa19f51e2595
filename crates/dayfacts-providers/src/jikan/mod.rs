//! Jikan (MyAnimeList) seasonal listing.
//!
//! The season endpoint has no day granularity, so items are filtered
//! client-side by matching the month/day digits of their `aired.from`
//! timestamp against the selected date.

mod models;
mod normalize;

pub use models::{AnimeItem, SeasonResponse};
pub use normalize::{aired_matches, anime_to_record, premieres_on};

use crate::client::HttpClient;
use crate::error::{Error, Result};
use dayfacts_types::DateSelection;

pub const BASE_URL: &str = "https://api.jikan.moe/v4";

/// Season bucket for a month (1-12).
pub fn season_for_month(month: u32) -> &'static str {
    match month {
        1..=3 => "winter",
        4..=6 => "spring",
        7..=9 => "summer",
        _ => "fall",
    }
}

pub struct JikanProvider {
    base_url: String,
}

impl Default for JikanProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl JikanProvider {
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

    pub fn season_url(&self, date: &DateSelection) -> String {
        format!(
            "{}/seasons/{}/{}",
            self.base_url,
            date.year,
            season_for_month(date.month)
        )
    }

    /// Fetch the season and keep only shows that premiered on this date.
    pub async fn fetch(&self, client: &HttpClient, date: &DateSelection) -> Result<Vec<AnimeItem>> {
        let body = client.get_json(&self.season_url(date)).await?;
        let response: SeasonResponse =
            serde_json::from_value(body).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(premieres_on(response.data, date))
    }
}
