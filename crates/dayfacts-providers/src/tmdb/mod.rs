//! TMDb movie discovery, filtered to a one-day primary-release window.
//!
//! Requires a caller-supplied API key; without one the fetch layer never
//! constructs this provider and the movies category degrades to empty.

mod models;
mod normalize;

pub use models::{DiscoverResponse, MovieItem};
pub use normalize::movie_to_record;

use crate::client::HttpClient;
use crate::error::{Error, Result};
use dayfacts_types::DateSelection;

pub const BASE_URL: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w300";

pub struct TmdbProvider {
    base_url: String,
    api_key: String,
}

impl TmdbProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Discover URL for movies whose primary release is exactly this date.
    pub fn discover_url(&self, date: &DateSelection) -> String {
        format!(
            "{}/discover/movie?api_key={}&primary_release_date.gte={date}&primary_release_date.lte={date}&sort_by=popularity.desc",
            self.base_url, self.api_key
        )
    }

    pub async fn fetch(&self, client: &HttpClient, date: &DateSelection) -> Result<Vec<MovieItem>> {
        let body = client.get_json(&self.discover_url(date)).await?;
        let response: DiscoverResponse =
            serde_json::from_value(body).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(response.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_url_pins_both_ends_of_the_release_window() {
        let provider = TmdbProvider::new("k3y");
        let date = DateSelection::parse("2024-07-04").unwrap();
        let url = provider.discover_url(&date);
        assert!(url.starts_with("https://api.themoviedb.org/3/discover/movie?api_key=k3y"));
        assert!(url.contains("primary_release_date.gte=2024-07-04"));
        assert!(url.contains("primary_release_date.lte=2024-07-04"));
    }
}
