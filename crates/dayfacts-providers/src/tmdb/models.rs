use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub results: Vec<MovieItem>,
}

/// Discovery items use different field names than the historical entries:
/// `title`/`release_date`/`overview` rather than free text plus a year.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}
