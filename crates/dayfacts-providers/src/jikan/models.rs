use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonResponse {
    #[serde(default)]
    pub data: Vec<AnimeItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimeItem {
    pub title: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub aired: Option<Aired>,
    #[serde(default)]
    pub images: Option<Images>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Aired {
    #[serde(default)]
    pub from: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub jpg: Option<JpgImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JpgImage {
    #[serde(default)]
    pub image_url: Option<String>,
}
