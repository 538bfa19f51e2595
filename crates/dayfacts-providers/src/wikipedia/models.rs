use serde::Deserialize;

/// The `all` feed document: one array per category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OnThisDayFeed {
    #[serde(default)]
    pub births: Vec<OnThisDayEntry>,
    #[serde(default)]
    pub deaths: Vec<OnThisDayEntry>,
    #[serde(default)]
    pub events: Vec<OnThisDayEntry>,
    #[serde(default)]
    pub holidays: Vec<OnThisDayEntry>,
}

/// One feed entry. `text` embeds the subject after an en-dash; `year` is
/// absent for holidays; `pages` may be empty.
#[derive(Debug, Clone, Deserialize)]
pub struct OnThisDayEntry {
    pub text: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub pages: Vec<PageSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSummary {
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub content_urls: Option<ContentUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub source: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentUrls {
    pub desktop: DesktopUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DesktopUrls {
    pub page: String,
}
