use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub page: u32,
    pub per_page: u32,
    pub total_results: u32,
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratedResult {
    pub page: u32,
    pub per_page: u32,
    pub total_results: u32,
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub photographer: String,
    pub photographer_url: String,
    pub photographer_id: u64,
    pub avg_color: Option<String>,
    pub alt: Option<String>,
    pub src: PhotoSource,
}

/// Links to the same photo rendered at each size the API offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSource {
    pub original: String,
    pub large: String,
    pub large2x: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    pub square: String,
    pub landscape: String,
    pub tiny: String,
}

impl PhotoSource {
    pub fn get(&self, size: PhotoSize) -> &str {
        match size {
            PhotoSize::Original => &self.original,
            PhotoSize::Large => &self.large,
            PhotoSize::Large2x => &self.large2x,
            PhotoSize::Medium => &self.medium,
            PhotoSize::Small => &self.small,
            PhotoSize::Portrait => &self.portrait,
            PhotoSize::Square => &self.square,
            PhotoSize::Landscape => &self.landscape,
            PhotoSize::Tiny => &self.tiny,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSize {
    Original,
    Large,
    Large2x,
    Medium,
    Small,
    Portrait,
    Square,
    Landscape,
    Tiny,
}
