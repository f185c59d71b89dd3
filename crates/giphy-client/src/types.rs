//! Giphy API response types.

use serde::Deserialize;

/// Response from `/gifs/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<Gif>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Gif {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub images: Images,
}

/// Rendition variants we care about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Images {
    pub original: Option<Rendition>,
    pub downsized_medium: Option<Rendition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rendition {
    pub url: Option<String>,
}

impl Gif {
    /// Direct media URL, preferring the original rendition.
    pub fn preferred_url(&self) -> Option<&str> {
        fn usable(r: &Option<Rendition>) -> Option<&str> {
            r.as_ref()
                .and_then(|r| r.url.as_deref())
                .filter(|u| !u.is_empty())
        }

        usable(&self.images.original).or_else(|| usable(&self.images.downsized_medium))
    }
}

impl SearchResponse {
    /// Preferred URL of the first result.
    pub fn first_url(&self) -> Option<&str> {
        self.data.first().and_then(Gif::preferred_url)
    }
}
