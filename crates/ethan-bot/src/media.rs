//! GIF attachment resolution.

use crate::random::{choose, RandomSource};
use async_trait::async_trait;
use giphy_client::GiphyClient;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use url::Url;

/// Keywords used for Giphy lookups when none are configured.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "ethereum",
    "crypto",
    "to the moon",
    "lets go",
    "hype",
    "hacker",
    "activated",
];

const DIRECT_MEDIA_TEMPLATE: &str = "https://media.giphy.com/media/{id}/giphy.gif";

/// Produces an optional attachment URL. Implementations never fail.
#[async_trait]
pub trait MediaSource: Send + Sync {
    async fn resolve(&self, hint: Option<&str>) -> Option<String>;
}

/// Static list first, then Giphy search, then nothing.
pub struct MediaResolver {
    static_urls: Vec<String>,
    giphy: Option<Arc<GiphyClient>>,
    keywords: Vec<String>,
    random: Arc<dyn RandomSource>,
}

impl MediaResolver {
    pub fn new(
        static_urls: Vec<String>,
        giphy: Option<Arc<GiphyClient>>,
        keywords: Vec<String>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let keywords = if keywords.is_empty() {
            DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
        } else {
            keywords
        };

        Self {
            static_urls,
            giphy,
            keywords,
            random,
        }
    }

    /// Human-readable description of where GIFs come from.
    pub fn describe(&self) -> &'static str {
        if !self.static_urls.is_empty() {
            "static list"
        } else if self.giphy.is_some() {
            "Giphy search"
        } else {
            "none"
        }
    }
}

#[async_trait]
impl MediaSource for MediaResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, hint: Option<&str>) -> Option<String> {
        if let Some(url) = choose(self.random.as_ref(), &self.static_urls) {
            return Some(to_direct_media_url(url));
        }

        let giphy = self.giphy.as_ref()?;

        let query = match hint.map(str::trim).filter(|h| !h.is_empty()) {
            Some(hint) => hint.to_string(),
            None => choose(self.random.as_ref(), &self.keywords)?.clone(),
        };

        match giphy.search(&query).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                debug!(query = %query, "No GIF found");
                None
            }
            Err(e) => {
                warn!(query = %query, "GIF lookup failed: {}", e);
                None
            }
        }
    }
}

/// Turn a Giphy page URL into a direct media URL.
///
/// `https://giphy.com/gifs/<slug>-<id>` and `https://giphy.com/embed/<id>` map to
/// `https://media.giphy.com/media/<id>/giphy.gif`. Anything else is returned unchanged.
pub fn to_direct_media_url(url: &str) -> String {
    let trimmed = url.trim();
    let Ok(parsed) = Url::parse(trimmed) else {
        return trimmed.to_string();
    };

    let is_page_host = matches!(parsed.host_str(), Some("giphy.com") | Some("www.giphy.com"));
    if !is_page_host || parsed.path().ends_with(".gif") {
        return trimmed.to_string();
    }

    let mut segments = match parsed.path_segments() {
        Some(segments) => segments.filter(|s| !s.is_empty()),
        None => return trimmed.to_string(),
    };

    let (Some(kind), Some(last)) = (segments.next(), segments.last()) else {
        return trimmed.to_string();
    };

    let id = match kind {
        "gifs" => last.rsplit('-').next().unwrap_or(last),
        "embed" => last,
        _ => return trimmed.to_string(),
    };

    if id.is_empty() {
        return trimmed.to_string();
    }

    DIRECT_MEDIA_TEMPLATE.replace("{id}", id)
}
