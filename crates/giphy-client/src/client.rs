//! Giphy HTTP client.

use crate::error::GiphyError;
use crate::types::SearchResponse;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Giphy API client.
#[derive(Clone)]
pub struct GiphyClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
    rating: String,
}

impl GiphyClient {
    /// Create a new client. `rating` is the content filter sent with every request (e.g. "g").
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        rating: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GiphyError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: SecretString::new(api_key.into()),
            rating: rating.into(),
        })
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    /// Search for `query` and return the first result's direct media URL.
    ///
    /// Returns `Ok(None)` when Giphy has no match or the match has no usable rendition.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Option<String>, GiphyError> {
        let response = self
            .client
            .get(format!("{}/gifs/search", self.base_url))
            .header("Accept", "application/json")
            .query(&[
                ("api_key", self.api_key.expose_secret().as_str()),
                ("q", query),
                ("limit", "1"),
                ("rating", self.rating.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Giphy rate limit exceeded");
            return Err(GiphyError::RateLimit);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GiphyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let results: SearchResponse = serde_json::from_str(&body)?;
        let url = results.first_url().map(String::from);

        debug!(query = %query, found = url.is_some(), "Giphy search");
        Ok(url)
    }
}
