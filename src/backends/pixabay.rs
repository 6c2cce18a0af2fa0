//! Pixabay backend
//!
//! Implements the ImageSearchBackend trait against the Pixabay REST API.
//! See: https://pixabay.com/api/docs/

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::ImageSearchBackend;
use crate::config::PixabayConfig;
use crate::error::{SearchResult, TransportError};
use crate::types::{ImagePage, ImageResult};

/// Pixabay backend
pub struct PixabayBackend {
    client: Client,
    config: PixabayConfig,
}

impl PixabayBackend {
    pub fn new(config: PixabayConfig) -> Self {
        let client = Client::builder()
            .user_agent("pixabay-search/0.1")
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Query string parameters for one search request
    fn query_params(&self, query: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("key", self.config.key.clone()),
            ("q", query.to_string()),
            ("image_type", "photo".to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ]
    }
}

// Pixabay API response types
#[derive(Debug, serde::Deserialize)]
struct PixabayResponse {
    // Hits stay raw so one malformed hit cannot fail the whole page
    hits: Vec<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct PixabayHit {
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    #[serde(rename = "largeImageURL")]
    large_image_url: String,
    tags: String,
    user: String,
    comments: u64,
    likes: u64,
    downloads: u64,
}

impl PixabayHit {
    /// Build the public record, or drop the hit if a required field is blank
    fn into_result(self) -> Option<ImageResult> {
        if self.webformat_url.is_empty()
            || self.large_image_url.is_empty()
            || self.tags.is_empty()
            || self.user.is_empty()
        {
            return None;
        }

        Some(ImageResult {
            preview_url: self.webformat_url,
            full_url: self.large_image_url,
            tags: self.tags,
            attribution: format!("Uploaded by: @{}", self.user),
            stats: format!(
                "{} Comments, {} Likes, {} Downloads",
                self.comments, self.likes, self.downloads
            ),
        })
    }
}

/// Decode one response body into results, skipping malformed hits
fn decode_page(body: &str) -> SearchResult<Vec<ImageResult>> {
    let response: PixabayResponse = serde_json::from_str(body)?;

    let results = response
        .hits
        .into_iter()
        .filter_map(|hit| serde_json::from_value::<PixabayHit>(hit).ok())
        .filter_map(PixabayHit::into_result)
        .collect();

    Ok(results)
}

#[async_trait]
impl ImageSearchBackend for PixabayBackend {
    fn name(&self) -> &str {
        "pixabay"
    }

    fn page_size(&self) -> u32 {
        self.config.per_page
    }

    fn is_available(&self) -> bool {
        !self.config.key.is_empty() && Url::parse(&self.config.base_url).is_ok()
    }

    async fn search_images(&self, query: &str, page: u32) -> SearchResult<ImagePage> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&self.query_params(query, page))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body }.into());
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        if !content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
        {
            return Err(TransportError::ContentType { content_type }.into());
        }

        let body = response.text().await?;
        let results = decode_page(&body)?;

        tracing::debug!(
            "pixabay returned {} results for '{}' (page {})",
            results.len(),
            query,
            page
        );

        Ok(ImagePage {
            query: query.to_string(),
            page,
            results,
            backend: self.name().to_string(),
        })
    }
}
