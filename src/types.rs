//! Common types for image search results
//!
//! These types are the backend-independent result shape: every backend
//! decodes its wire format into them.

use serde::{Deserialize, Serialize};

/// A single image search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    /// URL of the reduced-resolution rendition
    pub preview_url: String,
    /// URL of the full-resolution rendition
    pub full_url: String,
    /// Comma-separated free-text tags
    pub tags: String,
    /// Human-readable uploader credit
    pub attribution: String,
    /// Human-readable engagement summary
    pub stats: String,
}

/// One page of image search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePage {
    /// The search query that was executed
    pub query: String,
    /// The page number that was requested (1-based)
    pub page: u32,
    /// The results, in server order; may be empty
    pub results: Vec<ImageResult>,
    /// The backend that was used
    pub backend: String,
}

impl ImagePage {
    /// Number of results on this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether this page carries no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
