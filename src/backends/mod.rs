//! Search backend implementations
//!
//! This module provides a trait-based abstraction for image search
//! backends. Currently supports Pixabay.

use async_trait::async_trait;

use crate::error::SearchResult;
use crate::types::ImagePage;

pub mod pixabay;

/// Trait for image search backends
///
/// All search backends must implement this trait so that sessions and
/// callers stay independent of the concrete provider.
#[async_trait]
pub trait ImageSearchBackend: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &str;

    /// Number of results requested per page
    fn page_size(&self) -> u32;

    /// Fetch one page of image results for a query
    ///
    /// `page` is 1-based. The returned page preserves server order and
    /// may be empty; an empty page is not an error.
    async fn search_images(&self, query: &str, page: u32) -> SearchResult<ImagePage>;

    /// Check if this backend is configured and available
    fn is_available(&self) -> bool;
}
