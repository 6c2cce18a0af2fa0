//! Caller-side pagination state for a keyword search
//!
//! Backends are stateless; all pagination bookkeeping lives here. A
//! session tracks the active query, the current page, and whether more
//! pages are expected. The endpoint exposes no has-more flag, so a page
//! whose length differs from the requested page size is the only
//! termination signal.

use crate::backends::ImageSearchBackend;
use crate::error::SearchResult;
use crate::types::ImagePage;

/// Pagination state machine over an [`ImageSearchBackend`]
pub struct SearchSession<B> {
    backend: B,
    last_query: Option<String>,
    current_page: u32,
    has_next_page: bool,
}

impl<B: ImageSearchBackend> SearchSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            last_query: None,
            current_page: 1,
            has_next_page: true,
        }
    }

    /// The backend this session drives
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The query currently being paged through, if any
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// The last successfully fetched page number (1-based)
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Whether another page is expected for the active query
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Start a fresh search, fetching page 1
    ///
    /// Resets pagination state before fetching. On error the session is
    /// left without an active query, so [`next_page`](Self::next_page)
    /// stays disarmed until a search succeeds.
    pub async fn search(&mut self, query: &str) -> SearchResult<ImagePage> {
        self.last_query = None;
        self.current_page = 1;
        self.has_next_page = true;

        let page = self.backend.search_images(query, 1).await?;

        self.last_query = Some(query.to_string());
        self.note_page(&page);

        Ok(page)
    }

    /// Fetch the next page for the active query
    ///
    /// Returns `Ok(None)` without a network call when no query is active
    /// or the session has already seen the last page. The current page
    /// advances only after a successful non-empty fetch; an error leaves
    /// all state untouched, so the call can be retried.
    pub async fn next_page(&mut self) -> SearchResult<Option<ImagePage>> {
        let query = match &self.last_query {
            Some(query) if self.has_next_page => query.clone(),
            _ => return Ok(None),
        };

        let page = self.backend.search_images(&query, self.current_page + 1).await?;

        if !page.is_empty() {
            self.current_page += 1;
        }
        self.note_page(&page);

        Ok(Some(page))
    }

    /// Apply the short-page termination heuristic
    fn note_page(&mut self, page: &ImagePage) {
        if page.len() as u32 != self.backend.page_size() {
            self.has_next_page = false;
        }
    }
}
