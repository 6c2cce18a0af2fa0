//! Pixabay Search Library
//!
//! Paginated keyword image search against the Pixabay API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use pixabay_search::{Config, PixabayBackend, SearchSession};
//!
//! let config = Config::load()?;
//! let mut session = SearchSession::new(PixabayBackend::new(config.pixabay));
//!
//! let page = session.search("cats").await?;
//! while session.has_next_page() {
//!     let next = session.next_page().await?;
//! }
//! ```
//!
//! # Configuration
//! Set `PIXABAY_API_KEY` env var or configure in `~/.pixabay-search/config.toml`

pub mod backends;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

// Re-export the main entry points
pub use backends::pixabay::PixabayBackend;
pub use backends::ImageSearchBackend;
pub use config::{Config, PixabayConfig};
pub use error::{SearchError, TransportError};
pub use session::SearchSession;
pub use types::{ImagePage, ImageResult};
