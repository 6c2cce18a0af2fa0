//! Pixabay search CLI
//!
//! Searches Pixabay for images and prints the results, following the
//! session's pagination until the requested number of pages is reached
//! or the result stream runs dry.
//!
//! # Configuration
//! Set `PIXABAY_API_KEY` env var or configure in `~/.pixabay-search/config.toml`

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixabay_search::{Config, ImageSearchBackend, PixabayBackend, SearchSession};

#[derive(Parser)]
#[command(name = "pixabay-search")]
#[command(about = "Search Pixabay for images from the command line")]
struct Cli {
    /// Text to search for
    query: String,

    /// Number of pages to fetch
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// Results per page (overrides config)
    #[arg(long)]
    per_page: Option<u32>,

    /// API key (overrides config)
    #[arg(long, env = "PIXABAY_API_KEY")]
    key: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing to stderr, keeping stdout for results
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.query.trim().is_empty() {
        bail!("query must not be empty");
    }

    let mut config = Config::load()?;
    if let Some(key) = cli.key {
        config.pixabay.key = key;
    }
    if let Some(per_page) = cli.per_page {
        config.pixabay.per_page = per_page;
    }

    let backend = PixabayBackend::new(config.pixabay);
    if !backend.is_available() {
        bail!("no API key configured - set PIXABAY_API_KEY or add one to ~/.pixabay-search/config.toml");
    }

    let mut session = SearchSession::new(backend);
    let mut pages = Vec::new();

    let first = session.search(&cli.query).await?;
    tracing::info!("page 1: {} results", first.len());
    pages.push(first);

    while (pages.len() as u32) < cli.pages {
        match session.next_page().await? {
            Some(page) => {
                tracing::info!("page {}: {} results", page.page, page.len());
                pages.push(page);
            }
            None => break,
        }
    }

    let results: Vec<_> = pages.iter().flat_map(|page| page.results.iter()).collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No images found for '{}'", cli.query);
    } else {
        for (index, result) in results.iter().enumerate() {
            println!("{}. {}", index + 1, result.preview_url);
            println!("   full:  {}", result.full_url);
            println!("   tags:  {}", result.tags);
            println!("   {} | {}", result.attribution, result.stats);
        }
    }

    Ok(())
}
