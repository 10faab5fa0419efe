//! # Catalog
//!
//! The static list of item cards shown on the storefront page.
//!
//! ## Layout
//! - Sections (**groups**) holding item cards, in page order
//! - Each item carries a category, display name, description, and price
//! - The catalog never changes for the lifetime of the page
//!
//! ## Filtering
//! - One category chip is active at a time, `all` by default
//! - Free-text search matches name or description, case-insensitive
//! - A section with no visible items is hidden entirely
use std::{fs, path::Path};

use thiserror::Error;
use tracing::info;

pub mod filter;
pub mod items;

pub use filter::{ALL_CATEGORIES, FilterState, SectionVisibility, Visibility};
pub use items::{Catalog, FALLBACK_ITEM_NAME, Item, Section, parse_leading_number};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let data = fs::read_to_string(path.as_ref())?;
    let catalog = parse_catalog(&data)?;

    info!(
        "Loaded catalog: {} sections, {} items",
        catalog.sections.len(),
        catalog.items().count()
    );

    Ok(catalog)
}

pub fn parse_catalog(data: &str) -> Result<Catalog, CatalogError> {
    Ok(serde_json::from_str(data)?)
}
