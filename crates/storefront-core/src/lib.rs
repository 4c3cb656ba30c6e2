//! Catalog, filter and configuration types for the storefront views.
//!
//! This crate holds everything the listing feed and the landing carousel
//! agree on:
//!
//! - **Catalog**: products, categories and the category catalog used to
//!   validate shop routes
//! - **Filters**: the externally owned filter record, the feed key derived
//!   from it and the normalised query handed to a data source
//! - **Pages**: one server batch of products plus the total match count
//! - **Landing**: carousel slides
//! - **Config**: feed and carousel settings loaded from TOML or JSON
//!
//! # Example
//!
//! ```rust
//! use storefront_core::prelude::*;
//!
//! let catalog = CategoryCatalog::new(vec![Category::new("wine"), Category::new("beer")]);
//! let filters = FilterState::default().with_category("wine").with_size("all");
//!
//! let key = catalog.resolve(&filters).unwrap();
//! assert_eq!(key.cache_key(), "products-wine-all");
//! assert_eq!(key.query().size, None);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod ids;
pub mod landing;
pub mod page;

pub use error::{ConfigError, FetchError, ShopError};
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Category, CategoryCatalog, Product, ShopHeading};
    pub use crate::config::{CarouselSettings, FeedSettings, StorefrontConfig};
    pub use crate::error::{ConfigError, FetchError, ShopError};
    pub use crate::filter::{FilterKey, FilterState, ProductQuery, ALL};
    pub use crate::ids::*;
    pub use crate::landing::Slide;
    pub use crate::page::Page;
}
