//! Catalog module.
//!
//! Contains products, categories and the category catalog.

mod category;
mod product;

pub use category::{Category, CategoryCatalog, ShopHeading};
pub use product::Product;
