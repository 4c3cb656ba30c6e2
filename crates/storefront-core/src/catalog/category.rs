//! Category types and the category catalog.

use crate::error::ShopError;
use crate::filter::{FilterKey, FilterState};
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name, also used as the shop route segment (`/shop/{name}`).
    pub name: String,
}

impl Category {
    /// Create a category whose id is its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: CategoryId::new(name.clone()),
            name,
        }
    }

    /// Set an explicit id.
    pub fn with_id(mut self, id: impl Into<CategoryId>) -> Self {
        self.id = id.into();
        self
    }

    /// Route to this category's listing.
    pub fn shop_path(&self) -> String {
        format!("/shop/{}", self.name)
    }
}

/// Heading shown above the product listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopHeading<'a> {
    /// Browsing everything: link to every category.
    CategoryLinks(&'a [Category]),
    /// Browsing one category: show its name.
    Title(&'a str),
}

/// The ordered set of valid categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Create a catalog from categories in display order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Check whether a category name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Validate the filter record and derive the feed key from it.
    ///
    /// An unknown category is a navigation condition (`CategoryNotFound`),
    /// never a feed error.
    pub fn resolve(&self, filters: &FilterState) -> Result<FilterKey, ShopError> {
        if let Some(category) = filters.category_filter() {
            if !self.contains(category) {
                return Err(ShopError::CategoryNotFound(category.to_string()));
            }
        }
        FilterKey::from_filters(filters)
    }

    /// Heading for the current filters.
    pub fn heading<'a>(&'a self, filters: &'a FilterState) -> ShopHeading<'a> {
        match filters.category_filter() {
            Some(category) => ShopHeading::Title(category),
            None => ShopHeading::CategoryLinks(&self.categories),
        }
    }
}
