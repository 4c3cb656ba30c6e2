//! Product listing types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product as returned in a listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency.
    pub price: f64,
    /// Primary image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Category name the product is filed under.
    #[serde(default)]
    pub category: Option<String>,
    /// Size label (e.g. "750ml").
    #[serde(default)]
    pub size: Option<String>,
}

impl Product {
    /// Create a product with no category, size or image.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
            category: None,
            size: None,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the size label.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}
