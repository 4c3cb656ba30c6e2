//! One batch of listing results.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A page of products plus the server-reported total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    /// Products in server order.
    pub results: Vec<Product>,
    /// Total number of products matching the query across all pages.
    pub count: u64,
}

impl Page {
    /// Create a page.
    pub fn new(results: Vec<Product>, count: u64) -> Self {
        Self { results, count }
    }

    /// A page reporting zero matches.
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }

    /// Number of products in this page.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if this page carries no products.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
