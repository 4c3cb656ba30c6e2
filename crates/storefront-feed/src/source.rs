//! Page sources the feed is driven against.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use storefront_core::catalog::Product;
use storefront_core::error::FetchError;
use storefront_core::filter::ProductQuery;
use storefront_core::page::Page;

/// The page fetch function.
///
/// Implementations report failures as `FetchError` values; the controller
/// turns them into feed status and never sees a panic.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch page `page_index` (0-based) of the products matching `query`.
    async fn fetch_page(&self, query: &ProductQuery, page_index: usize) -> Result<Page, FetchError>;
}

#[async_trait]
impl<S: ProductSource + ?Sized> ProductSource for Arc<S> {
    async fn fetch_page(
        &self,
        query: &ProductQuery,
        page_index: usize,
    ) -> Result<Page, FetchError> {
        (**self).fetch_page(query, page_index).await
    }
}

/// Paginates an in-process product list.
///
/// Applies every filter in the query, including the price range.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    products: Vec<Product>,
    page_size: usize,
    latency: Option<Duration>,
}

impl InMemorySource {
    /// Create a source serving `page_size` products per page.
    pub fn new(products: Vec<Product>, page_size: usize) -> Self {
        Self {
            products,
            page_size: page_size.max(1),
            latency: None,
        }
    }

    /// Delay every response.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Build the page synchronously.
    pub fn page(&self, query: &ProductQuery, page_index: usize) -> Page {
        let matching: Vec<&Product> = self.products.iter().filter(|p| query.matches(p)).collect();
        let results = matching
            .iter()
            .skip(page_index.saturating_mul(self.page_size))
            .take(self.page_size)
            .map(|p| (*p).clone())
            .collect();

        Page::new(results, matching.len() as u64)
    }
}

#[async_trait]
impl ProductSource for InMemorySource {
    async fn fetch_page(
        &self,
        query: &ProductQuery,
        page_index: usize,
    ) -> Result<Page, FetchError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(self.page(query, page_index))
    }
}
