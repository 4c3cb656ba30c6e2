//! Feed state and the snapshots published to readers.

use std::sync::Arc;

use serde::Serialize;
use storefront_core::catalog::Product;
use storefront_core::page::Page;

/// Load status of the current feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    /// First page not yet arrived.
    #[default]
    Loading,
    /// At least one page arrived and the last fetch succeeded.
    Success,
    /// The last fetch failed. Pages loaded before the failure are kept.
    Error,
}

/// How the bottom of the listing should read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListEnd {
    /// First page still loading.
    #[default]
    Loading,
    /// A fetch failed.
    Failed,
    /// The filters match nothing.
    Empty,
    /// More pages can be requested.
    MoreAvailable,
    /// Every matching product has been loaded.
    Exhausted,
}

/// Pagination state for one filter key.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    /// Pages in arrival order. Append-only for the lifetime of a key.
    pub pages: Vec<Arc<Page>>,
    /// Load status.
    pub status: FeedStatus,
    /// A page after the first is in flight.
    pub is_fetching_next: bool,
    /// Another page exists beyond those held.
    pub has_next: bool,
}

impl FeedState {
    /// Number of products held across all pages.
    pub fn product_count(&self) -> usize {
        self.pages.iter().map(|p| p.len()).sum()
    }

    /// Server-reported total from the most recent page.
    pub fn total_count(&self) -> Option<u64> {
        self.pages.last().map(|p| p.count)
    }

    /// Products across all pages, in page order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.pages.iter().flat_map(|p| p.results.iter())
    }

    /// Classify the end of the listing. An empty listing is decided by the
    /// first page's count.
    pub fn list_end(&self) -> ListEnd {
        match self.status {
            FeedStatus::Loading => ListEnd::Loading,
            FeedStatus::Error => ListEnd::Failed,
            FeedStatus::Success => match self.pages.first() {
                Some(first) if first.count == 0 => ListEnd::Empty,
                _ if self.has_next => ListEnd::MoreAvailable,
                _ => ListEnd::Exhausted,
            },
        }
    }
}

/// Read-only view of the feed published after every change.
///
/// Pages are shared with the controller, so publishing does not copy
/// products.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedSnapshot {
    /// Cache label of the active key, if any.
    pub key: Option<String>,
    /// Load status.
    pub status: FeedStatus,
    /// Pages in arrival order.
    pub pages: Vec<Arc<Page>>,
    /// Server-reported total.
    pub total_count: Option<u64>,
    /// A page after the first is in flight.
    pub is_fetching_next: bool,
    /// Another page exists beyond those held.
    pub has_next: bool,
    /// End-of-list classification, as computed by the feed state.
    pub list_end: ListEnd,
}

impl FeedSnapshot {
    pub(crate) fn capture(key: Option<String>, state: &FeedState) -> Self {
        Self {
            key,
            status: state.status,
            pages: state.pages.clone(),
            total_count: state.total_count(),
            is_fetching_next: state.is_fetching_next,
            has_next: state.has_next,
            list_end: state.list_end(),
        }
    }

    /// Flattened products in page order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.pages.iter().flat_map(|p| p.results.iter())
    }

    /// Number of products held across all pages.
    pub fn product_count(&self) -> usize {
        self.pages.iter().map(|p| p.len()).sum()
    }

    /// Classify the end of the listing.
    pub fn list_end(&self) -> ListEnd {
        self.list_end
    }

    /// Message for the empty, failed and end-of-list states.
    pub fn banner(&self) -> Option<&'static str> {
        match self.list_end {
            ListEnd::Empty => Some("No products match these filters"),
            ListEnd::Failed => Some("Error fetching products"),
            ListEnd::Exhausted => Some("No more products"),
            ListEnd::Loading | ListEnd::MoreAvailable => None,
        }
    }

    /// Result counter, e.g. `SHOWING 1–20 OF 96 RESULTS`.
    pub fn results_info(&self) -> Option<String> {
        let loaded = self.product_count();
        match self.total_count {
            Some(total) if total > 0 && loaded > 0 => {
                Some(format!("SHOWING 1–{} OF {} RESULTS", loaded, total))
            }
            _ => None,
        }
    }
}
