//! Pagination controller for the product listing.
//!
//! The controller never performs I/O. Every operation that needs a page
//! returns a `PageRequest`; the host resolves it against a `ProductSource`
//! and hands the outcome back through `apply`. Each request carries the
//! generation of the key it was issued for, so a response that arrives after
//! the key changed is recognised and dropped.

use std::sync::Arc;

use storefront_core::catalog::Product;
use storefront_core::error::FetchError;
use storefront_core::filter::{FilterKey, ProductQuery};
use storefront_core::page::Page;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::proximity::Proximity;
use crate::state::{FeedSnapshot, FeedState, FeedStatus, ListEnd};

/// A page fetch the host must perform.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    /// Key generation this request belongs to.
    pub generation: u64,
    /// 0-based page index.
    pub page_index: usize,
    /// Normalised filters for the source.
    pub query: ProductQuery,
}

/// What `apply` did with a response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The page was appended.
    Applied,
    /// The fetch failed; status is now `Error`.
    Failed,
    /// The response belongs to a superseded key or request and was ignored.
    Stale,
}

/// Owns pagination state for one filter key at a time.
#[derive(Debug)]
pub struct FeedController {
    page_size: usize,
    key: Option<FilterKey>,
    generation: u64,
    state: FeedState,
    in_flight: Option<usize>,
    discarded: u64,
    snapshots: watch::Sender<FeedSnapshot>,
}

impl FeedController {
    /// Create a controller. `page_size` is the step used to decide whether
    /// more pages exist and must match what the source serves.
    pub fn new(page_size: usize) -> Self {
        let (snapshots, _) = watch::channel(FeedSnapshot::default());
        Self {
            page_size: page_size.max(1),
            key: None,
            generation: 0,
            state: FeedState::default(),
            in_flight: None,
            discarded: 0,
            snapshots,
        }
    }

    /// Switch to `key`.
    ///
    /// Equal keys are a no-op. A different key discards every held page,
    /// invalidates any in-flight request and returns the first-page request.
    pub fn set_filter_key(&mut self, key: FilterKey) -> Option<PageRequest> {
        if self.key.as_ref() == Some(&key) {
            debug!(key = %key, "filter key unchanged");
            return None;
        }

        info!(key = %key, "filter key changed, restarting feed");
        self.key = Some(key);
        self.restart()
    }

    /// Reload the current key from its first page.
    pub fn refetch(&mut self) -> Option<PageRequest> {
        if self.key.is_none() {
            return None;
        }
        debug!("refetching feed");
        self.restart()
    }

    fn restart(&mut self) -> Option<PageRequest> {
        let query = self.key.as_ref()?.query();
        if self.in_flight.is_some() {
            debug!(generation = self.generation, "abandoning in-flight request");
        }

        self.generation += 1;
        self.state = FeedState::default();
        self.in_flight = Some(0);
        self.publish();

        Some(PageRequest {
            generation: self.generation,
            page_index: 0,
            query,
        })
    }

    /// Request the page after those held.
    ///
    /// Returns `None` unless the last load succeeded, another page exists and
    /// nothing is in flight.
    pub fn request_next_page(&mut self) -> Option<PageRequest> {
        if self.state.status != FeedStatus::Success || !self.state.has_next {
            return None;
        }
        if self.in_flight.is_some() {
            debug!("next page already in flight");
            return None;
        }

        let query = self.key.as_ref()?.query();
        let page_index = self.state.pages.len();
        self.in_flight = Some(page_index);
        self.state.is_fetching_next = true;
        self.publish();

        debug!(page_index, "requesting next page");
        Some(PageRequest {
            generation: self.generation,
            page_index,
            query,
        })
    }

    /// Apply the outcome of a request previously returned by this controller.
    pub fn apply(
        &mut self,
        request: &PageRequest,
        outcome: Result<Page, FetchError>,
    ) -> ApplyOutcome {
        if request.generation != self.generation || self.in_flight != Some(request.page_index) {
            self.discarded += 1;
            debug!(
                generation = request.generation,
                current = self.generation,
                page_index = request.page_index,
                "discarding stale page response"
            );
            return ApplyOutcome::Stale;
        }

        self.in_flight = None;
        self.state.is_fetching_next = false;

        let applied = match outcome {
            Ok(page) => {
                debug!(
                    page_index = request.page_index,
                    results = page.len(),
                    count = page.count,
                    "page arrived"
                );
                self.state.pages.push(Arc::new(page));
                self.state.status = FeedStatus::Success;
                self.state.has_next = self.compute_has_next();
                ApplyOutcome::Applied
            }
            Err(e) => {
                warn!(page_index = request.page_index, error = %e, "page fetch failed");
                self.state.status = FeedStatus::Error;
                ApplyOutcome::Failed
            }
        };

        self.publish();
        applied
    }

    fn compute_has_next(&self) -> bool {
        match self.state.pages.last() {
            Some(last) => (self.state.pages.len() as u64) * (self.page_size as u64) < last.count,
            None => false,
        }
    }

    /// Whether a proximity signal should pull the next page.
    pub fn should_advance(&self, signal: Proximity) -> bool {
        signal.is_near()
            && self.state.status == FeedStatus::Success
            && self.state.has_next
            && self.in_flight.is_none()
    }

    /// Products across all held pages, in page order.
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> {
        self.state.products()
    }

    /// Current state.
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Current key.
    pub fn key(&self) -> Option<&FilterKey> {
        self.key.as_ref()
    }

    /// Classify the end of the listing.
    pub fn list_end(&self) -> ListEnd {
        self.state.list_end()
    }

    /// Number of responses dropped as stale.
    pub fn discarded_responses(&self) -> u64 {
        self.discarded
    }

    /// Configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Watch the feed. The receiver sees a fresh snapshot after every change.
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.snapshots.subscribe()
    }

    fn publish(&self) {
        let key = self.key.as_ref().map(FilterKey::cache_key);
        self.snapshots.send_replace(FeedSnapshot::capture(key, &self.state));
    }
}
