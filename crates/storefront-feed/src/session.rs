//! Async driver for one mounted product listing.

use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use storefront_core::catalog::CategoryCatalog;
use storefront_core::config::FeedSettings;
use storefront_core::error::{FetchError, ShopError};
use storefront_core::filter::FilterState;
use storefront_core::page::Page;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::controller::{FeedController, PageRequest};
use crate::proximity::Proximity;
use crate::source::ProductSource;
use crate::state::FeedSnapshot;

/// Drives a `FeedController` from filter and proximity changes.
///
/// Runs on a single task. Fetches for superseded keys are left to finish and
/// their results are dropped by the controller.
pub struct ListingSession<S> {
    controller: FeedController,
    source: S,
    catalog: CategoryCatalog,
    fetch_timeout: Option<Duration>,
    proximity_margin_px: u32,
}

impl<S: ProductSource> ListingSession<S> {
    /// Create a session.
    pub fn new(source: S, catalog: CategoryCatalog, settings: &FeedSettings) -> Self {
        Self {
            controller: FeedController::new(settings.page_size),
            source,
            catalog,
            fetch_timeout: settings.fetch_timeout(),
            proximity_margin_px: settings.proximity_margin_px,
        }
    }

    /// Watch the feed.
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.controller.subscribe()
    }

    /// The underlying controller.
    pub fn controller(&self) -> &FeedController {
        &self.controller
    }

    /// Classify the sentinel's distance from the viewport bottom against the
    /// configured margin.
    pub fn proximity_at(&self, distance_px: i64) -> Proximity {
        Proximity::from_distance(distance_px, self.proximity_margin_px)
    }

    /// The category catalog used for validation.
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Run until the filter channel closes.
    ///
    /// Returns `CategoryNotFound` as soon as the filters name a category the
    /// catalog does not know, and the host is expected to navigate away.
    /// Filters that fail validation after start are logged and ignored, so the
    /// current feed stays up. Only a change of the proximity signal can pull a
    /// further page.
    pub async fn run(
        &mut self,
        mut filters: watch::Receiver<FilterState>,
        mut proximity: watch::Receiver<Proximity>,
    ) -> Result<(), ShopError> {
        let Self {
            controller,
            source,
            catalog,
            fetch_timeout,
            ..
        } = self;
        let source = &*source;
        let timeout = *fetch_timeout;

        let mut pending = FuturesUnordered::new();

        let initial = filters.borrow_and_update().clone();
        match catalog.resolve(&initial) {
            Ok(key) => {
                if let Some(request) = controller.set_filter_key(key) {
                    pending.push(fetch_page(source, request, timeout));
                }
            }
            Err(e @ ShopError::CategoryNotFound(_)) => return Err(e),
            Err(e) => warn!(error = %e, "ignoring invalid initial filters"),
        }

        let mut proximity_open = true;

        loop {
            tokio::select! {
                biased;

                Some((request, outcome)) = pending.next(), if !pending.is_empty() => {
                    controller.apply(&request, outcome);
                }

                changed = filters.changed() => {
                    if changed.is_err() {
                        info!("filter source closed, ending listing session");
                        return Ok(());
                    }
                    let state = filters.borrow_and_update().clone();
                    let key = match catalog.resolve(&state) {
                        Ok(key) => key,
                        Err(e @ ShopError::CategoryNotFound(_)) => {
                            warn!(error = %e, "unknown category, ending listing session");
                            return Err(e);
                        }
                        Err(e) => {
                            warn!(error = %e, "ignoring invalid filters, keeping current feed");
                            continue;
                        }
                    };
                    if let Some(request) = controller.set_filter_key(key) {
                        pending.push(fetch_page(source, request, timeout));
                    }
                }

                changed = proximity.changed(), if proximity_open => {
                    if changed.is_err() {
                        debug!("proximity source closed");
                        proximity_open = false;
                        continue;
                    }
                    let signal = *proximity.borrow_and_update();
                    if controller.should_advance(signal) {
                        if let Some(request) = controller.request_next_page() {
                            pending.push(fetch_page(source, request, timeout));
                        }
                    }
                }
            }
        }
    }
}

async fn fetch_page<S: ProductSource + ?Sized>(
    source: &S,
    request: PageRequest,
    timeout: Option<Duration>,
) -> (PageRequest, Result<Page, FetchError>) {
    let fetch = source.fetch_page(&request.query, request.page_index);
    let outcome = match timeout {
        Some(limit) => tokio::time::timeout(limit, fetch)
            .await
            .unwrap_or(Err(FetchError::Timeout(limit))),
        None => fetch.await,
    };
    (request, outcome)
}
