//! Incremental, filter-keyed product feed for the shop listing.
//!
//! This crate provides:
//! - `FeedController` - Pagination state for one filter key at a time
//! - `ProductSource` - The page fetch function the controller is driven against
//! - `InMemorySource` - A paginating source over an in-process product list
//! - `ListingSession` - Async driver wiring filters, proximity and fetches together
//! - `Proximity` - The near-the-sentinel signal that pulls the next page

mod controller;
mod proximity;
mod session;
mod source;
mod state;

pub use controller::*;
pub use proximity::*;
pub use session::*;
pub use source::*;
pub use state::*;
