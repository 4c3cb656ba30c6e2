//! Discrete-step landing carousel with an animation lock.
//!
//! This crate provides:
//! - `SlideSet` - Slides in display order
//! - `CarouselController` - Index, lock and active-slide bookkeeping
//! - `CarouselView` - The write-only sink transforms and active marks go to
//! - `Transform` - A percentage offset along one axis
//!
//! # Example
//!
//! ```rust
//! use storefront_carousel::{CarouselController, CarouselView, Direction, SlideSet, Transform};
//! use storefront_core::config::CarouselSettings;
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl CarouselView for Log {
//!     fn translate(&mut self, transform: Transform) {
//!         self.0.push(transform.to_string());
//!     }
//!     fn mark_active(&mut self, index: usize) {
//!         self.0.push(format!("active {}", index));
//!     }
//! }
//!
//! let mut carousel =
//!     CarouselController::new(SlideSet::featured(), Log::default(), &CarouselSettings::default())
//!         .unwrap();
//! carousel.navigate(Direction::Next);
//! carousel.on_transition_settled();
//!
//! assert_eq!(carousel.view().0, vec!["translateY(-100%)", "active 1"]);
//! ```

mod controller;
mod error;
mod input;
mod slides;
mod transform;

pub use controller::*;
pub use error::*;
pub use input::*;
pub use slides::*;
pub use transform::*;
