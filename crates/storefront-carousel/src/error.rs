//! Carousel error types.

use thiserror::Error;

/// Errors raised when building a carousel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one slide.
    #[error("Carousel has no slides")]
    NoSlides,
}
