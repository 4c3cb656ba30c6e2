//! Loading-sentinel proximity signal.

use serde::{Deserialize, Serialize};

/// Whether the loading sentinel is near the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Proximity {
    /// Sentinel is far from the viewport.
    #[default]
    Away,
    /// Sentinel is within the configured margin of the viewport.
    Near,
}

impl Proximity {
    /// From an intersection observer's boolean.
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Self::Near
        } else {
            Self::Away
        }
    }

    /// From the distance between the sentinel's top edge and the viewport's
    /// bottom edge. Negative distances mean the sentinel is already on screen.
    pub fn from_distance(distance_px: i64, margin_px: u32) -> Self {
        Self::from_visible(distance_px <= i64::from(margin_px))
    }

    /// Check if the signal is firing.
    pub fn is_near(&self) -> bool {
        matches!(self, Self::Near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_distance() {
        assert_eq!(Proximity::from_distance(250, 100), Proximity::Away);
        assert_eq!(Proximity::from_distance(100, 100), Proximity::Near);
        assert_eq!(Proximity::from_distance(-40, 100), Proximity::Near);
        assert_eq!(Proximity::from_distance(1, 0), Proximity::Away);
    }

    #[test]
    fn test_default_is_away() {
        assert!(!Proximity::default().is_near());
        assert!(Proximity::from_visible(true).is_near());
    }
}
