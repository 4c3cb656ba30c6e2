//! Navigation intents and raw input.

use serde::{Deserialize, Serialize};

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the last slide.
    Next,
    /// Towards the first slide.
    Prev,
}

/// A mouse-wheel event as seen by the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// Vertical scroll delta. Positive scrolls down.
    pub delta_y: f64,
    /// Window inner width at the time of the event.
    pub viewport_width: u32,
}

impl WheelInput {
    /// Create a wheel event.
    pub fn new(delta_y: f64, viewport_width: u32) -> Self {
        Self {
            delta_y,
            viewport_width,
        }
    }

    /// Direction implied by the delta, `None` for a zero (or NaN) delta.
    pub fn direction(&self) -> Option<Direction> {
        if self.delta_y > 0.0 {
            Some(Direction::Next)
        } else if self.delta_y < 0.0 {
            Some(Direction::Prev)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_direction() {
        assert_eq!(WheelInput::new(120.0, 1280).direction(), Some(Direction::Next));
        assert_eq!(WheelInput::new(-3.0, 1280).direction(), Some(Direction::Prev));
        assert_eq!(WheelInput::new(0.0, 1280).direction(), None);
        assert_eq!(WheelInput::new(f64::NAN, 1280).direction(), None);
    }

    #[test]
    fn test_direction_serde() {
        assert_eq!(serde_json::to_string(&Direction::Next).unwrap(), "\"next\"");
        let dir: Direction = serde_json::from_str("\"prev\"").unwrap();
        assert_eq!(dir, Direction::Prev);
    }
}
