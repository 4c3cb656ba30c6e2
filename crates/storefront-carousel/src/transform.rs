//! Slider transforms and the view they are written to.

use std::fmt;

use serde::Serialize;

/// Axis the slider moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

/// A percentage offset of the slider along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transform {
    pub axis: Axis,
    /// Offset in percent of one slide. Zero or negative.
    pub offset_percent: i64,
}

impl Transform {
    /// The offset that shows slide `index`.
    pub fn slide(axis: Axis, index: usize) -> Self {
        Self {
            axis,
            offset_percent: -(index as i64 * 100),
        }
    }

    /// The zero position.
    pub fn origin(axis: Axis) -> Self {
        Self {
            axis,
            offset_percent: 0,
        }
    }

    /// Check if this is the zero position.
    pub fn is_origin(&self) -> bool {
        self.offset_percent == 0
    }
}

/// Formats as a CSS transform function.
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function = match self.axis {
            Axis::Horizontal => "translateX",
            Axis::Vertical => "translateY",
        };
        if self.offset_percent == 0 {
            write!(f, "{}(0)", function)
        } else {
            write!(f, "{}({}%)", function, self.offset_percent)
        }
    }
}

/// Write-only sink for what the carousel wants shown.
///
/// The controller never reads anything back from the view.
pub trait CarouselView {
    /// Move the slider.
    fn translate(&mut self, transform: Transform);

    /// Mark slide `index` active and every other slide inactive.
    fn mark_active(&mut self, index: usize);
}

impl<V: CarouselView + ?Sized> CarouselView for &mut V {
    fn translate(&mut self, transform: Transform) {
        (**self).translate(transform);
    }

    fn mark_active(&mut self, index: usize) {
        (**self).mark_active(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_output() {
        assert_eq!(Transform::slide(Axis::Vertical, 3).to_string(), "translateY(-300%)");
        assert_eq!(Transform::slide(Axis::Horizontal, 1).to_string(), "translateX(-100%)");
        assert_eq!(Transform::origin(Axis::Vertical).to_string(), "translateY(0)");
        assert_eq!(Transform::slide(Axis::Vertical, 0), Transform::origin(Axis::Vertical));
    }
}
