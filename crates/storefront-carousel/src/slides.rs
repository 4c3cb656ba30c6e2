//! Slides in display order.

use std::ops::Index;

use storefront_core::config::StorefrontConfig;
use storefront_core::landing::Slide;

/// The carousel's slides, shown in reverse authoring order.
///
/// Reversal happens on construction; the authored list itself is untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    /// Build from slides in authoring order.
    pub fn new(authored: &[Slide]) -> Self {
        Self {
            slides: authored.iter().rev().cloned().collect(),
        }
    }

    /// The default landing slides.
    pub fn featured() -> Self {
        Self::new(&Slide::featured())
    }

    /// Slides from configuration.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(&config.slides)
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Check if there are no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at a display position.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Slides in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }
}

impl Index<usize> for SlideSet {
    type Output = Slide;

    fn index(&self, index: usize) -> &Slide {
        &self.slides[index]
    }
}

impl<'a> IntoIterator for &'a SlideSet {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_is_reversed() {
        let authored = Slide::featured();
        let set = SlideSet::new(&authored);

        let names: Vec<&str> = set.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Chocolate & Gifts", "Beer", "Wine & Champagne", "Spirits", "Soda"]
        );
        // Source list keeps its order.
        assert_eq!(authored[0].name, "Soda");
    }

    #[test]
    fn test_from_config() {
        let config = StorefrontConfig::default();
        let set = SlideSet::from_config(&config);
        assert_eq!(set.len(), 5);
        assert_eq!(set[0].name, "Chocolate & Gifts");
    }
}
