//! Landing page carousel content.

use serde::{Deserialize, Serialize};

/// One carousel entry: a background cover paired with a featured item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slide {
    /// Featured item name, also the slide's stable key.
    pub name: String,
    /// Background cover image.
    pub cover_image: String,
    /// Where "view category" points.
    #[serde(default)]
    pub link_target: String,
    /// Featured item image.
    pub item_image: String,
    /// Featured item price.
    pub price: f64,
}

impl Slide {
    /// Create a slide.
    pub fn new(
        name: impl Into<String>,
        cover_image: impl Into<String>,
        item_image: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            cover_image: cover_image.into(),
            link_target: String::new(),
            item_image: item_image.into(),
            price,
        }
    }

    /// Set the link target.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link_target = link.into();
        self
    }

    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// The default landing slides, in authoring order.
    pub fn featured() -> Vec<Slide> {
        vec![
            Slide::new("Soda", "assets/soda.jpg", "assets/soda.jpg", 49.99),
            Slide::new("Spirits", "assets/spirits.jpg", "assets/Vodka.jpg", 49.99),
            Slide::new(
                "Wine & Champagne",
                "assets/winecat.jpg",
                "assets/A-Touch-Of-Love.jpg",
                49.99,
            ),
            Slide::new("Beer", "assets/beer.jpg", "assets/beercover.jpg", 49.99),
            Slide::new(
                "Chocolate & Gifts",
                "assets/cover.jpg",
                "assets/A-Touch-Of-Love.jpg",
                149.0,
            ),
        ]
    }
}
