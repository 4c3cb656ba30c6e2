//! Listing filters.
//!
//! `FilterState` is the record owned by the filter UI. `FilterKey` is the
//! validated value the feed is keyed on, and `ProductQuery` is what a data
//! source receives once the `"all"` sentinel has been stripped.

use crate::catalog::Product;
use crate::error::ShopError;
use serde::{Deserialize, Serialize};

/// Sentinel meaning "no filter" for category and size.
pub const ALL: &str = "all";

fn normalize(value: &Option<String>) -> Option<&str> {
    match value.as_deref() {
        None | Some("") | Some(ALL) => None,
        Some(v) => Some(v),
    }
}

/// Filter selections as held by the filter UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    /// Category name or `"all"`.
    #[serde(default)]
    pub category: Option<String>,
    /// Size label or `"all"`.
    #[serde(default)]
    pub size: Option<String>,
    /// Lower price bound.
    #[serde(default)]
    pub min_price: Option<f64>,
    /// Upper price bound.
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl FilterState {
    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// The category to filter by, `None` for all categories.
    pub fn category_filter(&self) -> Option<&str> {
        normalize(&self.category)
    }

    /// The size to filter by, `None` for all sizes.
    pub fn size_filter(&self) -> Option<&str> {
        normalize(&self.size)
    }
}

/// Identity of one product feed.
///
/// Two keys are equal when category, size and both price bounds are equal;
/// any difference starts a fresh feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterKey {
    category: Option<String>,
    size: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl FilterKey {
    /// Build a key from a filter record without consulting a catalog.
    pub fn from_filters(filters: &FilterState) -> Result<Self, ShopError> {
        for (name, bound) in [("min_price", filters.min_price), ("max_price", filters.max_price)] {
            if let Some(value) = bound {
                if !value.is_finite() || value < 0.0 {
                    return Err(ShopError::ValidationError(format!(
                        "{} must be a non-negative number, got {}",
                        name, value
                    )));
                }
            }
        }

        Ok(Self {
            category: filters.category_filter().map(str::to_string),
            size: filters.size_filter().map(str::to_string),
            min_price: filters.min_price,
            max_price: filters.max_price,
        })
    }

    /// Key for the unfiltered listing.
    pub fn all() -> Self {
        Self {
            category: None,
            size: None,
            min_price: None,
            max_price: None,
        }
    }

    /// Cache label in the form `products-{category}-{size}`.
    ///
    /// Price bounds are part of key equality but not of this label.
    pub fn cache_key(&self) -> String {
        format!(
            "products-{}-{}",
            self.category.as_deref().unwrap_or(ALL),
            self.size.as_deref().unwrap_or(ALL)
        )
    }

    /// The query a data source receives for this key.
    pub fn query(&self) -> ProductQuery {
        ProductQuery {
            category: self.category.clone(),
            size: self.size.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cache_key())?;
        if self.min_price.is_some() || self.max_price.is_some() {
            write!(
                f,
                "[{}..{}]",
                self.min_price.map(|p| p.to_string()).unwrap_or_default(),
                self.max_price.map(|p| p.to_string()).unwrap_or_default()
            )?;
        }
        Ok(())
    }
}

/// Normalised filters handed to a product source. `None` means unfiltered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub size: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductQuery {
    /// Check whether a product satisfies every filter in this query.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category.as_ref() != Some(category) {
                return false;
            }
        }
        if let Some(size) = &self.size {
            if product.size.as_ref() != Some(size) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_is_stripped() {
        let filters = FilterState::default().with_category("all").with_size("all");
        let query = FilterKey::from_filters(&filters).unwrap().query();
        assert_eq!(query.category, None);
        assert_eq!(query.size, None);
    }

    #[test]
    fn test_empty_string_is_unfiltered() {
        let filters = FilterState::default().with_category("");
        assert_eq!(filters.category_filter(), None);
    }

    #[test]
    fn test_all_and_missing_produce_equal_keys() {
        let explicit = FilterState::default().with_category("all").with_size("all");
        assert_eq!(
            FilterKey::from_filters(&explicit).unwrap(),
            FilterKey::from_filters(&FilterState::default()).unwrap()
        );
        assert_eq!(FilterKey::all().cache_key(), "products-all-all");
    }

    #[test]
    fn test_price_changes_key_but_not_cache_label() {
        let base = FilterState::default().with_category("wine");
        let priced = base.clone().with_price_range(Some(10.0), Some(50.0));

        let a = FilterKey::from_filters(&base).unwrap();
        let b = FilterKey::from_filters(&priced).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(b.to_string(), "products-wine-all[10..50]");
    }

    #[test]
    fn test_rejects_invalid_price() {
        let filters = FilterState::default().with_price_range(Some(f64::NAN), None);
        assert!(matches!(
            FilterKey::from_filters(&filters),
            Err(ShopError::ValidationError(_))
        ));

        let filters = FilterState::default().with_price_range(None, Some(-1.0));
        assert!(FilterKey::from_filters(&filters).is_err());
    }

    #[test]
    fn test_query_matches() {
        let query = ProductQuery {
            category: Some("wine".to_string()),
            size: Some("750ml".to_string()),
            min_price: Some(10.0),
            max_price: Some(30.0),
        };

        let hit = Product::new("1", "Merlot", 20.0)
            .with_category("wine")
            .with_size("750ml");
        assert!(query.matches(&hit));

        let wrong_size = hit.clone().with_size("1.5l");
        assert!(!query.matches(&wrong_size));

        let too_cheap = Product::new("2", "Box", 5.0)
            .with_category("wine")
            .with_size("750ml");
        assert!(!query.matches(&too_cheap));

        assert!(ProductQuery::default().matches(&Product::new("3", "Any", 1.0)));
    }
}
