//! Storefront configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::landing::Slide;

/// Top-level configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Product listing feed.
    #[serde(default)]
    pub feed: FeedSettings,

    /// Landing carousel.
    #[serde(default)]
    pub carousel: CarouselSettings,

    /// Landing slides in authoring order.
    #[serde(default = "Slide::featured")]
    pub slides: Vec<Slide>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            feed: FeedSettings::default(),
            carousel: CarouselSettings::default(),
            slides: Slide::featured(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        debug!(path = %path.display(), "loaded storefront config");
        Ok(config)
    }

    /// Parse and validate TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.page_size == 0 {
            return Err(ConfigError::Invalid("feed.page_size must be at least 1".to_string()));
        }
        if self.slides.is_empty() {
            return Err(ConfigError::Invalid("at least one slide is required".to_string()));
        }
        Ok(())
    }
}

/// Listing feed settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedSettings {
    /// Products per page; also the step used to decide whether more pages exist.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// How far before the loading sentinel enters the viewport it counts as near.
    #[serde(default = "default_proximity_margin")]
    pub proximity_margin_px: u32,

    /// Per-page fetch timeout. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_ms: Option<u64>,
}

fn default_page_size() -> usize {
    20
}

fn default_proximity_margin() -> u32 {
    100
}

impl FeedSettings {
    /// Fetch timeout as a duration.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            proximity_margin_px: default_proximity_margin(),
            fetch_timeout_ms: None,
        }
    }
}

/// Landing carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselSettings {
    /// Viewport width from which wheel input drives the carousel.
    #[serde(default = "default_breakpoint")]
    pub breakpoint_px: u32,

    /// Duration of one slide transition.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Refuse every navigation while a transition runs, not only wheel input.
    #[serde(default)]
    pub lock_all_inputs: bool,
}

fn default_breakpoint() -> u32 {
    1024
}

fn default_transition_ms() -> u64 {
    800
}

impl CarouselSettings {
    /// Transition duration.
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            breakpoint_px: default_breakpoint(),
            transition_ms: default_transition_ms(),
            lock_all_inputs: false,
        }
    }
}
