//! Tunables shared by the renderer and the carousel controller.
//!
//! Loading from files and the environment lives in `newsdeck-config`; these
//! are the plain structures with their built-in defaults.

use serde::{Deserialize, Serialize};

/// Server-side markup settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListingSettings {
    /// Excerpts are cut to this many words.
    pub excerpt_words: usize,
    /// Marker appended to an excerpt that was cut. Emitted as raw HTML.
    pub excerpt_more: String,
    /// Tag badges shown per card at most.
    pub max_tag_badges: usize,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            excerpt_words: 22,
            excerpt_more: "&hellip;".to_string(),
            max_tag_badges: 3,
        }
    }
}

/// Client-side carousel fallbacks.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Item width used when the track has no rendered item to measure.
    pub fallback_item_width: f64,
    /// Gap used when the track's computed gap cannot be parsed.
    pub fallback_gap: f64,
    /// Length of the frame-stepped fallback animation.
    pub animation_duration_ms: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            fallback_item_width: 320.0,
            fallback_gap: 16.0,
            animation_duration_ms: 300.0,
        }
    }
}

/// Every newsdeck tunable.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub listing: ListingSettings,
    pub carousel: CarouselSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let settings: Settings =
            serde_json::from_str(r#"{"carousel":{"fallback_gap":24}}"#)
                .expect("settings json");

        assert_eq!(settings.carousel.fallback_gap, 24.0);
        assert_eq!(settings.carousel.fallback_item_width, 320.0);
        assert_eq!(settings.listing, ListingSettings::default());
    }
}
