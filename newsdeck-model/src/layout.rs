use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// How a listing arranges its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    /// Paginated grid of cards.
    #[default]
    Grid,
    /// Single scrollable row navigated in steps.
    Carousel,
}

impl Layout {
    pub fn all() -> &'static [Layout] {
        &[Layout::Grid, Layout::Carousel]
    }

    /// Canonical token used in the `data-layout` attribute and CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::Carousel => "carousel",
        }
    }

    pub fn is_carousel(&self) -> bool {
        matches!(self, Layout::Carousel)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact parse of a canonical token. Shortcode input goes through the
/// forgiving normalizer instead, which never fails.
impl FromStr for Layout {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Layout::Grid),
            "carousel" => Ok(Layout::Carousel),
            other => Err(ModelError::UnknownLayout(other.to_string())),
        }
    }
}
