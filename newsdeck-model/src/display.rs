//! The canonical, validated display configuration of one listing.

use crate::layout::Layout;

/// Item count used whenever the author's value is missing or unusable.
pub const DEFAULT_COUNT: u32 = 9;

/// Name of the wrapper attribute carrying the layout token.
pub const DATA_LAYOUT: &str = "data-layout";
/// Name of the wrapper attribute carrying the carousel step / grid page size.
pub const DATA_COUNT: &str = "data-count";

/// One `name="value"` pair of the wrapper's data-attribute contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAttribute {
    pub name: &'static str,
    pub value: String,
}

/// Normalized listing configuration.
///
/// Fields are private so new optional tuning knobs can be added without
/// touching call sites; the wrapper contract is produced only by
/// [`DisplayConfig::data_attributes`] and stays `data-layout` + `data-count`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    layout: Layout,
    category_slugs: Vec<String>,
    count: u32,
    visible_posts: u32,
    category_icon: bool,
    tags_badges: bool,
}

impl DisplayConfig {
    /// Start from already-normalized values. `visible_posts` starts equal to
    /// `count`, icons and badges start enabled. Zero counts are lifted to 1.
    pub fn new(layout: Layout, category_slugs: Vec<String>, count: u32) -> Self {
        let count = count.max(1);
        Self {
            layout,
            category_slugs,
            count,
            visible_posts: count,
            category_icon: true,
            tags_badges: true,
        }
    }

    pub fn with_visible_posts(mut self, visible_posts: u32) -> Self {
        self.visible_posts = visible_posts.max(1);
        self
    }

    pub fn with_category_icon(mut self, enabled: bool) -> Self {
        self.category_icon = enabled;
        self
    }

    pub fn with_tags_badges(mut self, enabled: bool) -> Self {
        self.tags_badges = enabled;
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn category_slugs(&self) -> &[String] {
        &self.category_slugs
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn visible_posts(&self) -> u32 {
        self.visible_posts
    }

    pub fn category_icon(&self) -> bool {
        self.category_icon
    }

    pub fn tags_badges(&self) -> bool {
        self.tags_badges
    }

    /// Value published as `data-count`: the step size for carousels, the page
    /// size for grids.
    pub fn data_count(&self) -> u32 {
        match self.layout {
            Layout::Carousel => self.visible_posts,
            Layout::Grid => self.count,
        }
    }

    pub fn data_attributes(&self) -> [DataAttribute; 2] {
        [
            DataAttribute {
                name: DATA_LAYOUT,
                value: self.layout.as_str().to_string(),
            },
            DataAttribute {
                name: DATA_COUNT,
                value: self.data_count().to_string(),
            },
        ]
    }
}
