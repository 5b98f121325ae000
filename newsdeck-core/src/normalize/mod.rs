//! Attribute normalization.
//!
//! Every function here is total: malformed input resolves to a documented
//! default and nothing returns an error, so a typo in a shortcode can never
//! break page rendering.

mod flags;
mod layout;
mod query;
mod slugs;

pub use flags::{normalize_boolean, normalize_count, normalize_visible_posts};
pub use layout::normalize_layout;
pub use query::{build_query_descriptor, resolve_page};
pub use slugs::{parse_category_slugs, slugify};

use newsdeck_model::{AttrValue, DisplayConfig, RawAttributes};

/// Values assumed for attributes the author left out. Keys not listed here
/// are ignored.
pub const SHORTCODE_DEFAULTS: &[(&str, &str)] = &[
    ("layout", "grid"),
    ("category", ""),
    ("count", "9"),
    ("visible_posts", ""),
    ("category_icon", "true"),
    ("tags_badges", "true"),
];

fn attribute_or_default(attrs: &RawAttributes, key: &str) -> AttrValue {
    if let Some(value) = attrs.get(key) {
        return value.clone();
    }
    SHORTCODE_DEFAULTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, default)| AttrValue::from(*default))
        .unwrap_or_default()
}

/// Build the canonical configuration from raw shortcode attributes.
pub fn normalize_attributes(attrs: &RawAttributes) -> DisplayConfig {
    for (key, _) in attrs.iter() {
        if !SHORTCODE_DEFAULTS.iter().any(|(name, _)| *name == key) {
            tracing::trace!(key, "ignoring unknown listing attribute");
        }
    }

    let layout = normalize_layout(&attribute_or_default(attrs, "layout"));
    let slugs = parse_category_slugs(&attribute_or_default(attrs, "category"));
    let count = normalize_count(&attribute_or_default(attrs, "count"));
    let visible_posts = normalize_visible_posts(
        &attribute_or_default(attrs, "visible_posts"),
        count,
    );
    let category_icon =
        normalize_boolean(&attribute_or_default(attrs, "category_icon"));
    let tags_badges =
        normalize_boolean(&attribute_or_default(attrs, "tags_badges"));

    DisplayConfig::new(layout, slugs, count)
        .with_visible_posts(visible_posts)
        .with_category_icon(category_icon)
        .with_tags_badges(tags_badges)
}

/// Construction of [`DisplayConfig`] from shortcode input.
pub trait DisplayConfigExt {
    fn from_attributes(attrs: &RawAttributes) -> Self;
}

impl DisplayConfigExt for DisplayConfig {
    fn from_attributes(attrs: &RawAttributes) -> Self {
        normalize_attributes(attrs)
    }
}
