//! Attribute-string parsing for `[news_listing ...]` shortcodes.

use newsdeck_model::RawAttributes;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tag name the listing is registered under.
pub const SHORTCODE_TAG: &str = "news_listing";

static ATTRIBUTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"([\w-]+)\s*=\s*"([^"]*)"|([\w-]+)\s*=\s*'([^']*)'|([\w-]+)\s*=\s*([^\s'"\]]+)"#,
    )
    .expect("shortcode attribute regex should compile")
});

/// Strip an enclosing `[tag ...]` (or `[tag .../]`) if present and return the
/// inner attribute text.
fn attribute_text(input: &str) -> &str {
    let trimmed = input.trim();
    let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return trimmed;
    };
    let inner = inner.strip_suffix('/').unwrap_or(inner);
    match inner.split_once(char::is_whitespace) {
        Some((_tag, attrs)) => attrs,
        None => "",
    }
}

/// Parse `key="value"`, `key='value'` and `key=value` pairs. Keys are
/// lowercased, positional words are ignored and a repeated key keeps its
/// last value. Accepts either the bare attribute text or the whole tag.
pub fn parse_shortcode_attributes(input: &str) -> RawAttributes {
    let mut attrs = RawAttributes::new();
    for caps in ATTRIBUTE_PATTERN.captures_iter(attribute_text(input)) {
        let pair = [(1, 2), (3, 4), (5, 6)].into_iter().find_map(|(k, v)| {
            Some((caps.get(k)?.as_str(), caps.get(v)?.as_str()))
        });
        if let Some((key, value)) = pair {
            attrs.insert(key, value);
        }
    }
    tracing::trace!(count = attrs.len(), "parsed shortcode attributes");
    attrs
}
