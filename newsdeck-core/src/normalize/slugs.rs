use deunicode::deunicode;
use newsdeck_model::AttrValue;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::strip_tags;

static NON_SLUG_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-z0-9]+").expect("slug separator regex should compile")
});

/// Reduce free text to a slug: markup stripped, transliterated to ASCII
/// (`Café` is `cafe`, `Straße` is `strasse`), lowercased, every run of
/// characters outside `[a-z0-9]` collapsed to one hyphen, hyphens trimmed
/// from both ends. May return an empty string.
pub fn slugify(raw: &str) -> String {
    let text = strip_tags(raw);
    let lowered = deunicode(text.trim()).to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Split a comma-separated category list into slugs, keeping input order and
/// duplicates and dropping parts that slugify to nothing. Non-string or
/// empty input yields an empty list.
pub fn parse_category_slugs(raw: &AttrValue) -> Vec<String> {
    let Some(list) = raw.as_str().filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    list.split(',')
        .map(slugify)
        .filter(|slug| !slug.is_empty())
        .collect()
}
