use newsdeck_model::{AttrValue, Layout};

/// `"carousel"` (any case, surrounding whitespace ignored) selects the
/// carousel; everything else, including non-strings, is a grid.
pub fn normalize_layout(raw: &AttrValue) -> Layout {
    match raw.as_str().map(|s| s.trim().to_lowercase()) {
        Some(token) if token == Layout::Carousel.as_str() => Layout::Carousel,
        _ => Layout::Grid,
    }
}
