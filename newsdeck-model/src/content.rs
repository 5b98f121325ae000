//! Content items as returned by the host's repository.

/// A category attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryRef {
    pub term_id: u64,
    pub name: String,
    pub slug: String,
}

impl CategoryRef {
    pub fn new(term_id: u64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            term_id,
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// One renderable post.
///
/// `excerpt` and `thumbnail_html` are already HTML-safe fragments produced
/// by the host; `title` and tag names are plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentItem {
    pub id: u64,
    pub permalink: String,
    pub title: String,
    pub excerpt: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thumbnail_html: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<CategoryRef>,
}

impl ContentItem {
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail_html.as_deref().is_some_and(|html| !html.is_empty())
    }

    pub fn category_slugs(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.slug.as_str())
    }
}
