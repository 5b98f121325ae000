//! Category icon lookup.
//!
//! Hosts can store a category's icon in more than one place (a custom-fields
//! plugin, plain term metadata). Each place is a [`CategoryIconSource`]; the
//! chain asks them in order and keeps the first non-empty answer.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use newsdeck_contracts::terms::CategoryIconSource;
use newsdeck_model::CategoryRef;

/// Ordered list of icon sources.
#[derive(Clone, Default)]
pub struct IconResolverChain {
    sources: Vec<Arc<dyn CategoryIconSource>>,
}

impl fmt::Debug for IconResolverChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.sources.iter().map(|s| s.name()))
            .finish()
    }
}

impl IconResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source; it is consulted after every source added before it.
    pub fn with_source(mut self, source: Arc<dyn CategoryIconSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn resolve(&self, category: &CategoryRef) -> Option<String> {
        self.sources.iter().find_map(|source| {
            let url = source
                .icon_url(category)
                .filter(|url| !url.trim().is_empty())?;
            tracing::trace!(
                source = source.name(),
                term_id = category.term_id,
                "resolved category icon"
            );
            Some(url)
        })
    }
}

/// Icon source backed by a fixed term-id map.
#[derive(Debug, Clone, Default)]
pub struct StaticIconSource {
    name: String,
    urls: HashMap<u64, String>,
}

impl StaticIconSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            urls: HashMap::new(),
        }
    }

    pub fn with_icon(mut self, term_id: u64, url: impl Into<String>) -> Self {
        self.urls.insert(term_id, url.into());
        self
    }
}

impl CategoryIconSource for StaticIconSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn icon_url(&self, category: &CategoryRef) -> Option<String> {
        self.urls.get(&category.term_id).cloned()
    }
}
