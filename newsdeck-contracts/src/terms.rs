use newsdeck_model::content::CategoryRef;

/// One way of finding an icon image for a category term.
///
/// Hosts usually have two: a field provided by a custom-fields plugin, and the
/// generic term metadata store. Both are tried in order by the resolver chain.
pub trait CategoryIconSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Raw icon URL, or `None` when this source has nothing for the term.
    fn icon_url(&self, category: &CategoryRef) -> Option<String>;
}
