use std::borrow::Cow;

/// HTML escaping provided by the host's templating layer.
pub trait Escaper: Send + Sync {
    /// Escape for use as element text.
    fn html(&self, text: &str) -> String;

    /// Escape for use inside a double-quoted attribute.
    fn attr(&self, text: &str) -> String;

    /// Clean a URL for use in `href`/`src`. Returns an empty string when the
    /// URL is not acceptable.
    fn url(&self, raw: &str) -> String;
}

/// Page-link generator for paginated grids.
pub trait PaginationLinks: Send + Sync {
    /// Render links for `total` pages with `current` selected. `url_template`
    /// contains `%#%` where the page number goes. `None` means "nothing to show".
    fn links(&self, current: u32, total: u32, url_template: &str)
    -> Option<String>;
}

/// Translation lookup for the few user-visible strings.
pub trait Translator: Send + Sync {
    /// `text` in the site language, or `text` itself.
    fn translate<'a>(&self, text: &'a str) -> Cow<'a, str>;
}
