//! Default implementations of the markup collaborators, for hosts that do
//! not bring their own.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use newsdeck_contracts::markup::{Escaper, PaginationLinks, Translator};
use url::Url;

/// Entity-escapes the five HTML-significant characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl HtmlEscaper {
    fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#039;"),
                other => out.push(other),
            }
        }
        out
    }

    /// Root-relative paths, query/fragment-only references and absolute
    /// http(s) URLs are accepted.
    fn is_acceptable_url(raw: &str) -> bool {
        if (raw.starts_with('/') && !raw.starts_with("//"))
            || raw.starts_with('?')
            || raw.starts_with('#')
        {
            return true;
        }
        Url::parse(raw)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false)
    }
}

impl Escaper for HtmlEscaper {
    fn html(&self, text: &str) -> String {
        Self::escape(text)
    }

    fn attr(&self, text: &str) -> String {
        Self::escape(text)
    }

    fn url(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if !Self::is_acceptable_url(trimmed) {
            if !trimmed.is_empty() {
                tracing::debug!(url = trimmed, "dropping unacceptable url");
            }
            return String::new();
        }
        Self::escape(trimmed)
    }
}

/// Returns every string untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// `<ul>` list of page links with previous/next arrows.
#[derive(Debug, Clone)]
pub struct ListPagination {
    pub prev_text: String,
    pub next_text: String,
}

impl Default for ListPagination {
    fn default() -> Self {
        Self {
            prev_text: "&#10094;".to_string(),
            next_text: "&#10095;".to_string(),
        }
    }
}

impl ListPagination {
    fn href(url_template: &str, page: u32) -> String {
        HtmlEscaper.url(&url_template.replace("%#%", &page.to_string()))
    }

    fn write_links(
        &self,
        out: &mut String,
        current: u32,
        total: u32,
        url_template: &str,
    ) -> fmt::Result {
        out.push_str("<ul class=\"page-numbers\">");
        if current > 1 {
            write!(
                out,
                "<li><a class=\"prev page-numbers\" href=\"{}\">{}</a></li>",
                Self::href(url_template, current - 1),
                self.prev_text
            )?;
        }
        for page in 1..=total {
            if page == current {
                write!(
                    out,
                    "<li><span aria-current=\"page\" class=\"page-numbers current\">{page}</span></li>"
                )?;
            } else {
                write!(
                    out,
                    "<li><a class=\"page-numbers\" href=\"{}\">{page}</a></li>",
                    Self::href(url_template, page)
                )?;
            }
        }
        if current < total {
            write!(
                out,
                "<li><a class=\"next page-numbers\" href=\"{}\">{}</a></li>",
                Self::href(url_template, current + 1),
                self.next_text
            )?;
        }
        out.push_str("</ul>");
        Ok(())
    }
}

impl PaginationLinks for ListPagination {
    fn links(
        &self,
        current: u32,
        total: u32,
        url_template: &str,
    ) -> Option<String> {
        if total <= 1 {
            return None;
        }
        let mut out = String::new();
        self.write_links(&mut out, current.clamp(1, total), total, url_template)
            .ok()?;
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_significant_characters() {
        assert_eq!(
            HtmlEscaper.html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn url_accepts_http_and_relative_references_only() {
        assert_eq!(
            HtmlEscaper.url(" https://cdn.example.com/icon.svg "),
            "https://cdn.example.com/icon.svg"
        );
        assert_eq!(HtmlEscaper.url("/uploads/icon.png"), "/uploads/icon.png");
        assert_eq!(HtmlEscaper.url("?paged=2"), "?paged=2");
        assert_eq!(HtmlEscaper.url("javascript:alert(1)"), "");
        assert_eq!(HtmlEscaper.url("//evil.example"), "");
        assert_eq!(HtmlEscaper.url("icon.png"), "");
        assert_eq!(HtmlEscaper.url(""), "");
    }

    #[test]
    fn url_escapes_query_separators() {
        assert_eq!(HtmlEscaper.url("/news?a=1&b=2"), "/news?a=1&amp;b=2");
    }

    #[test]
    fn single_page_has_no_links() {
        assert_eq!(ListPagination::default().links(1, 1, "/news/?paged=%#%"), None);
    }

    #[test]
    fn links_mark_the_current_page_and_arrows() {
        let html = ListPagination::default()
            .links(2, 3, "/news/?paged=%#%")
            .expect("links for three pages");

        assert!(html.contains(
            "<a class=\"prev page-numbers\" href=\"/news/?paged=1\">&#10094;</a>"
        ));
        assert!(html.contains(
            "<span aria-current=\"page\" class=\"page-numbers current\">2</span>"
        ));
        assert!(html.contains(
            "<a class=\"next page-numbers\" href=\"/news/?paged=3\">&#10095;</a>"
        ));
    }

    #[test]
    fn edge_pages_drop_the_arrow_that_leads_nowhere() {
        let pagination = ListPagination::default();

        let first = pagination.links(1, 3, "?paged=%#%").expect("first page");
        assert!(first.starts_with("<ul class=\"page-numbers\">"));
        assert!(first.ends_with("</ul>"));
        assert!(!first.contains("prev page-numbers"));
        assert!(first.contains("<a class=\"next page-numbers\" href=\"?paged=2\">"));

        let last = pagination.links(9, 3, "?paged=%#%").expect("clamped page");
        assert!(last.contains(
            "<span aria-current=\"page\" class=\"page-numbers current\">3</span>"
        ));
        assert!(!last.contains("next page-numbers"));
        assert_eq!(last.matches("<li>").count(), 4);
    }
}
