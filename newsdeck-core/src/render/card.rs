//! Markup for a single post card.

use std::fmt::{self, Write};

use newsdeck_contracts::markup::Escaper;
use newsdeck_model::{ContentItem, DisplayConfig};

use super::excerpt::trim_words;
use crate::icons::IconResolverChain;
use crate::settings::ListingSettings;

const THUMB_PLACEHOLDER: &str =
    r#"<span class="nlp-thumb__placeholder" aria-hidden="true"></span>"#;

pub(crate) struct CardWriter<'a> {
    pub escaper: &'a dyn Escaper,
    pub icons: &'a IconResolverChain,
    pub settings: &'a ListingSettings,
}

impl CardWriter<'_> {
    pub fn write(
        &self,
        out: &mut String,
        item: &ContentItem,
        config: &DisplayConfig,
    ) -> fmt::Result {
        let href = self.escaper.url(&item.permalink);

        out.push_str(r#"<article class="nlp-item">"#);

        write!(out, r#"<a class="nlp-thumb" href="{href}">"#)?;
        match item.thumbnail_html.as_deref() {
            Some(thumb) if item.has_thumbnail() => out.push_str(thumb),
            _ => out.push_str(THUMB_PLACEHOLDER),
        }
        if config.tags_badges() {
            self.write_badges(out, item)?;
        }
        out.push_str("</a>");

        write!(
            out,
            r#"<h3 class="nlp-title"><a href="{href}">{}</a></h3>"#,
            self.escaper.html(&item.title)
        )?;

        let excerpt = trim_words(
            &item.excerpt,
            self.settings.excerpt_words,
            &self.settings.excerpt_more,
        );
        write!(out, r#"<div class="nlp-excerpt">{excerpt}</div>"#)?;

        if config.category_icon() {
            self.write_icons(out, item)?;
        }

        out.push_str("</article>");
        Ok(())
    }

    fn write_badges(&self, out: &mut String, item: &ContentItem) -> fmt::Result {
        if item.tags.is_empty() {
            return Ok(());
        }
        out.push_str(r#"<div class="nlp-badges" aria-hidden="true">"#);
        for tag in item.tags.iter().take(self.settings.max_tag_badges) {
            write!(
                out,
                r#"<span class="nlp-badge">{}</span>"#,
                self.escaper.html(tag)
            )?;
        }
        out.push_str("</div>");
        Ok(())
    }

    fn write_icons(&self, out: &mut String, item: &ContentItem) -> fmt::Result {
        if item.categories.is_empty() {
            return Ok(());
        }
        out.push_str(r#"<div class="nlp-icons">"#);
        for category in &item.categories {
            let Some(raw) = self.icons.resolve(category) else {
                continue;
            };
            let src = self.escaper.url(&raw);
            if src.is_empty() {
                continue;
            }
            write!(
                out,
                r#"<img class="nlp-icon" src="{src}" alt="{}" />"#,
                self.escaper.attr(&category.name)
            )?;
        }
        out.push_str("</div>");
        Ok(())
    }
}
