//! Listing markup.
//!
//! [`ListingService`] runs the whole server-side pipeline: normalize the
//! shortcode attributes, query the host's repository, then emit the wrapper
//! whose `data-layout`/`data-count` attributes the carousel controller reads.

mod card;
pub mod excerpt;
pub mod markup;

use std::fmt::{self, Write};
use std::sync::Arc;

use newsdeck_contracts::markup::{Escaper, PaginationLinks, Translator};
use newsdeck_contracts::repository::ContentRepository;
use newsdeck_contracts::request::RequestContext;
use newsdeck_model::{
    DisplayConfig, Layout, QueryDescriptor, QueryPage, RawAttributes,
};
use tracing::{debug, warn};

use self::card::CardWriter;
use self::markup::{HtmlEscaper, IdentityTranslator, ListPagination};
use crate::error::Result;
use crate::icons::IconResolverChain;
use crate::normalize::{
    DisplayConfigExt, build_query_descriptor, resolve_page,
};
use crate::settings::ListingSettings;
use crate::shortcode::parse_shortcode_attributes;

pub use excerpt::trim_words;

/// Renders listings against a set of host collaborators.
#[derive(Clone)]
pub struct ListingService {
    repository: Arc<dyn ContentRepository>,
    icons: IconResolverChain,
    escaper: Arc<dyn Escaper>,
    pagination: Arc<dyn PaginationLinks>,
    translator: Arc<dyn Translator>,
    settings: ListingSettings,
}

impl fmt::Debug for ListingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingService")
            .field("icons", &self.icons)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ListingService {
    /// Service with the built-in escaper, list pagination, no translations
    /// and no icon sources.
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self {
            repository,
            icons: IconResolverChain::new(),
            escaper: Arc::new(HtmlEscaper),
            pagination: Arc::new(ListPagination::default()),
            translator: Arc::new(IdentityTranslator),
            settings: ListingSettings::default(),
        }
    }

    pub fn with_icons(mut self, icons: IconResolverChain) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_escaper(mut self, escaper: Arc<dyn Escaper>) -> Self {
        self.escaper = escaper;
        self
    }

    pub fn with_pagination(mut self, pagination: Arc<dyn PaginationLinks>) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_settings(mut self, settings: ListingSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ListingSettings {
        &self.settings
    }

    /// Render from raw attributes and the current request.
    pub async fn render<C>(&self, attrs: &RawAttributes, request: &C) -> Result<String>
    where
        C: RequestContext + ?Sized,
    {
        let config = DisplayConfig::from_attributes(attrs);
        let page = resolve_page(request);
        let url_template = request.page_url_template();
        self.render_config(&config, page, &url_template).await
    }

    /// Render from shortcode text such as `[news_listing layout="carousel"]`.
    pub async fn render_shortcode<C>(&self, shortcode: &str, request: &C) -> Result<String>
    where
        C: RequestContext + ?Sized,
    {
        let attrs = parse_shortcode_attributes(shortcode);
        self.render(&attrs, request).await
    }

    /// Render an already-normalized configuration at `page`.
    pub async fn render_config(
        &self,
        config: &DisplayConfig,
        page: u32,
        url_template: &str,
    ) -> Result<String> {
        let descriptor = build_query_descriptor(
            config.layout(),
            config.category_slugs(),
            config.count(),
            page,
        );
        debug!(
            layout = %config.layout(),
            limit = descriptor.limit,
            page = descriptor.page,
            categories = ?descriptor.category_filter.to_csv(),
            "querying listing content"
        );

        let results = self.repository.query(&descriptor).await.inspect_err(|err| {
            warn!(error = %err, "listing content query failed");
        })?;

        let mut out = String::new();
        self.write_listing(&mut out, config, &descriptor, &results, url_template)?;
        Ok(out)
    }

    fn t(&self, text: &'static str) -> String {
        self.translator.translate(text).into_owned()
    }

    fn write_listing(
        &self,
        out: &mut String,
        config: &DisplayConfig,
        descriptor: &QueryDescriptor,
        results: &QueryPage,
        url_template: &str,
    ) -> fmt::Result {
        let esc = self.escaper.as_ref();
        let layout = config.layout();

        write!(
            out,
            r#"<div class="nlp-wrapper nlp-layout-{}""#,
            esc.attr(layout.as_str())
        )?;
        for attr in config.data_attributes() {
            write!(out, r#" {}="{}""#, attr.name, esc.attr(&attr.value))?;
        }
        out.push('>');

        match layout {
            Layout::Carousel => {
                write!(
                    out,
                    r#"<button class="nlp-nav nlp-nav--prev" type="button" aria-label="{}">&#10094;</button>"#,
                    esc.attr(&self.t("Previous"))
                )?;
                out.push_str(r#"<div class="nlp-carousel" tabindex="0">"#);
            }
            Layout::Grid => out.push_str(r#"<div class="nlp-grid">"#),
        }

        if results.is_empty() {
            write!(
                out,
                r#"<p class="nlp-empty">{}</p>"#,
                esc.html(&self.t("No posts found."))
            )?;
        } else {
            let cards = CardWriter {
                escaper: esc,
                icons: &self.icons,
                settings: &self.settings,
            };
            for item in &results.items {
                cards.write(out, item, config)?;
            }
        }

        out.push_str("</div>");

        if layout.is_carousel() {
            write!(
                out,
                r#"<button class="nlp-nav nlp-nav--next" type="button" aria-label="{}">&#10095;</button>"#,
                esc.attr(&self.t("Next"))
            )?;
        }

        if layout == Layout::Grid && results.total_pages > 1 {
            let links = self.pagination.links(
                descriptor.page.max(1),
                results.total_pages,
                url_template,
            );
            if let Some(links) = links.filter(|l| !l.is_empty()) {
                write!(
                    out,
                    r#"<nav class="nlp-pagination" aria-label="{}">{links}</nav>"#,
                    esc.attr(&self.t("News pagination"))
                )?;
            }
        }

        out.push_str("</div>");
        Ok(())
    }
}
