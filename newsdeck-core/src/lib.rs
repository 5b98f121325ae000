//! # newsdeck core
//!
//! Turns loosely typed listing shortcodes into a validated [`DisplayConfig`]
//! and a [`QueryDescriptor`], renders the resulting posts as a grid or a
//! carousel, and drives the carousel's step navigation on the client.
//!
//! ## Architecture
//!
//! - [`normalize`]: total, side-effect free attribute normalizers
//! - [`shortcode`]: attribute-string parsing for `[news_listing ...]` tags
//! - [`icons`]: category icon lookup across ordered sources
//! - [`render`]: listing markup against host collaborators
//! - [`repository`]: in-memory content repository
//! - [`carousel`]: scroll-step controller behind host DOM traits
//!
//! The server half and the carousel never call each other; they share only
//! the wrapper's `data-layout` and `data-count` attributes.
//!
//! ## Feature Flags
//!
//! - `web`: binds the carousel controller to a browser DOM via `web-sys`
//!
//! [`DisplayConfig`]: newsdeck_model::DisplayConfig
//! [`QueryDescriptor`]: newsdeck_model::QueryDescriptor

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod carousel;
pub mod error;
pub mod icons;
pub mod normalize;
pub mod render;
pub mod repository;
pub mod settings;
pub mod shortcode;

mod text;

pub use error::{ListingError, Result};
pub use normalize::{
    DisplayConfigExt, build_query_descriptor, normalize_attributes,
    normalize_boolean, normalize_count, normalize_layout,
    normalize_visible_posts, parse_category_slugs, resolve_page, slugify,
};
pub use render::ListingService;
pub use settings::{CarouselSettings, ListingSettings, Settings};
pub use shortcode::parse_shortcode_attributes;

pub use newsdeck_contracts as contracts;
pub use newsdeck_model as model;
