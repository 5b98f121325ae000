//! Core data model definitions shared across newsdeck crates.
#![allow(missing_docs)]

pub mod attrs;
pub mod content;
pub mod display;
pub mod error;
pub mod layout;
pub mod prelude;
pub mod query;

// Intentionally curated re-exports for downstream consumers.
pub use attrs::{AttrValue, RawAttributes};
pub use content::{CategoryRef, ContentItem};
pub use display::{
    DATA_COUNT, DATA_LAYOUT, DEFAULT_COUNT, DataAttribute, DisplayConfig,
};
pub use error::{ModelError, Result as ModelResult};
pub use layout::Layout;
pub use query::{
    CategoryFilter, PostStatus, PostType, QueryDescriptor, QueryPage,
};
