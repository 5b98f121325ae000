//! Commonly used model types.

pub use crate::attrs::{AttrValue, RawAttributes};
pub use crate::content::{CategoryRef, ContentItem};
pub use crate::display::{DEFAULT_COUNT, DataAttribute, DisplayConfig};
pub use crate::layout::Layout;
pub use crate::query::{
    CategoryFilter, PostStatus, PostType, QueryDescriptor, QueryPage,
};
