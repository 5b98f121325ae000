//! Trait surfaces describing the host collaborators a listing renders against.
//!
//! The host platform owns content storage, escaping, pagination markup and
//! string translation; newsdeck only talks to them through these seams.

#![allow(missing_docs)]

pub mod markup;
pub mod repository;
pub mod request;
pub mod terms;

/// Frequently used trait combinators for rendering crates.
pub mod prelude {
    pub use super::markup::{Escaper, PaginationLinks, Translator};
    pub use super::repository::{ContentRepository, RepositoryError};
    pub use super::request::RequestContext;
    pub use super::terms::CategoryIconSource;
}
