use newsdeck_contracts::repository::RepositoryError;
use thiserror::Error;

/// Failures while producing listing markup.
///
/// Bad shortcode input is never an error; it resolves to defaults. Only the
/// collaborators that do I/O can fail a render.
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Content query failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Markup error: {0}")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, ListingError>;
