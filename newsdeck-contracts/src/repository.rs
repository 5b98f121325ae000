use async_trait::async_trait;
use newsdeck_model::query::{QueryDescriptor, QueryPage};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not be reached.
    #[error("Content store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the descriptor.
    #[error("Query rejected: {0}")]
    Rejected(String),
}

/// Content store that answers listing queries.
///
/// Implementations must honor every field of the descriptor: post type and
/// status, the OR category filter, `limit`/`page` pagination and the sticky
/// policy. `total_pages` counts pages of `limit` items across all matches.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn query(
        &self,
        descriptor: &QueryDescriptor,
    ) -> Result<QueryPage, RepositoryError>;
}
