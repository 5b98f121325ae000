//! In-memory content repository.
//!
//! Useful for previews, fixtures and tests. Answers descriptors with the same
//! semantics a database-backed host would: published posts only, newest
//! first, OR category filter, page slicing and the sticky policy.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newsdeck_contracts::repository::{ContentRepository, RepositoryError};
use newsdeck_model::{ContentItem, PostStatus, QueryDescriptor, QueryPage};
use serde::{Deserialize, Serialize};

/// A post plus the bookkeeping the repository filters and sorts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPost {
    #[serde(flatten)]
    pub item: ContentItem,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub sticky: bool,
    pub published_at: DateTime<Utc>,
}

impl StoredPost {
    pub fn published(item: ContentItem, published_at: DateTime<Utc>) -> Self {
        Self {
            item,
            status: PostStatus::Publish,
            sticky: false,
            published_at,
        }
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    posts: Vec<StoredPost>,
}

impl InMemoryRepository {
    pub fn new(posts: Vec<StoredPost>) -> Self {
        Self { posts }
    }

    /// Load posts from a JSON array of [`StoredPost`] objects.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self::new)
    }

    pub fn insert(&mut self, post: StoredPost) {
        self.posts.push(post);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[async_trait]
impl ContentRepository for InMemoryRepository {
    async fn query(
        &self,
        descriptor: &QueryDescriptor,
    ) -> Result<QueryPage, RepositoryError> {
        if descriptor.limit == 0 {
            return Err(RepositoryError::Rejected(
                "limit must be positive".to_string(),
            ));
        }

        let mut matches: Vec<&StoredPost> = self
            .posts
            .iter()
            .filter(|post| post.status == descriptor.status)
            .filter(|post| {
                descriptor
                    .category_filter
                    .matches(post.item.category_slugs())
            })
            .collect();

        matches.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        if !descriptor.exclude_sticky {
            // Stable sort keeps date order within each group.
            matches.sort_by_key(|post| !post.sticky);
        }

        let limit = descriptor.limit as usize;
        let total_pages = u32::try_from(matches.len().div_ceil(limit))
            .unwrap_or(u32::MAX);
        let items = matches
            .into_iter()
            .skip(descriptor.offset())
            .take(limit)
            .map(|post| post.item.clone())
            .collect();

        tracing::trace!(total_pages, page = descriptor.page, "in-memory query");
        Ok(QueryPage { items, total_pages })
    }
}
