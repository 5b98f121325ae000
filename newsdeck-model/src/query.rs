//! Content query descriptor handed to the host's content repository.

use crate::content::ContentItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PostType {
    #[default]
    Post,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Post => "post",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PostStatus {
    #[default]
    Publish,
    Draft,
    Private,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Publish => "publish",
            PostStatus::Draft => "draft",
            PostStatus::Private => "private",
        }
    }
}

/// Category restriction with OR semantics across slugs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CategoryFilter {
    #[default]
    Any,
    AnyOf(Vec<String>),
}

impl CategoryFilter {
    /// An empty slug list means "no filter".
    pub fn from_slugs(slugs: &[String]) -> Self {
        if slugs.is_empty() {
            CategoryFilter::Any
        } else {
            CategoryFilter::AnyOf(slugs.to_vec())
        }
    }

    pub fn matches<'a>(
        &self,
        mut item_slugs: impl Iterator<Item = &'a str>,
    ) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::AnyOf(wanted) => {
                item_slugs.any(|slug| wanted.iter().any(|w| w == slug))
            }
        }
    }

    /// Comma-joined slug list, the usual wire form for category OR queries.
    pub fn to_csv(&self) -> Option<String> {
        match self {
            CategoryFilter::Any => None,
            CategoryFilter::AnyOf(slugs) => Some(slugs.join(",")),
        }
    }
}

/// Fully assembled request for one page of listing content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryDescriptor {
    pub post_type: PostType,
    pub status: PostStatus,
    pub limit: u32,
    pub category_filter: CategoryFilter,
    /// 1-based page number.
    pub page: u32,
    pub exclude_sticky: bool,
}

impl QueryDescriptor {
    /// Zero-based index of the first item on `page`.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.limit as usize
    }
}

/// One page of repository results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPage {
    pub items: Vec<ContentItem>,
    pub total_pages: u32,
}

impl QueryPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slug_list_means_no_filter() {
        assert_eq!(CategoryFilter::from_slugs(&[]), CategoryFilter::Any);
        assert_eq!(CategoryFilter::Any.to_csv(), None);
    }

    #[test]
    fn any_of_matches_on_a_single_shared_slug() {
        let filter = CategoryFilter::from_slugs(&[
            "business".to_string(),
            "design".to_string(),
        ]);
        assert!(filter.matches(["news", "design"].into_iter()));
        assert!(!filter.matches(["news"].into_iter()));
        assert_eq!(filter.to_csv().as_deref(), Some("business,design"));
    }

    #[test]
    fn offset_is_page_relative() {
        let descriptor = QueryDescriptor {
            post_type: PostType::Post,
            status: PostStatus::Publish,
            limit: 9,
            category_filter: CategoryFilter::Any,
            page: 3,
            exclude_sticky: true,
        };
        assert_eq!(descriptor.offset(), 18);
    }
}
