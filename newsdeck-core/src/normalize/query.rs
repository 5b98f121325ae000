use newsdeck_contracts::request::RequestContext;
use newsdeck_model::{
    CategoryFilter, Layout, PostStatus, PostType, QueryDescriptor,
};

use crate::text::leading_integer;

/// A query variable counts as set when it is non-empty and not `"0"`.
fn set_query_var<C>(request: &C, name: &str) -> Option<String>
where
    C: RequestContext + ?Sized,
{
    request
        .query_var(name)
        .filter(|value| !value.is_empty() && value != "0")
}

/// Current listing page from the request's `paged` variable, falling back to
/// `page`. Unparseable or non-positive values resolve to 1.
pub fn resolve_page<C>(request: &C) -> u32
where
    C: RequestContext + ?Sized,
{
    let raw = set_query_var(request, "paged")
        .or_else(|| set_query_var(request, "page"));

    raw.as_deref()
        .and_then(leading_integer)
        .and_then(|page| u32::try_from(page).ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Assemble the repository query for already-normalized inputs. Carousels
/// always read page 1; they scroll within one bounded fetch.
pub fn build_query_descriptor(
    layout: Layout,
    category_slugs: &[String],
    count: u32,
    page: u32,
) -> QueryDescriptor {
    QueryDescriptor {
        post_type: PostType::Post,
        status: PostStatus::Publish,
        limit: count,
        category_filter: CategoryFilter::from_slugs(category_slugs),
        page: match layout {
            Layout::Grid => page,
            Layout::Carousel => 1,
        },
        exclude_sticky: true,
    }
}
