//! The listing pipeline: filter, sort, paginate.

use crate::pagination::{paginate, total_pages};
use crate::query::{ListQuery, SortKey};
use stackit_types::Question;

/// One page of a listing.
#[derive(Clone, Debug, PartialEq)]
pub struct ListPage<'a> {
    /// At most `page_size` questions, in listing order.
    pub items: Vec<&'a Question>,
    pub total_pages: usize,
    /// Number of questions that passed the filter.
    pub total_items: usize,
    pub page: usize,
}

impl ListPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Whether `question` passes the search and tag filters of `query`.
pub fn matches(question: &Question, query: &ListQuery) -> bool {
    let needle = query.search.to_lowercase();
    let matches_search = question.title.to_lowercase().contains(&needle)
        || question.description.to_lowercase().contains(&needle);
    let matches_tag = query
        .tag
        .as_deref()
        .is_none_or(|tag| question.has_tag(tag));
    matches_search && matches_tag
}

/// Filtered questions in listing order, before pagination.
///
/// The sort is stable: questions with equal keys keep their relative input
/// order.
pub fn filter_and_sort<'a>(questions: &'a [Question], query: &ListQuery) -> Vec<&'a Question> {
    let mut filtered: Vec<&Question> = questions.iter().filter(|q| matches(q, query)).collect();
    match query.sort {
        SortKey::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Votes => filtered.sort_by(|a, b| b.score.cmp(&a.score)),
        SortKey::Activity => filtered.sort_by(|a, b| b.answer_count().cmp(&a.answer_count())),
    }
    filtered
}

/// Compute the requested page of the listing.
pub fn view<'a>(questions: &'a [Question], query: &ListQuery, page_size: usize) -> ListPage<'a> {
    let ordered = filter_and_sort(questions, query);
    let items = paginate(&ordered, query.page, page_size).to_vec();
    ListPage {
        items,
        total_pages: total_pages(ordered.len(), page_size),
        total_items: ordered.len(),
        page: query.page,
    }
}
