//! Question listing for StackIt.
//!
//! The listing is a pure pipeline over a slice of questions:
//! filter (search text, tag) → stable descending sort → 1-indexed page.
//! Nothing here holds state between calls.

pub mod pagination;
pub mod query;
pub mod view;

pub use pagination::{page_window, paginate, total_pages, PageLink, DEFAULT_PAGE_SIZE};
pub use query::{ListQuery, ParseSortKeyError, SortKey};
pub use view::{filter_and_sort, matches, view, ListPage};
