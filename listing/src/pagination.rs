//! Page-number pagination and the page-link window shown under a listing.

use serde::{Deserialize, Serialize};

/// Default number of questions per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages needed for `len` items. A page size of 0 counts as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// The items on 1-indexed `page`.
///
/// Page 0 and pages past the end yield an empty slice; callers clamp the
/// requested page themselves.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One entry in the row of page links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageLink {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Page links to render for `current` out of `total` pages.
///
/// Up to `max_visible` pages are listed outright. Beyond that the row is the
/// first page, the current page with its direct neighbours, and the last
/// page, with ellipses standing in for the gaps.
pub fn page_window(current: usize, total: usize, max_visible: usize) -> Vec<PageLink> {
    let link = |number: usize| PageLink::Page {
        number,
        active: number == current,
    };

    if total <= max_visible {
        return (1..=total).map(link).collect();
    }

    let mut links = vec![link(1)];
    if current > 3 {
        links.push(PageLink::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);
    for number in start..=end {
        if number != 1 && number != total {
            links.push(link(number));
        }
    }

    if current.saturating_add(2) < total {
        links.push(PageLink::Ellipsis);
    }
    if total > 1 {
        links.push(link(total));
    }
    links
}
