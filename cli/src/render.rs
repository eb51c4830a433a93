//! Plain-text rendering of listings and question pages.

use stackit_listing::{ListPage, PageLink};
use stackit_types::{Question, Timestamp};
use stackit_utils::format_time_ago;
use std::fmt::Write;

pub fn listing(page: &ListPage<'_>, links: &[PageLink], now: Timestamp) -> String {
    let mut out = String::new();
    if page.items.is_empty() {
        let _ = writeln!(out, "No questions found.");
    }
    for q in &page.items {
        let accepted = if q.has_accepted_answer() { " ✓" } else { "" };
        let _ = writeln!(
            out,
            "{:>4} votes {:>3} answers{accepted} {:>5} views  {} {}",
            q.score,
            q.answer_count(),
            q.view_count,
            q.id,
            q.title
        );
        let _ = writeln!(
            out,
            "     [{}] asked by {} {}",
            q.tags.join(", "),
            q.author,
            format_time_ago(q.created_at, now)
        );
    }
    if !links.is_empty() {
        let row: Vec<String> = links
            .iter()
            .map(|l| match l {
                PageLink::Page { number, active: true } => format!("[{number}]"),
                PageLink::Page { number, .. } => number.to_string(),
                PageLink::Ellipsis => "…".to_string(),
            })
            .collect();
        let _ = writeln!(out, "\n{} ({} questions)", row.join(" "), page.total_items);
    }
    out
}

pub fn question(q: &Question, now: Timestamp) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", q.id, q.title);
    let _ = writeln!(
        out,
        "asked by {} {} · {} votes · {} views · [{}]\n",
        q.author,
        format_time_ago(q.created_at, now),
        q.score,
        q.view_count,
        q.tags.join(", ")
    );
    let _ = writeln!(out, "{}\n", q.description);
    let _ = writeln!(out, "{} answers", q.answer_count());
    for a in &q.answers {
        let mark = if a.is_accepted { "✓ accepted" } else { "" };
        let _ = writeln!(
            out,
            "\n{:>4} votes  {} by {} {} {mark}",
            a.score,
            a.id,
            a.author,
            format_time_ago(a.created_at, now)
        );
        let _ = writeln!(out, "     {}", a.content);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use stackit_listing::{page_window, view, ListQuery};

    #[test]
    fn listing_shows_page_links_and_markers() {
        let now = Timestamp::new(1_000_000);
        let qs = demo::questions(now);
        let page = view(&qs, &ListQuery::default(), 5);
        let links = page_window(page.page, page.total_pages, 5);
        let text = listing(&page, &links, now);
        assert!(text.contains("[1] 2 3"));
        assert!(text.contains("just now") || text.contains("h ago"));
    }

    #[test]
    fn empty_listing_says_so() {
        let qs = demo::questions(Timestamp::new(0));
        let page = view(&qs, &ListQuery::default().with_search("no such words"), 5);
        assert!(listing(&page, &[], Timestamp::new(0)).contains("No questions found."));
    }

    #[test]
    fn question_page_marks_accepted_answer() {
        let now = Timestamp::new(1_000_000);
        let qs = demo::questions(now);
        let text = question(&qs[0], now);
        assert!(text.contains("✓ accepted"));
        assert!(text.contains("2h ago"));
    }
}
