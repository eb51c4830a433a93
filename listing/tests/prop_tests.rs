use proptest::prelude::*;

use stackit_listing::{filter_and_sort, view, ListQuery, SortKey};
use stackit_types::{Question, QuestionId, Timestamp, UserId};

const TAGS: [&str; 4] = ["rust", "python", "css", "sql"];

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Newest),
        Just(SortKey::Votes),
        Just(SortKey::Activity)
    ]
}

fn questions() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec((-20i64..20, 0u64..50, 0usize..TAGS.len(), any::<bool>()), 0..40).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (score, created, tag, borrow))| Question {
                    id: QuestionId::new(i as u64 + 1),
                    title: if borrow {
                        format!("Borrow question {i}")
                    } else {
                        format!("Layout question {i}")
                    },
                    description: "Some description text long enough to be valid.".into(),
                    tags: vec![TAGS[tag].to_string()],
                    author: UserId::new("asker"),
                    score,
                    view_count: 0,
                    created_at: Timestamp::new(created),
                    answers: Vec::new(),
                })
                .collect()
        },
    )
}

proptest! {
    /// Concatenating pages 1..=total_pages yields the filtered, sorted list exactly once.
    #[test]
    fn pages_partition_the_listing(
        qs in questions(),
        sort in sort_key(),
        page_size in 1usize..8,
        tag in prop::option::of(0usize..TAGS.len()),
        search_borrow in any::<bool>(),
    ) {
        let mut query = ListQuery::default().sorted_by(sort);
        if let Some(t) = tag {
            query = query.with_tag(TAGS[t]);
        }
        if search_borrow {
            query = query.with_search("borrow");
        }

        let expected: Vec<QuestionId> = filter_and_sort(&qs, &query).iter().map(|q| q.id).collect();
        let total = view(&qs, &query, page_size).total_pages;

        let mut seen = Vec::new();
        for page in 1..=total {
            let p = view(&qs, &query.clone().on_page(page), page_size);
            prop_assert!(p.items.len() <= page_size);
            prop_assert!(!p.items.is_empty());
            seen.extend(p.items.iter().map(|q| q.id));
        }
        prop_assert_eq!(seen, expected);

        let past_end = view(&qs, &query.on_page(total + 1), page_size);
        prop_assert!(past_end.items.is_empty());
    }

    /// Sorting is descending and stable.
    #[test]
    fn sort_is_descending_and_stable(qs in questions(), sort in sort_key()) {
        let query = ListQuery::default().sorted_by(sort);
        let ordered = filter_and_sort(&qs, &query);
        for pair in ordered.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (ka, kb) = match sort {
                SortKey::Newest => (a.created_at.as_secs() as i64, b.created_at.as_secs() as i64),
                SortKey::Votes => (a.score, b.score),
                SortKey::Activity => (a.answer_count() as i64, b.answer_count() as i64),
            };
            prop_assert!(ka >= kb);
            if ka == kb {
                prop_assert!(a.id < b.id);
            }
        }
    }
}
