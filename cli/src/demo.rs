//! Built-in demo board used when no data file is given.

use stackit_types::{Answer, AnswerId, Question, QuestionId, Timestamp, UserId};

const HOUR: u64 = 60 * 60;

struct Seed {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    author: &'static str,
    score: i64,
    views: u64,
    hours_ago: u64,
    answers: &'static [(&'static str, &'static str, i64)],
    accepted: Option<u64>,
}

const SEEDS: &[Seed] = &[
    Seed {
        title: "Why does the borrow checker reject this loop?",
        description: "I push into a Vec while holding a reference to one of its elements and the compiler refuses.",
        tags: &["rust", "borrow-checker"],
        author: "ferris_fan",
        score: 14,
        views: 210,
        hours_ago: 2,
        answers: &[
            ("ownership_nerd", "Pushing may reallocate, which would leave your reference dangling. Copy the value out first.", 9),
            ("iter_wizard", "Collect the indices first, then mutate in a second pass.", 3),
        ],
        accepted: Some(1),
    },
    Seed {
        title: "Merging two DataFrames on a shared column",
        description: "I have two pandas DataFrames and want to join them on a customer id column without duplicating rows.",
        tags: &["python", "pandas", "dataframe"],
        author: "data_dana",
        score: 12,
        views: 142,
        hours_ago: 4,
        answers: &[("pd_pro", "Use df1.merge(df2, on=\"customer_id\", how=\"inner\").", 5)],
        accepted: None,
    },
    Seed {
        title: "CSS Grid or Flexbox for a dashboard layout?",
        description: "Both seem able to build my card layout. When should I pick one over the other for a dashboard?",
        tags: &["css", "grid", "flexbox"],
        author: "layout_lee",
        score: 24,
        views: 256,
        hours_ago: 24,
        answers: &[
            ("css_wizard", "Grid for two-dimensional page structure, Flexbox for one-dimensional rows of items.", 11),
            ("frontend_fay", "You can nest them: Grid for the page, Flexbox inside each card.", 4),
            ("pixel_pat", "Grid's auto-fill with minmax handles responsive cards without media queries.", 2),
        ],
        accepted: Some(1),
    },
    Seed {
        title: "Where should a SPA store its JWT?",
        description: "localStorage is easy but I keep reading it is unsafe. What do people actually do for token storage?",
        tags: &["jwt", "authentication", "security"],
        author: "john_dev",
        score: 15,
        views: 178,
        hours_ago: 12,
        answers: &[
            ("security_guru", "An httpOnly, Secure, SameSite cookie keeps the token out of reach of injected scripts.", 8),
            ("react_expert", "Keep the access token in memory and refresh it through a cookie-backed endpoint.", 6),
        ],
        accepted: None,
    },
    Seed {
        title: "Async closures capturing a mutable reference",
        description: "Calling an async block inside a loop that borrows a HashMap mutably fails with a lifetime error.",
        tags: &["rust", "async"],
        author: "tokio_tim",
        score: 9,
        views: 95,
        hours_ago: 6,
        answers: &[],
        accepted: None,
    },
    Seed {
        title: "Docker containers on one network cannot reach each other",
        description: "Two containers on a user-defined bridge network time out when connecting by container name.",
        tags: &["docker", "networking"],
        author: "ops_olga",
        score: 7,
        views: 89,
        hours_ago: 8,
        answers: &[("container_carl", "Check that the service listens on 0.0.0.0, not 127.0.0.1, inside the container.", 4)],
        accepted: Some(1),
    },
    Seed {
        title: "Speeding up a slow aggregation pipeline",
        description: "A MongoDB aggregation over a few million documents takes seconds. Which stages should be indexed?",
        tags: &["mongodb", "performance", "database"],
        author: "db_admin",
        score: 11,
        views: 134,
        hours_ago: 18,
        answers: &[
            ("index_ian", "Put $match and $sort first so they can use an index; later stages cannot.", 6),
            ("query_quinn", "Run explain() and look for COLLSCAN.", 1),
        ],
        accepted: None,
    },
    Seed {
        title: "Choosing between two frontend frameworks for a new app",
        description: "Starting a mid-sized internal tool and cannot decide which component framework to standardise on.",
        tags: &["frontend", "comparison"],
        author: "frontend_fay",
        score: 22,
        views: 287,
        hours_ago: 36,
        answers: &[
            ("react_expert", "Pick what your team already knows; the ecosystems are comparable for internal tools.", 7),
            ("vue_val", "Single-file components make onboarding quick for backend developers.", 3),
            ("svelte_sam", "Consider bundle size if the tool runs on low-end machines.", 1),
            ("arch_ari", "Prototype one screen in each and measure.", 0),
        ],
        accepted: Some(1),
    },
    Seed {
        title: "Reducing cold starts for serverless functions",
        description: "My functions take several seconds on first invocation. What are the usual strategies to reduce this?",
        tags: &["serverless", "performance"],
        author: "cloud_architect",
        score: 16,
        views: 189,
        hours_ago: 14,
        answers: &[("lambda_lou", "Trim dependencies, avoid VPC attachment unless needed, and use provisioned concurrency.", 5)],
        accepted: None,
    },
    Seed {
        title: "Best practices for asyncio task cancellation",
        description: "How should long-running asyncio tasks clean up when they get cancelled during shutdown?",
        tags: &["python", "async", "concurrency"],
        author: "python_dev",
        score: 13,
        views: 156,
        hours_ago: 20,
        answers: &[("loop_lena", "Catch CancelledError, clean up, and re-raise it so the caller sees the cancellation.", 4)],
        accepted: None,
    },
    Seed {
        title: "Sharing state between threads without a global",
        description: "I need a counter updated from several worker threads. Is Arc<Mutex<u64>> the idiomatic choice?",
        tags: &["rust", "concurrency"],
        author: "ferris_fan",
        score: 5,
        views: 61,
        hours_ago: 50,
        answers: &[("atomic_ada", "For a plain counter an Arc<AtomicU64> avoids the lock entirely.", 6)],
        accepted: Some(1),
    },
    Seed {
        title: "Generic constraints that reference another parameter",
        description: "I want a function whose second type parameter must be assignable to the first. How is that expressed?",
        tags: &["typescript", "generics"],
        author: "ts_learner",
        score: 19,
        views: 203,
        hours_ago: 3,
        answers: &[],
        accepted: None,
    },
];

/// The demo questions, timestamped relative to `now`, in board order.
pub fn questions(now: Timestamp) -> Vec<Question> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            let created_at = now.minus_secs(seed.hours_ago * HOUR);
            let answers = seed
                .answers
                .iter()
                .enumerate()
                .map(|(j, (author, content, score))| {
                    let id = j as u64 + 1;
                    Answer {
                        id: AnswerId::new(id),
                        content: (*content).to_string(),
                        author: UserId::new(*author),
                        score: *score,
                        created_at: now.minus_secs(seed.hours_ago * HOUR / (id + 1)),
                        is_accepted: seed.accepted == Some(id),
                    }
                })
                .collect();
            Question {
                id: QuestionId::new(i as u64 + 1),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                tags: seed.tags.iter().map(|t| t.to_string()).collect(),
                author: UserId::new(seed.author),
                score: seed.score,
                view_count: seed.views,
                created_at,
                answers,
            }
        })
        .collect()
}
