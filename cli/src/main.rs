//! StackIt terminal front-end.

mod demo;
mod render;

use anyhow::Context;
use clap::Parser;
use stackit_board::{BoardConfig, QuestionBoard};
use stackit_listing::{ListQuery, SortKey};
use stackit_types::{Clock, Question, QuestionId, SystemClock};
use stackit_utils::LogFormat;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "stackit", about = "Browse a StackIt question board")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "STACKIT_CONFIG")]
    config: Option<PathBuf>,

    /// JSON file holding an array of questions. Without it a built-in demo
    /// board is used.
    #[arg(long, env = "STACKIT_DATA")]
    data: Option<PathBuf>,

    /// Questions per page.
    #[arg(long, env = "STACKIT_PAGE_SIZE")]
    page_size: Option<usize>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "STACKIT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "STACKIT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// List questions.
    List {
        /// Case-insensitive text matched against titles and descriptions.
        #[arg(long, default_value = "")]
        search: String,

        /// Only questions carrying this tag.
        #[arg(long)]
        tag: Option<String>,

        /// newest, votes or activity.
        #[arg(long, default_value_t = SortKey::Newest)]
        sort: SortKey,

        /// 1-indexed page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one question with its answers.
    Show {
        /// Question id.
        id: u64,
    },
    /// Most used tags.
    Tags {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => BoardConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => BoardConfig::default(),
    };
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    let format = match cli.log_format {
        Some(format) => format,
        None => config
            .log_format
            .parse()
            .context("invalid log_format in config")?,
    };
    config.validate()?;
    stackit_utils::init_logging(format, &config.log_level);

    let clock = SystemClock;
    let questions = match cli.data.as_deref() {
        Some(path) => load_questions(path)?,
        None => demo::questions(clock.now()),
    };
    tracing::info!(questions = questions.len(), "board loaded");
    let mut board = QuestionBoard::with_questions(config, clock, questions)?;

    match cli.command {
        Command::List {
            search,
            tag,
            sort,
            page,
        } => {
            let query = ListQuery {
                search,
                tag,
                sort,
                page,
            };
            let listing = board.list(&query);
            let links = board.page_links(&listing);
            print!("{}", render::listing(&listing, &links, board.clock().now()));
        }
        Command::Show { id } => {
            let id = QuestionId::new(id);
            board.record_view(id)?;
            let question = board
                .question(id)
                .with_context(|| format!("question {id} disappeared"))?;
            print!("{}", render::question(question, board.clock().now()));
        }
        Command::Tags { limit } => {
            for (tag, count) in board.popular_tags(limit) {
                println!("{count:>4}  {tag}");
            }
        }
    }
    Ok(())
}

fn load_questions(path: &Path) -> anyhow::Result<Vec<Question>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading questions from {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}
