//! Listing parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ordering applied to the filtered questions. Always descending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recently created first.
    #[default]
    Newest,
    /// Highest score first.
    Votes,
    /// Most answers first.
    Activity,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Votes => "votes",
            SortKey::Activity => "activity",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key {0:?}: expected newest, votes or activity")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "votes" => Ok(SortKey::Votes),
            "activity" => Ok(SortKey::Activity),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

/// What the viewer asked to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring matched against title or description.
    #[serde(default)]
    pub search: String,
    /// Exact tag filter; `None` matches every question.
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
    /// 1-indexed page number.
    #[serde(default = "first_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            tag: None,
            sort: SortKey::default(),
            page: first_page(),
        }
    }
}

impl ListQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}
