//! Board configuration with TOML file support.

use serde::{Deserialize, Serialize};
use stackit_listing::DEFAULT_PAGE_SIZE;

use crate::BoardError;

/// Configuration for a question board and the surface presenting it.
///
/// Can be loaded from a TOML file via [`BoardConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so an
/// empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Questions per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Page links shown before the row collapses into ellipses.
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,

    /// Minimum title length, in characters, after trimming.
    #[serde(default = "default_title_min_len")]
    pub title_min_len: usize,

    /// Minimum description length, in characters, after trimming.
    #[serde(default = "default_description_min_len")]
    pub description_min_len: usize,

    /// Maximum number of tags on one question.
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_visible_pages() -> usize {
    5
}

fn default_title_min_len() -> usize {
    10
}

fn default_description_min_len() -> usize {
    30
}

fn default_max_tags() -> usize {
    5
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl BoardConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, BoardError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| BoardError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, BoardError> {
        let config: Self = toml::from_str(s).map_err(|e| BoardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, BoardError> {
        toml::to_string_pretty(self).map_err(|e| BoardError::Config(e.to_string()))
    }

    /// Reject settings under which nothing could be listed or submitted.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.page_size == 0 {
            return Err(BoardError::Config("page_size must be at least 1".into()));
        }
        if self.max_tags == 0 {
            return Err(BoardError::Config("max_tags must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_visible_pages: default_max_visible_pages(),
            title_min_len: default_title_min_len(),
            description_min_len: default_description_min_len(),
            max_tags: default_max_tags(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = BoardConfig::default();
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = BoardConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = BoardConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.max_tags, 5);
        assert_eq!(config.title_min_len, 10);
        assert_eq!(config.log_format, "human");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            page_size = 20
            log_level = "debug"
        "#;
        let config = BoardConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.description_min_len, 30); // default
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = BoardConfig::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "max_visible_pages = 7").expect("write");
        let config = BoardConfig::from_toml_file(file.path()).expect("should load");
        assert_eq!(config.max_visible_pages, 7);
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = BoardConfig::from_toml_file("/nonexistent/stackit.toml");
        assert!(matches!(result, Err(BoardError::Config(_))));
    }
}
