//! Form validation for question and answer submission.
//!
//! Every field is checked and all failures are reported together, at most
//! one message per field, so the form can show them inline.

use crate::config::BoardConfig;
use crate::error::{BoardError, Field, FieldError};
use stackit_types::NewQuestion;

/// Validate a question form and return it normalized (trimmed fields and tags).
pub fn validate_question(
    form: &NewQuestion,
    config: &BoardConfig,
) -> Result<NewQuestion, BoardError> {
    let mut errors = Vec::new();

    let title = form.title.trim();
    if let Some(message) = check_text("Title", title, config.title_min_len) {
        errors.push(FieldError::new(Field::Title, message));
    }

    let description = form.description.trim();
    if let Some(message) = check_text("Description", description, config.description_min_len) {
        errors.push(FieldError::new(Field::Description, message));
    }

    let tags: Vec<String> = form.tags.iter().map(|t| t.trim().to_string()).collect();
    if let Some(message) = check_tags(&tags, config.max_tags) {
        errors.push(FieldError::new(Field::Tags, message));
    }

    if !errors.is_empty() {
        return Err(BoardError::ValidationFailed(errors));
    }

    Ok(NewQuestion {
        title: title.to_string(),
        description: description.to_string(),
        tags,
    })
}

/// Validate answer content and return it trimmed.
pub fn validate_answer(content: &str) -> Result<String, BoardError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(BoardError::ValidationFailed(vec![FieldError::new(
            Field::Content,
            "Answer cannot be empty",
        )]));
    }
    Ok(content.to_string())
}

fn check_text(label: &str, value: &str, min_len: usize) -> Option<String> {
    if value.is_empty() {
        Some(format!("{label} is required"))
    } else if value.chars().count() < min_len {
        Some(format!("{label} must be at least {min_len} characters"))
    } else {
        None
    }
}

pub(crate) fn check_tags(tags: &[String], max_tags: usize) -> Option<String> {
    if tags.is_empty() {
        return Some("At least one tag is required".to_string());
    }
    if tags.iter().any(|t| t.is_empty()) {
        return Some("Tags cannot be empty".to_string());
    }
    if tags.len() > max_tags {
        return Some(format!("At most {max_tags} tags are allowed"));
    }
    for (i, tag) in tags.iter().enumerate() {
        if tags[..i].contains(tag) {
            return Some(format!("Duplicate tag: {tag}"));
        }
    }
    None
}
