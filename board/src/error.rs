use serde::Serialize;
use stackit_types::{AnswerId, QuestionId, UserId};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("sign in required")]
    Unauthorized,

    #[error("{user} is not the author of question {question}")]
    Forbidden { question: QuestionId, user: UserId },

    #[error("validation failed: {}", join_fields(.0))]
    ValidationFailed(Vec<FieldError>),

    #[error("question {0} not found")]
    QuestionNotFound(QuestionId),

    #[error("answer {answer} not found on question {question}")]
    AnswerNotFound {
        question: QuestionId,
        answer: AnswerId,
    },

    #[error("no {0} ids left to allocate")]
    IdsExhausted(&'static str),

    #[error("invalid seed data: {0}")]
    InvalidSeed(String),

    #[error("config error: {0}")]
    Config(String),
}

impl BoardError {
    /// The target id no longer exists; the caller's view is stale.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BoardError::QuestionNotFound(_) | BoardError::AnswerNotFound { .. }
        )
    }

    /// Field errors, if this is a validation failure.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            BoardError::ValidationFailed(errors) => errors,
            _ => &[],
        }
    }
}

/// A form field that can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Tags,
    Content,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Tags => "tags",
            Field::Content => "content",
        })
    }
}

/// One inline message for one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
