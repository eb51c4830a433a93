//! Vote directions, recorded choices, and vote targets.

use crate::id::{AnswerId, QuestionId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A direction a voter can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Score contribution of a single vote in this direction.
    pub fn weight(&self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            VoteDirection::Up => VoteDirection::Down,
            VoteDirection::Down => VoteDirection::Up,
        }
    }
}

/// The choice a voter currently holds on a target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Up,
    Down,
    #[default]
    None,
}

impl VoteChoice {
    /// Score contribution of this choice (0 for `None`).
    pub fn weight(&self) -> i64 {
        match self {
            VoteChoice::Up => 1,
            VoteChoice::Down => -1,
            VoteChoice::None => 0,
        }
    }
}

impl From<VoteDirection> for VoteChoice {
    fn from(direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Up => VoteChoice::Up,
            VoteDirection::Down => VoteChoice::Down,
        }
    }
}

/// Something that can be voted on.
///
/// Answer ids are only unique within their question, so an answer target
/// always carries the owning question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VoteTarget {
    Question { question: QuestionId },
    Answer { question: QuestionId, answer: AnswerId },
}

impl VoteTarget {
    pub fn question(question: QuestionId) -> Self {
        VoteTarget::Question { question }
    }

    pub fn answer(question: QuestionId, answer: AnswerId) -> Self {
        VoteTarget::Answer { question, answer }
    }

    /// The question this target belongs to.
    pub fn question_id(&self) -> QuestionId {
        match self {
            VoteTarget::Question { question } | VoteTarget::Answer { question, .. } => *question,
        }
    }
}

impl fmt::Display for VoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteTarget::Question { question } => write!(f, "question {question}"),
            VoteTarget::Answer { question, answer } => {
                write!(f, "answer {answer} of question {question}")
            }
        }
    }
}
