//! Questions and their answers.

use crate::id::{AnswerId, QuestionId, UserId};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// A question on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    /// Between one and five distinct, non-empty tags, in the order given.
    pub tags: Vec<String>,
    pub author: UserId,
    /// Net vote count, maintained from vote deltas.
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub view_count: u64,
    pub created_at: Timestamp,
    /// Submission order.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    /// Number of answers; always equal to `answers.len()`.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    pub fn answer(&self, id: AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == id)
    }

    pub fn answer_mut(&mut self, id: AnswerId) -> Option<&mut Answer> {
        self.answers.iter_mut().find(|a| a.id == id)
    }

    /// The accepted answer, if the author has marked one.
    pub fn accepted_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.is_accepted)
    }

    pub fn has_accepted_answer(&self) -> bool {
        self.accepted_answer().is_some()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_authored_by(&self, user: &UserId) -> bool {
        &self.author == user
    }
}

/// An answer to a question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub content: String,
    pub author: UserId,
    #[serde(default)]
    pub score: i64,
    pub created_at: Timestamp,
    #[serde(default)]
    pub is_accepted: bool,
}

/// The fields a user fills in when asking a question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(id: u64, accepted: bool) -> Answer {
        Answer {
            id: AnswerId::new(id),
            content: format!("answer {id}"),
            author: UserId::new("helper"),
            score: 0,
            created_at: Timestamp::new(100),
            is_accepted: accepted,
        }
    }

    fn question(answers: Vec<Answer>) -> Question {
        Question {
            id: QuestionId::new(1),
            title: "How do lifetimes work?".into(),
            description: "Trying to understand elided lifetimes in methods.".into(),
            tags: vec!["rust".into(), "lifetimes".into()],
            author: UserId::new("john_dev"),
            score: 0,
            view_count: 0,
            created_at: Timestamp::new(50),
            answers,
        }
    }

    #[test]
    fn accepted_answer_is_derived() {
        let q = question(vec![answer(1, false), answer(2, true)]);
        assert!(q.has_accepted_answer());
        assert_eq!(q.accepted_answer().map(|a| a.id), Some(AnswerId::new(2)));
        assert_eq!(q.answer_count(), 2);
    }

    #[test]
    fn tag_match_is_exact() {
        let q = question(Vec::new());
        assert!(q.has_tag("rust"));
        assert!(!q.has_tag("Rust"));
        assert!(!q.has_accepted_answer());
    }

    #[test]
    fn missing_counters_default_when_deserializing() {
        let json = r#"{
            "id": 7,
            "title": "Why is my borrow rejected?",
            "description": "The checker complains about a mutable borrow in a loop.",
            "tags": ["rust"],
            "author": "alice",
            "created_at": 1000
        }"#;
        let q: Question = serde_json::from_str(json).expect("should parse");
        assert_eq!(q.id, QuestionId::new(7));
        assert_eq!(q.score, 0);
        assert_eq!(q.answer_count(), 0);
    }
}
