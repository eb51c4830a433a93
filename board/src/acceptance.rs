//! Accepted-answer toggling.
//!
//! A question has either no accepted answer or exactly one. The only
//! transition is [`toggle_accept`], which checks everything before it writes,
//! so a rejected call leaves the question untouched.

use crate::error::BoardError;
use serde::Serialize;
use stackit_types::{AnswerId, Question, UserId};

/// What a toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum AcceptanceResult {
    /// `answer` is now the accepted answer; `replaced` lost the mark.
    Accepted {
        answer: AnswerId,
        replaced: Option<AnswerId>,
    },
    /// `answer` was accepted and no longer is; nothing is accepted now.
    Unaccepted { answer: AnswerId },
}

/// Toggle the accepted mark on `answer` as `requester`.
///
/// Only the question's author may accept. Accepting one answer clears the
/// mark on every other answer of the question in the same step.
pub fn toggle_accept(
    question: &mut Question,
    answer: AnswerId,
    requester: &UserId,
) -> Result<AcceptanceResult, BoardError> {
    if !question.is_authored_by(requester) {
        return Err(BoardError::Forbidden {
            question: question.id,
            user: requester.clone(),
        });
    }

    let was_accepted = question
        .answer(answer)
        .map(|a| a.is_accepted)
        .ok_or_else(|| BoardError::AnswerNotFound {
            question: question.id,
            answer,
        })?;
    let replaced = question
        .accepted_answer()
        .map(|a| a.id)
        .filter(|id| *id != answer);

    for a in question.answers.iter_mut() {
        a.is_accepted = !was_accepted && a.id == answer;
    }

    Ok(if was_accepted {
        AcceptanceResult::Unaccepted { answer }
    } else {
        AcceptanceResult::Accepted { answer, replaced }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackit_types::{Answer, QuestionId, Timestamp};

    fn question_with(n: u64) -> Question {
        Question {
            id: QuestionId::new(1),
            title: "How to implement JWT authentication?".into(),
            description: "Token storage and validation keep failing for me.".into(),
            tags: vec!["jwt".into()],
            author: UserId::new("john_dev"),
            score: 0,
            view_count: 0,
            created_at: Timestamp::new(0),
            answers: (1..=n)
                .map(|i| Answer {
                    id: AnswerId::new(i),
                    content: format!("answer {i}"),
                    author: UserId::new("helper"),
                    score: 0,
                    created_at: Timestamp::new(i),
                    is_accepted: false,
                })
                .collect(),
        }
    }

    fn accepted(q: &Question) -> Vec<u64> {
        q.answers
            .iter()
            .filter(|a| a.is_accepted)
            .map(|a| a.id.get())
            .collect()
    }

    #[test]
    fn accepting_moves_the_mark() {
        let mut q = question_with(3);
        let author = UserId::new("john_dev");

        let r = toggle_accept(&mut q, AnswerId::new(1), &author).unwrap();
        assert_eq!(
            r,
            AcceptanceResult::Accepted {
                answer: AnswerId::new(1),
                replaced: None
            }
        );
        assert_eq!(accepted(&q), vec![1]);

        let r = toggle_accept(&mut q, AnswerId::new(2), &author).unwrap();
        assert_eq!(
            r,
            AcceptanceResult::Accepted {
                answer: AnswerId::new(2),
                replaced: Some(AnswerId::new(1))
            }
        );
        assert_eq!(accepted(&q), vec![2]);
    }

    #[test]
    fn accepting_again_unaccepts() {
        let mut q = question_with(2);
        let author = UserId::new("john_dev");
        toggle_accept(&mut q, AnswerId::new(2), &author).unwrap();
        let r = toggle_accept(&mut q, AnswerId::new(2), &author).unwrap();
        assert_eq!(
            r,
            AcceptanceResult::Unaccepted {
                answer: AnswerId::new(2)
            }
        );
        assert!(accepted(&q).is_empty());
    }

    #[test]
    fn non_author_is_forbidden_and_nothing_changes() {
        let mut q = question_with(2);
        toggle_accept(&mut q, AnswerId::new(1), &UserId::new("john_dev")).unwrap();
        let before = q.clone();

        let err = toggle_accept(&mut q, AnswerId::new(2), &UserId::new("mallory")).unwrap_err();
        assert!(matches!(err, BoardError::Forbidden { .. }));
        assert_eq!(q, before);
    }

    #[test]
    fn unknown_answer_leaves_state_intact() {
        let mut q = question_with(2);
        toggle_accept(&mut q, AnswerId::new(1), &UserId::new("john_dev")).unwrap();
        let err = toggle_accept(&mut q, AnswerId::new(9), &UserId::new("john_dev")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(accepted(&q), vec![1]);
    }
}
