//! The question board: one session's questions, votes and clock.

use crate::acceptance::{toggle_accept, AcceptanceResult};
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::validation::{check_tags, validate_answer, validate_question};
use serde::Serialize;
use stackit_listing::{page_window, view, ListPage, ListQuery, PageLink};
use stackit_types::{
    Answer, AnswerId, AuthContext, Clock, NewQuestion, Question, QuestionId, SystemClock, UserId,
    VoteChoice, VoteDirection, VoteTarget,
};
use stackit_votes::VoteLedger;
use std::collections::{HashMap, HashSet};

/// Result of a vote as seen by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VoteResult {
    pub delta: i64,
    /// The voter's choice after the vote.
    pub choice: VoteChoice,
    /// The target's score after the vote.
    pub score: i64,
}

/// Questions in board order (newest submission first), plus the vote ledger.
pub struct QuestionBoard<C: Clock = SystemClock> {
    questions: Vec<Question>,
    ledger: VoteLedger,
    config: BoardConfig,
    clock: C,
    /// Next id to hand out; one past the highest id ever seen.
    next_question_id: u64,
}

impl<C: Clock> QuestionBoard<C> {
    pub fn new(config: BoardConfig, clock: C) -> Self {
        Self {
            questions: Vec::new(),
            ledger: VoteLedger::new(),
            config,
            clock,
            next_question_id: 1,
        }
    }

    /// Build a board over existing questions, kept in the given order.
    ///
    /// Rejects duplicate question ids, duplicate answer ids within a
    /// question, tag lists that break the tag rules, questions with more than
    /// one accepted answer, and a highest question id with no successor.
    pub fn with_questions(
        config: BoardConfig,
        clock: C,
        questions: Vec<Question>,
    ) -> Result<Self, BoardError> {
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(BoardError::InvalidSeed(format!("duplicate question id {}", q.id)));
            }
            if let Some(message) = check_tags(&q.tags, config.max_tags) {
                return Err(BoardError::InvalidSeed(format!("question {}: {message}", q.id)));
            }
            let mut answer_ids = HashSet::new();
            if let Some(a) = q.answers.iter().find(|a| !answer_ids.insert(a.id)) {
                return Err(BoardError::InvalidSeed(format!(
                    "duplicate answer id {} on question {}",
                    a.id, q.id
                )));
            }
            if q.answers.iter().filter(|a| a.is_accepted).count() > 1 {
                return Err(BoardError::InvalidSeed(format!(
                    "question {} has more than one accepted answer",
                    q.id
                )));
            }
        }

        let next_question_id = questions
            .iter()
            .map(|q| q.id.get())
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| BoardError::InvalidSeed("question id space exhausted".into()))?;
        tracing::debug!(count = questions.len(), next_question_id, "board seeded");
        Ok(Self {
            questions,
            ledger: VoteLedger::new(),
            config,
            clock,
            next_question_id,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// All questions in board order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    fn question_mut(&mut self, id: QuestionId) -> Result<&mut Question, BoardError> {
        self.questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(BoardError::QuestionNotFound(id))
    }

    /// Ask a question as the signed-in user.
    ///
    /// The new question goes to the front of the board order.
    pub fn submit_question(
        &mut self,
        auth: &impl AuthContext,
        form: NewQuestion,
    ) -> Result<QuestionId, BoardError> {
        let author = require_user(auth)?.clone();
        let form = validate_question(&form, &self.config)?;

        let id = QuestionId::new(self.next_question_id);
        self.next_question_id = self
            .next_question_id
            .checked_add(1)
            .ok_or(BoardError::IdsExhausted("question"))?;
        self.questions.insert(
            0,
            Question {
                id,
                title: form.title,
                description: form.description,
                tags: form.tags,
                author,
                score: 0,
                view_count: 0,
                created_at: self.clock.now(),
                answers: Vec::new(),
            },
        );
        tracing::info!(question = %id, "question submitted");
        Ok(id)
    }

    /// Answer a question as the signed-in user. Answers are appended in
    /// submission order.
    pub fn submit_answer(
        &mut self,
        auth: &impl AuthContext,
        question_id: QuestionId,
        content: &str,
    ) -> Result<AnswerId, BoardError> {
        let author = require_user(auth)?.clone();
        let now = self.clock.now();
        let question = self.question_mut(question_id)?;
        let content = validate_answer(content)?;

        let next = question
            .answers
            .iter()
            .map(|a| a.id.get())
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(BoardError::IdsExhausted("answer"))?;
        let id = AnswerId::new(next);
        question.answers.push(Answer {
            id,
            content,
            author,
            score: 0,
            created_at: now,
            is_accepted: false,
        });
        tracing::info!(question = %question_id, answer = %id, "answer submitted");
        Ok(id)
    }

    /// Vote on a question or answer as the signed-in user.
    ///
    /// The ledger is only touched once the target is known to exist.
    pub fn vote(
        &mut self,
        auth: &impl AuthContext,
        target: VoteTarget,
        direction: VoteDirection,
    ) -> Result<VoteResult, BoardError> {
        let voter = require_user(auth)?;
        let score = score_mut(&mut self.questions, &target)?;
        let outcome = self.ledger.apply_vote(voter, target, direction);
        *score += outcome.delta;
        Ok(VoteResult {
            delta: outcome.delta,
            choice: outcome.choice,
            score: *score,
        })
    }

    /// Toggle the accepted answer of a question as its author.
    pub fn toggle_accept(
        &mut self,
        auth: &impl AuthContext,
        question_id: QuestionId,
        answer_id: AnswerId,
    ) -> Result<AcceptanceResult, BoardError> {
        let requester = require_user(auth)?;
        let question = self.question_mut(question_id)?;
        match toggle_accept(question, answer_id, requester) {
            Ok(result) => {
                tracing::info!(question = %question_id, ?result, "acceptance toggled");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(question = %question_id, answer = %answer_id, "accept rejected: {e}");
                Err(e)
            }
        }
    }

    /// Count one view of a question; returns the new view count.
    pub fn record_view(&mut self, id: QuestionId) -> Result<u64, BoardError> {
        let question = self.question_mut(id)?;
        question.view_count += 1;
        Ok(question.view_count)
    }

    /// The choice `voter` holds on `target`.
    pub fn choice_of(&self, voter: &UserId, target: &VoteTarget) -> VoteChoice {
        self.ledger.choice_of(voter, target)
    }

    /// Choices `voter` holds on a question and its answers, for rendering
    /// highlighted vote buttons.
    pub fn choices_on_question(
        &self,
        voter: &UserId,
        question: QuestionId,
    ) -> HashMap<VoteTarget, VoteChoice> {
        self.ledger.choices_on_question(voter, question)
    }

    /// One page of the listing, at the configured page size.
    pub fn list(&self, query: &ListQuery) -> ListPage<'_> {
        view(&self.questions, query, self.config.page_size)
    }

    /// Page links for a listing page.
    pub fn page_links(&self, page: &ListPage<'_>) -> Vec<PageLink> {
        page_window(page.page, page.total_pages, self.config.max_visible_pages)
    }

    /// Most used tags, most frequent first; ties keep first appearance in
    /// board order.
    pub fn popular_tags(&self, limit: usize) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for tag in self.questions.iter().flat_map(|q| q.tags.iter()) {
            match index.get(tag.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(tag, counts.len());
                    counts.push((tag.clone(), 1));
                }
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(limit);
        counts
    }
}

fn require_user<A: AuthContext + ?Sized>(auth: &A) -> Result<&UserId, BoardError> {
    auth.current_user_id().ok_or_else(|| {
        tracing::debug!("action rejected: no signed-in user");
        BoardError::Unauthorized
    })
}

fn score_mut<'a>(
    questions: &'a mut [Question],
    target: &VoteTarget,
) -> Result<&'a mut i64, BoardError> {
    let question_id = target.question_id();
    let question = questions
        .iter_mut()
        .find(|q| q.id == question_id)
        .ok_or(BoardError::QuestionNotFound(question_id))?;
    match target {
        VoteTarget::Question { .. } => Ok(&mut question.score),
        VoteTarget::Answer { answer, .. } => question
            .answer_mut(*answer)
            .map(|a| &mut a.score)
            .ok_or(BoardError::AnswerNotFound {
                question: question_id,
                answer: *answer,
            }),
    }
}
