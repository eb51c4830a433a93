//! The vote ledger.

use serde::{Deserialize, Serialize};
use stackit_types::{QuestionId, UserId, VoteChoice, VoteDirection, VoteTarget};
use std::collections::HashMap;

/// Result of applying one vote request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    /// Choice held before the request.
    pub previous: VoteChoice,
    /// Choice held after the request.
    pub choice: VoteChoice,
    /// Change to apply to the target's score: one of -2, -1, +1, +2.
    pub delta: i64,
}

/// Records, per (voter, target), the single direction currently held.
///
/// A missing entry means [`VoteChoice::None`]; entries are removed rather than
/// stored as `None` so the map only ever holds live votes.
#[derive(Debug, Default)]
pub struct VoteLedger {
    votes: HashMap<(UserId, VoteTarget), VoteDirection>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self {
            votes: HashMap::new(),
        }
    }

    /// The choice `voter` currently holds on `target`.
    pub fn choice_of(&self, voter: &UserId, target: &VoteTarget) -> VoteChoice {
        self.votes
            .get(&(voter.clone(), *target))
            .map(|d| VoteChoice::from(*d))
            .unwrap_or_default()
    }

    /// Apply a vote request and return the resulting score delta.
    ///
    /// - same direction as held: the vote is withdrawn (delta reverses it)
    /// - nothing held: the vote is recorded (delta ±1)
    /// - opposite held: the vote is switched (delta ±2, cancelling the old
    ///   vote and applying the new one at once)
    pub fn apply_vote(
        &mut self,
        voter: &UserId,
        target: VoteTarget,
        requested: VoteDirection,
    ) -> VoteOutcome {
        let key = (voter.clone(), target);
        let previous = self
            .votes
            .get(&key)
            .map(|d| VoteChoice::from(*d))
            .unwrap_or_default();

        let choice = if previous == VoteChoice::from(requested) {
            self.votes.remove(&key);
            VoteChoice::None
        } else {
            self.votes.insert(key, requested);
            VoteChoice::from(requested)
        };

        let delta = choice.weight() - previous.weight();
        tracing::debug!(%voter, %target, ?previous, ?choice, delta, "vote applied");

        VoteOutcome {
            previous,
            choice,
            delta,
        }
    }

    /// Net score contributed by the ledger to `target`.
    pub fn tally(&self, target: &VoteTarget) -> i64 {
        self.votes
            .iter()
            .filter(|((_, t), _)| t == target)
            .map(|(_, d)| d.weight())
            .sum()
    }

    /// Choices `voter` holds on a question and all of its answers.
    pub fn choices_on_question(
        &self,
        voter: &UserId,
        question: QuestionId,
    ) -> HashMap<VoteTarget, VoteChoice> {
        self.votes
            .iter()
            .filter(|((v, t), _)| v == voter && t.question_id() == question)
            .map(|((_, t), d)| (*t, VoteChoice::from(*d)))
            .collect()
    }

    /// Number of live votes across all voters and targets.
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackit_types::AnswerId;

    fn voter(name: &str) -> UserId {
        UserId::new(name)
    }

    fn q(id: u64) -> VoteTarget {
        VoteTarget::question(QuestionId::new(id))
    }

    #[test]
    fn first_vote_records_choice() {
        let mut ledger = VoteLedger::new();
        let out = ledger.apply_vote(&voter("a"), q(1), VoteDirection::Up);
        assert_eq!(out.delta, 1);
        assert_eq!(out.previous, VoteChoice::None);
        assert_eq!(out.choice, VoteChoice::Up);
        assert_eq!(ledger.choice_of(&voter("a"), &q(1)), VoteChoice::Up);

        let out = ledger.apply_vote(&voter("b"), q(1), VoteDirection::Down);
        assert_eq!(out.delta, -1);
    }

    #[test]
    fn repeating_a_direction_withdraws_it() {
        let mut ledger = VoteLedger::new();
        let a = voter("a");
        assert_eq!(ledger.apply_vote(&a, q(1), VoteDirection::Up).delta, 1);
        let out = ledger.apply_vote(&a, q(1), VoteDirection::Up);
        assert_eq!(out.delta, -1);
        assert_eq!(out.choice, VoteChoice::None);
        assert!(ledger.is_empty());

        assert_eq!(ledger.apply_vote(&a, q(1), VoteDirection::Down).delta, -1);
        assert_eq!(ledger.apply_vote(&a, q(1), VoteDirection::Down).delta, 1);
        assert_eq!(ledger.choice_of(&a, &q(1)), VoteChoice::None);
    }

    #[test]
    fn switching_direction_moves_two_points() {
        let mut ledger = VoteLedger::new();
        let a = voter("a");
        ledger.apply_vote(&a, q(1), VoteDirection::Down);
        let out = ledger.apply_vote(&a, q(1), VoteDirection::Up);
        assert_eq!(out.delta, 2);
        assert_eq!(out.previous, VoteChoice::Down);
        let out = ledger.apply_vote(&a, q(1), VoteDirection::Down);
        assert_eq!(out.delta, -2);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn voters_and_targets_are_independent() {
        let mut ledger = VoteLedger::new();
        let answer = VoteTarget::answer(QuestionId::new(1), AnswerId::new(1));
        let other_answer = VoteTarget::answer(QuestionId::new(2), AnswerId::new(1));

        ledger.apply_vote(&voter("a"), answer, VoteDirection::Up);
        ledger.apply_vote(&voter("b"), answer, VoteDirection::Up);
        ledger.apply_vote(&voter("c"), answer, VoteDirection::Down);
        ledger.apply_vote(&voter("a"), other_answer, VoteDirection::Down);

        assert_eq!(ledger.tally(&answer), 1);
        assert_eq!(ledger.tally(&other_answer), -1);
        assert_eq!(ledger.choice_of(&voter("c"), &other_answer), VoteChoice::None);
        assert_eq!(ledger.choice_of(&voter("a"), &answer), VoteChoice::Up);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn choices_on_question_include_its_answers() {
        let mut ledger = VoteLedger::new();
        let a = voter("a");
        let question = QuestionId::new(3);
        ledger.apply_vote(&a, VoteTarget::question(question), VoteDirection::Up);
        ledger.apply_vote(&a, VoteTarget::answer(question, AnswerId::new(2)), VoteDirection::Down);
        ledger.apply_vote(&a, q(4), VoteDirection::Up);

        let choices = ledger.choices_on_question(&a, question);
        assert_eq!(choices.len(), 2);
        assert_eq!(
            choices.get(&VoteTarget::answer(question, AnswerId::new(2))),
            Some(&VoteChoice::Down)
        );
    }
}
