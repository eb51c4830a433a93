//! Vote bookkeeping for StackIt.
//!
//! Each voter holds at most one choice per target. Requesting the direction
//! already held clears it; requesting the opposite switches it in a single
//! step. Every application reports the score delta so callers can keep
//! denormalized scores in step with the ledger.

pub mod ledger;

pub use ledger::{VoteLedger, VoteOutcome};
