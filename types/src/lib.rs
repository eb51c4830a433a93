//! Fundamental types for StackIt.
//!
//! This crate defines the records shared by every other crate in the workspace:
//! identifiers, timestamps, questions with their answers, vote directions, and
//! the identity carried into every mutating operation.

pub mod auth;
pub mod id;
pub mod question;
pub mod time;
pub mod vote;

pub use auth::{AuthContext, Session};
pub use id::{AnswerId, QuestionId, UserId};
pub use question::{Answer, NewQuestion, Question};
pub use time::{Clock, SystemClock, Timestamp};
pub use vote::{VoteChoice, VoteDirection, VoteTarget};
