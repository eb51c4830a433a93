//! The StackIt question board.
//!
//! [`QuestionBoard`] owns the questions of one session, the vote ledger and
//! the clock. Every mutating operation takes the acting identity explicitly
//! and fails with [`BoardError::Unauthorized`] before touching any state when
//! nobody is signed in.

pub mod acceptance;
pub mod board;
pub mod config;
pub mod error;
pub mod validation;

pub use acceptance::{toggle_accept, AcceptanceResult};
pub use board::{QuestionBoard, VoteResult};
pub use config::BoardConfig;
pub use error::{BoardError, Field, FieldError};
