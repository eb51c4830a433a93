//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies of the board (currently only the clock) are
//! abstracted behind traits in `stackit-types`. This crate provides
//! test-friendly implementations that return deterministic values and can be
//! controlled programmatically.

pub mod clock;

pub use clock::NullClock;
