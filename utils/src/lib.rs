//! Shared utilities for StackIt.

pub mod logging;
pub mod time;

pub use logging::{init_logging, LogFormat, ParseLogFormatError};
pub use time::format_time_ago;
