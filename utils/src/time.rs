//! Relative time formatting.

use stackit_types::Timestamp;

const SECS_PER_HOUR: u64 = 60 * 60;
const HOURS_PER_DAY: u64 = 24;

/// Render how long ago `created_at` was, relative to `now`.
///
/// Under an hour reads "just now", under a day "{h}h ago", otherwise
/// "{d}d ago". Both units are floored. A `created_at` later than `now`
/// reads "just now".
pub fn format_time_ago(created_at: Timestamp, now: Timestamp) -> String {
    let hours = created_at.elapsed_since(now) / SECS_PER_HOUR;
    if hours < 1 {
        "just now".to_string()
    } else if hours < HOURS_PER_DAY {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / HOURS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ago(secs: u64) -> String {
        let now = Timestamp::new(1_000_000);
        format_time_ago(now.minus_secs(secs), now)
    }

    #[test]
    fn under_an_hour_is_just_now() {
        assert_eq!(ago(0), "just now");
        assert_eq!(ago(59 * 60), "just now");
        assert_eq!(ago(3599), "just now");
    }

    #[test]
    fn hours_are_floored() {
        assert_eq!(ago(3600), "1h ago");
        assert_eq!(ago(2 * 3600 + 59 * 60), "2h ago");
        assert_eq!(ago(23 * 3600 + 3599), "23h ago");
    }

    #[test]
    fn days_are_floored() {
        assert_eq!(ago(24 * 3600), "1d ago");
        assert_eq!(ago(36 * 3600), "1d ago");
        assert_eq!(ago(10 * 24 * 3600), "10d ago");
    }

    #[test]
    fn future_timestamps_read_just_now() {
        let now = Timestamp::new(100);
        assert_eq!(format_time_ago(Timestamp::new(100_000), now), "just now");
    }
}
