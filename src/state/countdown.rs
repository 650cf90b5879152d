//! Timelock countdown rendering for history events.

use crate::utils::format_timestamp;

/// Display state of a proposal timelock.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelockStatus {
    /// Timelock has ended, carries the end date for display.
    Ended(String),
    /// Still running, carries the remaining time string.
    Remaining(String),
}

impl TimelockStatus {
    pub fn is_past(&self) -> bool {
        matches!(self, TimelockStatus::Ended(_))
    }

    pub fn display(&self) -> &str {
        match self {
            TimelockStatus::Ended(text) => text,
            TimelockStatus::Remaining(text) => text,
        }
    }
}

/// Countdown for a timelock that started at `created_at`.
///
/// Events without a timelock, including a zero-length one, have no
/// countdown at all.
pub fn timelock_status(created_at: u64, timelock: Option<u64>, now: u64) -> Option<TimelockStatus> {
    let timelock = timelock?;
    if timelock == 0 {
        return None;
    }

    let end = created_at.saturating_add(timelock);
    if now >= end {
        return Some(TimelockStatus::Ended(format_timestamp(end)));
    }

    let remaining = end - now;
    let hours = remaining / 3600;
    let minutes = (remaining % 3600) / 60;
    let seconds = remaining % 60;
    Some(TimelockStatus::Remaining(format!(
        "{}h {}m {}s remaining",
        hours, minutes, seconds
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_timelock_means_no_countdown() {
        assert_eq!(timelock_status(1_000, None, 2_000), None);
        assert_eq!(timelock_status(1_000, Some(0), 2_000), None);
    }

    #[test]
    fn test_running_countdown_format() {
        // 1h 1m 1s left.
        let status = timelock_status(1_000, Some(4_661), 1_000).unwrap();
        assert!(!status.is_past());
        assert_eq!(status.display(), "1h 1m 1s remaining");
    }

    #[test]
    fn test_countdown_ticks_down() {
        let status = timelock_status(0, Some(90), 30).unwrap();
        assert_eq!(status.display(), "0h 1m 0s remaining");
    }

    #[test]
    fn test_ended_exactly_at_boundary() {
        let status = timelock_status(1_000, Some(500), 1_500).unwrap();
        assert!(status.is_past());
        assert_eq!(status.display(), format_timestamp(1_500));
    }

    #[test]
    fn test_ended_shows_end_date() {
        let status = timelock_status(1_000, Some(500), 9_999).unwrap();
        assert!(status.is_past());
        assert_eq!(status.display(), format_timestamp(1_500));
    }
}
