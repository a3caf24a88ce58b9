//! Countdown snapshots.
//!
//! A [`Snapshot`] is derived from two timestamps and nothing else; it is
//! recomputed on every tick rather than updated incrementally.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Whole units left until an event, each field reduced by its modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Decompose a positive number of whole seconds.
    pub fn from_seconds(total: i64) -> Self {
        TimeLeft {
            days: total / SECONDS_PER_DAY,
            hours: (total / SECONDS_PER_HOUR) % 24,
            minutes: (total / SECONDS_PER_MINUTE) % 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// State of a countdown at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snapshot {
    Remaining(TimeLeft),
    /// The event date has been reached. Terminal: later instants stay live.
    Live,
}

impl Snapshot {
    /// Time left from `now` until `target`, floored to whole seconds.
    pub fn compute(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let delta = target - now;
        if delta <= TimeDelta::zero() {
            return Snapshot::Live;
        }

        // Positive, so integer division floors
        Snapshot::Remaining(TimeLeft::from_seconds(delta.num_milliseconds() / 1000))
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Snapshot::Live)
    }

    pub fn time_left(&self) -> Option<TimeLeft> {
        match self {
            Snapshot::Remaining(left) => Some(*left),
            Snapshot::Live => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn ninety_days_out() {
        let snapshot = Snapshot::compute(now() + Duration::days(90), now());
        assert_eq!(
            snapshot,
            Snapshot::Remaining(TimeLeft {
                days: 90,
                hours: 0,
                minutes: 0,
                seconds: 0
            })
        );
        assert!(!snapshot.is_live());
    }

    #[test]
    fn decomposition_matches_whole_seconds() {
        let offsets_ms = [
            1_000,
            59_999,
            61_001,
            3_599_999,
            86_400_000,
            86_399_999,
            90 * 86_400_000 + 23 * 3_600_000 + 59 * 60_000 + 59_999,
            1_234_567_891,
        ];

        for ms in offsets_ms {
            let target = now() + Duration::milliseconds(ms);
            let left = Snapshot::compute(target, now()).time_left().unwrap();
            assert_eq!(left.total_seconds(), ms / 1000, "offset {ms}ms");
            assert!((0..24).contains(&left.hours));
            assert!((0..60).contains(&left.minutes));
            assert!((0..60).contains(&left.seconds));
        }
    }

    #[test]
    fn floors_instead_of_rounding() {
        let target = now() + Duration::milliseconds(1_999);
        let left = Snapshot::compute(target, now()).time_left().unwrap();
        assert_eq!(left.seconds, 1);
    }

    #[test]
    fn sub_second_remaining_is_not_live() {
        let target = now() + Duration::milliseconds(400);
        let snapshot = Snapshot::compute(target, now());
        assert_eq!(snapshot.time_left().unwrap().total_seconds(), 0);
        assert!(!snapshot.is_live());
    }

    #[test]
    fn at_or_past_target_is_live() {
        assert_eq!(Snapshot::compute(now(), now()), Snapshot::Live);
        assert_eq!(
            Snapshot::compute(now() - Duration::days(3), now()),
            Snapshot::Live
        );
        assert!(Snapshot::Live.time_left().is_none());
    }

    #[test]
    fn display_pads_fields() {
        let left = TimeLeft::from_seconds(3 * 86_400 + 4 * 3_600 + 5 * 60 + 6);
        assert_eq!(left.to_string(), "03d 04h 05m 06s");
    }
}
