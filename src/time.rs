//! Clock-time and calendar-week utilities.
//!
//! Shift times are clock-of-day values with minute resolution, parsed from
//! `"HH:MM"`. A shift whose end is numerically before its start crosses
//! midnight; durations account for the wrap. Weekly-hour grouping uses
//! ISO 8601 calendar weeks.
//!
//! # Reference
//! ISO 8601-1:2019, week date representation

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a day, the overnight wrap amount.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A clock-of-day time (00:00 to 23:59).
///
/// Parsed from and rendered as `"HH:MM"`; carries no date.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

/// Parse failure for a clock time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid clock time '{text}': expected HH:MM within 00:00..=23:59")]
pub struct ParseClockTimeError {
    text: String,
}

impl ClockTime {
    /// Builds a clock time from hour and minute components.
    ///
    /// Returns `None` when either component is out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then(|| Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Minutes since midnight (0..=1439).
    #[inline]
    pub fn minutes(self) -> i64 {
        i64::from(self.minutes)
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError {
            text: s.to_string(),
        };
        let (hour, minute) = s.split_once(':').ok_or_else(err)?;
        let hour: u16 = hour.parse().map_err(|_| err())?;
        let minute: u16 = minute.parse().map_err(|_| err())?;
        Self::from_hm(hour, minute).ok_or_else(err)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

/// Worked hours between two clock times.
///
/// An end before the start means the shift crosses midnight, so a day of
/// minutes is added before dividing. Fractional hours floor away: a shift
/// of 7 h 30 min counts 7.
pub fn shift_duration_hours(start: ClockTime, end: ClockTime) -> i64 {
    let mut span = end.minutes() - start.minutes();
    if span < 0 {
        span += MINUTES_PER_DAY;
    }
    span / 60
}

/// Grouping key shared by all dates in one ISO 8601 calendar week.
///
/// Carries the ISO week-year, not the calendar year: the days around New
/// Year that belong to the neighbouring year's week 1 (or week 52/53)
/// must land in the same bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    /// ISO week-year.
    pub year: i32,
    /// ISO week number (1..=53).
    pub week: u32,
}

/// The week key for a calendar date.
pub fn week_key(date: NaiveDate) -> WeekKey {
    let iso = date.iso_week();
    WeekKey {
        year: iso.year(),
        week: iso.week(),
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(text: &str) -> ClockTime {
        text.parse().unwrap()
    }

    fn d(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(t("00:00").minutes(), 0);
        assert_eq!(t("09:30").minutes(), 570);
        assert_eq!(t("23:59").minutes(), 1439);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<ClockTime>().is_err());
        assert!("12".parse::<ClockTime>().is_err());
        assert!("12:xx".parse::<ClockTime>().is_err());
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("-1:00".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(t("09:05").to_string(), "09:05");
        assert_eq!(t("22:00").to_string(), "22:00");
    }

    #[test]
    fn test_duration_same_day() {
        assert_eq!(shift_duration_hours(t("09:00"), t("17:00")), 8);
        assert_eq!(shift_duration_hours(t("09:00"), t("09:00")), 0);
    }

    #[test]
    fn test_duration_floors_partial_hours() {
        assert_eq!(shift_duration_hours(t("09:00"), t("16:30")), 7);
    }

    #[test]
    fn test_duration_overnight() {
        // 22:00 to 06:00 the next day
        assert_eq!(shift_duration_hours(t("22:00"), t("06:00")), 8);
    }

    #[test]
    fn test_duration_ending_at_midnight() {
        assert_eq!(shift_duration_hours(t("16:00"), t("00:00")), 8);
    }

    #[test]
    fn test_week_key_groups_same_week() {
        // Monday and Sunday of the same ISO week
        assert_eq!(week_key(d("2024-01-15")), week_key(d("2024-01-21")));
        assert_ne!(week_key(d("2024-01-15")), week_key(d("2024-01-22")));
    }

    #[test]
    fn test_week_key_uses_iso_week_year() {
        // 2024-12-30 (Mon) and 2025-01-02 (Thu) share ISO week 2025-W01
        let key = week_key(d("2024-12-30"));
        assert_eq!(key, week_key(d("2025-01-02")));
        assert_eq!(key.to_string(), "2025-W01");
        // while the preceding Saturday is still in 2024-W52
        assert_eq!(week_key(d("2024-12-28")).to_string(), "2024-W52");
    }
}
