//! Shift model.
//!
//! A shift is a staffed time interval on a specific calendar date that
//! needs between `min_staff` and `max_staff` workers, optionally gated on
//! skill tags. Shifts are immutable once loaded.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::{shift_duration_hours, ClockTime};

/// A shift to be staffed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift identifier.
    pub id: String,
    /// Calendar day the shift starts on.
    pub date: NaiveDate,
    /// Clock-of-day start.
    pub start: ClockTime,
    /// Clock-of-day end; numerically before `start` for overnight shifts.
    pub end: ClockTime,
    /// Fewest workers the shift can run with (at least 1).
    pub min_staff: u32,
    /// Most workers the shift may take (at least `min_staff`).
    pub max_staff: u32,
    /// Skill tags every assigned worker must hold.
    pub required_skills: HashSet<String>,
}

impl Shift {
    /// Creates a shift with default staffing (1 to 3 workers).
    pub fn new(id: impl Into<String>, date: NaiveDate, start: ClockTime, end: ClockTime) -> Self {
        Self {
            id: id.into(),
            date,
            start,
            end,
            min_staff: 1,
            max_staff: 3,
            required_skills: HashSet::new(),
        }
    }

    /// Sets the staffing bounds.
    pub fn with_staffing(mut self, min_staff: u32, max_staff: u32) -> Self {
        self.min_staff = min_staff;
        self.max_staff = max_staff;
        self
    }

    /// Adds required skill tags.
    pub fn with_required_skills(
        mut self,
        skills: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        for skill in skills {
            self.required_skills.insert(skill.into());
        }
        self
    }

    /// Worked hours, crossing midnight when the end precedes the start.
    #[inline]
    pub fn duration_hours(&self) -> i64 {
        shift_duration_hours(self.start, self.end)
    }
}
