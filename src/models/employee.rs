//! Employee model.
//!
//! An employee holds skill tags, dates they cannot work, and two personal
//! limits: a hard weekly-hour cap and the consecutive-workday count beyond
//! which the objective starts penalizing. Employees are immutable once
//! loaded.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weekly hour cap applied when the input gives none.
pub const DEFAULT_MAX_HOURS_PER_WEEK: u32 = 40;

/// Consecutive-workday limit applied when the input gives none.
pub const DEFAULT_MAX_CONSECUTIVE_DAYS: u32 = 5;

/// A worker who can be assigned to shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Skill tags this employee holds.
    pub skills: HashSet<String>,
    /// Calendar days this employee cannot work.
    pub unavailable_dates: HashSet<NaiveDate>,
    /// Hard cap on assigned hours per ISO calendar week.
    pub max_hours_per_week: u32,
    /// Workday run length beyond which the objective penalizes.
    pub max_consecutive_days: u32,
}

impl Employee {
    /// Creates an employee with default limits and no skills.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            skills: HashSet::new(),
            unavailable_dates: HashSet::new(),
            max_hours_per_week: DEFAULT_MAX_HOURS_PER_WEEK,
            max_consecutive_days: DEFAULT_MAX_CONSECUTIVE_DAYS,
        }
    }

    /// Adds skill tags.
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for skill in skills {
            self.skills.insert(skill.into());
        }
        self
    }

    /// Adds unavailable dates.
    pub fn with_unavailable_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.unavailable_dates.extend(dates);
        self
    }

    /// Sets the weekly hour cap.
    pub fn with_max_hours_per_week(mut self, hours: u32) -> Self {
        self.max_hours_per_week = hours;
        self
    }

    /// Sets the consecutive-workday limit.
    pub fn with_max_consecutive_days(mut self, days: u32) -> Self {
        self.max_consecutive_days = days;
        self
    }

    /// Whether this employee holds every skill in `required`.
    pub fn has_skills(&self, required: &HashSet<String>) -> bool {
        required.is_subset(&self.skills)
    }

    /// Whether this employee cannot work on `date`.
    pub fn is_unavailable_on(&self, date: NaiveDate) -> bool {
        self.unavailable_dates.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    #[test]
    fn test_employee_builder() {
        let e = Employee::new("alice")
            .with_skills(["nurse", "triage"])
            .with_unavailable_dates([d("2024-03-08")])
            .with_max_hours_per_week(32)
            .with_max_consecutive_days(4);

        assert_eq!(e.id, "alice");
        assert!(e.skills.contains("nurse"));
        assert_eq!(e.max_hours_per_week, 32);
        assert_eq!(e.max_consecutive_days, 4);
        assert!(e.is_unavailable_on(d("2024-03-08")));
        assert!(!e.is_unavailable_on(d("2024-03-09")));
    }

    #[test]
    fn test_defaults() {
        let e = Employee::new("bob");
        assert_eq!(e.max_hours_per_week, DEFAULT_MAX_HOURS_PER_WEEK);
        assert_eq!(e.max_consecutive_days, DEFAULT_MAX_CONSECUTIVE_DAYS);
    }

    #[test]
    fn test_has_skills_is_subset_check() {
        let e = Employee::new("alice").with_skills(["nurse", "triage"]);

        let nurse_only: HashSet<String> = ["nurse".to_string()].into_iter().collect();
        let with_surgery: HashSet<String> = ["nurse".to_string(), "surgery".to_string()]
            .into_iter()
            .collect();
        let none: HashSet<String> = HashSet::new();

        assert!(e.has_skills(&nurse_only));
        assert!(!e.has_skills(&with_surgery));
        assert!(e.has_skills(&none));
    }
}
