//! Problem aggregate.
//!
//! Owns the immutable inputs for one solve: shifts, employees,
//! preferences and weights. The model builder borrows a `Problem` for
//! the lifetime of one model build; nothing here changes during or after
//! solving.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Employee, ObjectiveWeights, Preferences, Shift};
use crate::time::{week_key, WeekKey};

/// One scheduling problem instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Problem {
    /// Shifts to staff.
    pub shifts: Vec<Shift>,
    /// Workers available for assignment.
    pub employees: Vec<Employee>,
    /// Per-employee shift preferences.
    pub preferences: Preferences,
    /// Weight configuration.
    pub weights: ObjectiveWeights,
}

impl Problem {
    /// Creates a problem with default weights and no preferences.
    pub fn new(shifts: Vec<Shift>, employees: Vec<Employee>) -> Self {
        Self {
            shifts,
            employees,
            preferences: Preferences::new(),
            weights: ObjectiveWeights::default(),
        }
    }

    /// Sets the preference table.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Sets the weight configuration.
    pub fn with_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Number of shifts.
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }

    /// Number of employees.
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Shift indices grouped by calendar date, dates ascending.
    pub fn shifts_by_date(&self) -> BTreeMap<NaiveDate, Vec<usize>> {
        let mut by_date: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
        for (idx, shift) in self.shifts.iter().enumerate() {
            by_date.entry(shift.date).or_default().push(idx);
        }
        by_date
    }

    /// Shift indices grouped by ISO calendar week.
    pub fn shifts_by_week(&self) -> BTreeMap<WeekKey, Vec<usize>> {
        let mut by_week: BTreeMap<WeekKey, Vec<usize>> = BTreeMap::new();
        for (idx, shift) in self.shifts.iter().enumerate() {
            by_week.entry(week_key(shift.date)).or_default().push(idx);
        }
        by_week
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ClockTime;

    fn t(text: &str) -> ClockTime {
        text.parse().unwrap()
    }

    fn d(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    fn sample_problem() -> Problem {
        Problem::new(
            vec![
                Shift::new("S1", d("2024-03-04"), t("09:00"), t("17:00")),
                Shift::new("S2", d("2024-03-04"), t("12:00"), t("20:00")),
                Shift::new("S3", d("2024-03-11"), t("09:00"), t("17:00")),
            ],
            vec![Employee::new("alice"), Employee::new("bob")],
        )
    }

    #[test]
    fn test_counts() {
        let p = sample_problem();
        assert_eq!(p.shift_count(), 3);
        assert_eq!(p.employee_count(), 2);
    }

    #[test]
    fn test_shifts_by_date() {
        let p = sample_problem();
        let by_date = p.shifts_by_date();
        assert_eq!(by_date.len(), 2);
        assert_eq!(by_date[&d("2024-03-04")], vec![0, 1]);
        assert_eq!(by_date[&d("2024-03-11")], vec![2]);
    }

    #[test]
    fn test_shifts_by_week() {
        let p = sample_problem();
        let by_week = p.shifts_by_week();
        // 2024-03-04 and 2024-03-11 fall in different ISO weeks.
        assert_eq!(by_week.len(), 2);
        let weeks: Vec<Vec<usize>> = by_week.into_values().collect();
        assert_eq!(weeks, vec![vec![0, 1], vec![2]]);
    }
}
