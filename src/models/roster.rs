//! Roster (solution) model.
//!
//! A roster is the set of (employee, shift) pairs the solver switched on,
//! annotated with the shift's date, clock times and worked hours. It is
//! produced once per solve and never mutated afterwards.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Shift;
use crate::time::ClockTime;

/// A solved schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Accepted employee-to-shift assignments.
    pub assignments: Vec<Assignment>,
}

/// One employee working one shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned employee.
    pub employee_id: String,
    /// Covered shift.
    pub shift_id: String,
    /// Calendar day of the shift.
    pub date: NaiveDate,
    /// Clock-of-day start.
    #[serde(rename = "start_time")]
    pub start: ClockTime,
    /// Clock-of-day end.
    #[serde(rename = "end_time")]
    pub end: ClockTime,
    /// Worked hours.
    pub hours: i64,
}

impl Assignment {
    /// Creates an assignment, denormalizing the shift's schedule data.
    pub fn new(employee_id: impl Into<String>, shift: &Shift) -> Self {
        Self {
            employee_id: employee_id.into(),
            shift_id: shift.id.clone(),
            date: shift.date,
            start: shift.start,
            end: shift.end,
            hours: shift.duration_hours(),
        }
    }
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the roster holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// All assignments of one employee.
    pub fn assignments_for_employee(&self, employee_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .collect()
    }

    /// All assignments covering one shift.
    pub fn assignments_for_shift(&self, shift_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.shift_id == shift_id)
            .collect()
    }

    /// Head count per shift identifier.
    pub fn assigned_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for a in &self.assignments {
            *counts.entry(a.shift_id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Head count on one shift.
    pub fn assigned_count(&self, shift_id: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.shift_id == shift_id)
            .count()
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

    fn sample_roster() -> Roster {
        let day = Shift::new("day", d("2024-03-04"), t("09:00"), t("17:00"));
        let night = Shift::new("night", d("2024-03-04"), t("22:00"), t("06:00"));

        let mut roster = Roster::new();
        roster.add_assignment(Assignment::new("alice", &day));
        roster.add_assignment(Assignment::new("bob", &day));
        roster.add_assignment(Assignment::new("carol", &night));
        roster
    }

    #[test]
    fn test_assignment_denormalizes_shift() {
        let night = Shift::new("night", d("2024-03-04"), t("22:00"), t("06:00"));
        let a = Assignment::new("carol", &night);
        assert_eq!(a.shift_id, "night");
        assert_eq!(a.date, d("2024-03-04"));
        assert_eq!(a.hours, 8);
    }

    #[test]
    fn test_queries() {
        let roster = sample_roster();
        assert_eq!(roster.assignment_count(), 3);
        assert_eq!(roster.assignments_for_employee("alice").len(), 1);
        assert_eq!(roster.assignments_for_shift("day").len(), 2);
        assert_eq!(roster.assigned_count("day"), 2);
        assert_eq!(roster.assigned_count("night"), 1);
        assert_eq!(roster.assigned_count("missing"), 0);
    }

    #[test]
    fn test_assigned_counts() {
        let roster = sample_roster();
        let counts = roster.assigned_counts();
        assert_eq!(counts["day"], 2);
        assert_eq!(counts["night"], 1);
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.assignment_count(), 0);
    }
}
