//! Employee shift preferences.
//!
//! A fixed three-level scale: a shift an employee asked for scores +10,
//! one they asked to avoid scores -10, and anything else is neutral at 0.
//! The scores feed the soft objective; they never make a shift
//! unassignable.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Score of a shift on the employee's preferred list.
pub const PREFERRED_SCORE: i64 = 10;

/// Score of a shift on the employee's avoid list.
pub const AVOIDED_SCORE: i64 = -10;

/// One employee's likes and dislikes, as shift identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftPreference {
    /// Shifts this employee wants.
    pub preferred: HashSet<String>,
    /// Shifts this employee wants to avoid.
    pub avoided: HashSet<String>,
}

impl ShiftPreference {
    /// Creates an empty (all-neutral) preference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds preferred shifts.
    pub fn with_preferred(mut self, shifts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for shift in shifts {
            self.preferred.insert(shift.into());
        }
        self
    }

    /// Adds avoided shifts.
    pub fn with_avoided(mut self, shifts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for shift in shifts {
            self.avoided.insert(shift.into());
        }
        self
    }

    /// Score of one shift on the three-level scale.
    pub fn score(&self, shift_id: &str) -> i64 {
        if self.preferred.contains(shift_id) {
            PREFERRED_SCORE
        } else if self.avoided.contains(shift_id) {
            AVOIDED_SCORE
        } else {
            0
        }
    }
}

/// Preferences for the whole roster, keyed by employee identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    by_employee: HashMap<String, ShiftPreference>,
}

impl Preferences {
    /// Creates an empty preference table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one employee's preference.
    pub fn insert(&mut self, employee_id: impl Into<String>, preference: ShiftPreference) {
        self.by_employee.insert(employee_id.into(), preference);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, employee_id: impl Into<String>, preference: ShiftPreference) -> Self {
        self.insert(employee_id, preference);
        self
    }

    /// Preference record of one employee, if any.
    pub fn get(&self, employee_id: &str) -> Option<&ShiftPreference> {
        self.by_employee.get(employee_id)
    }

    /// Score of an (employee, shift) pair; employees without a record are
    /// neutral about everything.
    pub fn score(&self, employee_id: &str, shift_id: &str) -> i64 {
        self.by_employee
            .get(employee_id)
            .map(|p| p.score(shift_id))
            .unwrap_or(0)
    }

    /// Iterates over all per-employee records.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ShiftPreference)> {
        self.by_employee.iter()
    }

    /// Number of employees with a preference record.
    pub fn len(&self) -> usize {
        self.by_employee.len()
    }

    /// Whether no employee has a preference record.
    pub fn is_empty(&self) -> bool {
        self.by_employee.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_level_scale() {
        let pref = ShiftPreference::new()
            .with_preferred(["S1"])
            .with_avoided(["S2"]);

        assert_eq!(pref.score("S1"), PREFERRED_SCORE);
        assert_eq!(pref.score("S2"), AVOIDED_SCORE);
        assert_eq!(pref.score("S3"), 0);
    }

    #[test]
    fn test_unknown_employee_is_neutral() {
        let prefs = Preferences::new().with(
            "alice",
            ShiftPreference::new().with_preferred(["S1"]),
        );

        assert_eq!(prefs.score("alice", "S1"), 10);
        assert_eq!(prefs.score("bob", "S1"), 0);
    }

    #[test]
    fn test_table_accessors() {
        let prefs = Preferences::new().with("alice", ShiftPreference::new());
        assert_eq!(prefs.len(), 1);
        assert!(!prefs.is_empty());
        assert!(prefs.get("alice").is_some());
        assert!(prefs.get("bob").is_none());
    }
}
