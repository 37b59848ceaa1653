//! Constraint and objective weight configuration.
//!
//! The category set is fixed. Only `employee_preferences` and
//! `consecutive_days` feed the objective in this core; the other
//! categories are accepted for forward compatibility and currently
//! produce no terms. The table is immutable configuration, threaded
//! explicitly into the model builder.

use serde::{Deserialize, Serialize};

/// Weight per constraint/objective category.
///
/// Values are non-negative; the objective truncates them to integers
/// before use, since the underlying linear objective wants integral
/// coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveWeights {
    pub shift_coverage: f64,
    pub no_double_booking: f64,
    pub skill_requirements: f64,
    pub availability: f64,
    pub max_hours_per_week: f64,
    /// Multiplier on the per-assignment preference score.
    pub employee_preferences: f64,
    pub workload_fairness: f64,
    /// Penalty per overlong run of consecutive workdays.
    pub consecutive_days: f64,
    pub rest_periods: f64,
    pub shift_continuity: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            shift_coverage: 100.0,
            no_double_booking: 90.0,
            skill_requirements: 85.0,
            availability: 80.0,
            max_hours_per_week: 75.0,
            employee_preferences: 55.0,
            workload_fairness: 40.0,
            consecutive_days: 30.0,
            rest_periods: 25.0,
            shift_continuity: 20.0,
        }
    }
}

impl ObjectiveWeights {
    /// Preference multiplier, truncated for the integer objective.
    pub fn preference_weight(&self) -> i64 {
        self.employee_preferences.trunc() as i64
    }

    /// Consecutive-day penalty, truncated for the integer objective.
    pub fn consecutive_days_weight(&self) -> i64 {
        self.consecutive_days.trunc() as i64
    }

    /// All categories with their names, for validation and reporting.
    pub fn as_named(&self) -> [(&'static str, f64); 10] {
        [
            ("shift_coverage", self.shift_coverage),
            ("no_double_booking", self.no_double_booking),
            ("skill_requirements", self.skill_requirements),
            ("availability", self.availability),
            ("max_hours_per_week", self.max_hours_per_week),
            ("employee_preferences", self.employee_preferences),
            ("workload_fairness", self.workload_fairness),
            ("consecutive_days", self.consecutive_days),
            ("rest_periods", self.rest_periods),
            ("shift_continuity", self.shift_continuity),
        ]
    }
}
