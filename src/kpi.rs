//! Coverage statistics.
//!
//! Measures how much of the shift horizon reached its minimum staffing
//! in a solved roster. Computed once per successful solve; failure
//! statuses carry no statistics at all.

use serde::{Deserialize, Serialize};

use crate::models::{Roster, Shift};

/// Shift coverage indicators for one solved roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageStats {
    /// Shifts in the problem.
    pub total_shifts: usize,
    /// Shifts whose assigned head count reached `min_staff`.
    pub fully_covered_shifts: usize,
    /// `fully_covered_shifts / total_shifts * 100`, 0 for an empty
    /// horizon.
    pub coverage_percentage: f64,
}

impl CoverageStats {
    /// Computes coverage from a roster and its input shifts.
    pub fn calculate(roster: &Roster, shifts: &[Shift]) -> Self {
        let counts = roster.assigned_counts();
        let total_shifts = shifts.len();
        let fully_covered_shifts = shifts
            .iter()
            .filter(|shift| {
                counts.get(shift.id.as_str()).copied().unwrap_or(0) >= shift.min_staff as usize
            })
            .count();
        let coverage_percentage = if total_shifts == 0 {
            0.0
        } else {
            fully_covered_shifts as f64 / total_shifts as f64 * 100.0
        };

        Self {
            total_shifts,
            fully_covered_shifts,
            coverage_percentage,
        }
    }
}
