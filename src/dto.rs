//! JSON payload types for the scheduling boundary.
//!
//! Field names match the wire contract: `shifts[]`, `employees[]`,
//! `preferences{}`, `weights{}` in; `status`, `objective_value`,
//! `solve_time_seconds`, `assignments[]`, `statistics{}` out. The
//! `skills` and `constraints` input blobs are accepted for compatibility
//! and not consulted. Conversion into the domain `Problem` runs the full
//! validation pass; nothing from a rejected payload is partially
//! applied.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cp::SolveReport;
use crate::error::SchedulerError;
use crate::kpi::CoverageStats;
use crate::models::{
    Assignment, Employee, ObjectiveWeights, Preferences, Problem, Shift, ShiftPreference,
    DEFAULT_MAX_CONSECUTIVE_DAYS, DEFAULT_MAX_HOURS_PER_WEEK,
};
use crate::solver::SolveStatus;
use crate::time::ClockTime;
use crate::validation::validate_problem;

/// Top-level input payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemDto {
    pub shifts: Vec<ShiftDto>,
    pub employees: Vec<EmployeeDto>,
    /// Accepted for contract compatibility; not consulted.
    #[serde(default)]
    pub skills: serde_json::Value,
    #[serde(default)]
    pub preferences: HashMap<String, PreferenceDto>,
    /// Accepted for contract compatibility; not consulted.
    #[serde(default)]
    pub constraints: serde_json::Value,
    #[serde(default)]
    pub weights: ObjectiveWeights,
}

/// One shift as it arrives on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftDto {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default = "default_min_staff")]
    pub min_staff: u32,
    /// Defaults to `min_staff + 2` when absent.
    #[serde(default)]
    pub max_staff: Option<u32>,
    #[serde(default)]
    pub required_skills: HashSet<String>,
}

/// One employee as it arrives on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeDto {
    pub id: String,
    #[serde(default)]
    pub skills: HashSet<String>,
    #[serde(default)]
    pub unavailable_dates: HashSet<NaiveDate>,
    #[serde(default = "default_max_hours")]
    pub max_hours_per_week: u32,
    #[serde(default = "default_max_consecutive")]
    pub max_consecutive_days: u32,
}

/// One employee's preference lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferenceDto {
    #[serde(default)]
    pub preferred_shifts: Vec<String>,
    #[serde(default)]
    pub avoid_shifts: Vec<String>,
}

fn default_min_staff() -> u32 {
    1
}

fn default_max_hours() -> u32 {
    DEFAULT_MAX_HOURS_PER_WEEK
}

fn default_max_consecutive() -> u32 {
    DEFAULT_MAX_CONSECUTIVE_DAYS
}

impl ProblemDto {
    /// Parses a JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, SchedulerError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Converts into the domain problem, running input validation.
    pub fn into_problem(self) -> Result<Problem, SchedulerError> {
        let shifts = self.shifts.into_iter().map(ShiftDto::into_shift).collect();
        let employees = self
            .employees
            .into_iter()
            .map(EmployeeDto::into_employee)
            .collect();

        let mut preferences = Preferences::new();
        for (employee_id, dto) in self.preferences {
            preferences.insert(
                employee_id,
                ShiftPreference {
                    preferred: dto.preferred_shifts.into_iter().collect(),
                    avoided: dto.avoid_shifts.into_iter().collect(),
                },
            );
        }

        let problem = Problem {
            shifts,
            employees,
            preferences,
            weights: self.weights,
        };
        validate_problem(&problem).map_err(SchedulerError::Invalid)?;
        Ok(problem)
    }
}

impl ShiftDto {
    fn into_shift(self) -> Shift {
        let max_staff = self.max_staff.unwrap_or(self.min_staff + 2);
        Shift {
            id: self.id,
            date: self.date,
            start: self.start_time,
            end: self.end_time,
            min_staff: self.min_staff,
            max_staff,
            required_skills: self.required_skills,
        }
    }
}

impl EmployeeDto {
    fn into_employee(self) -> Employee {
        Employee {
            id: self.id,
            skills: self.skills,
            unavailable_dates: self.unavailable_dates,
            max_hours_per_week: self.max_hours_per_week,
            max_consecutive_days: self.max_consecutive_days,
        }
    }
}

/// Top-level output payload.
#[derive(Debug, Clone, Serialize)]
pub struct ResultDto {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_value: Option<f64>,
    pub solve_time_seconds: f64,
    pub assignments: Vec<Assignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<StatisticsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// Solve statistics, present only on success.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsDto {
    pub num_branches: u64,
    pub num_conflicts: u64,
    pub is_optimal: bool,
    pub total_assigned_shifts: usize,
    pub coverage_stats: CoverageStats,
}

impl ResultDto {
    /// Payload for a finished solve, successful or not.
    pub fn from_report(report: SolveReport) -> Self {
        let statistics = report.coverage.map(|coverage_stats| StatisticsDto {
            num_branches: report.num_branches,
            num_conflicts: report.num_conflicts,
            is_optimal: report.status == SolveStatus::Optimal,
            total_assigned_shifts: report.roster.assignment_count(),
            coverage_stats,
        });

        Self {
            status: report.status.to_string(),
            objective_value: report.objective_value,
            solve_time_seconds: report.solve_time.as_secs_f64(),
            assignments: report.roster.assignments,
            statistics,
            error: None,
            trace: None,
        }
    }

    /// Payload for a failure before or outside solving.
    pub fn from_error(err: &SchedulerError) -> Self {
        Self {
            status: "ERROR".to_string(),
            objective_value: None,
            solve_time_seconds: 0.0,
            assignments: Vec::new(),
            statistics: None,
            error: Some(err.to_string()),
            trace: Some(err.trace()),
        }
    }

    /// Renders the payload as pretty JSON.
    pub fn to_json(&self) -> Result<String, SchedulerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Roster;
    use std::time::Duration;

    const SAMPLE_PAYLOAD: &str = r#"{
        "shifts": [
            {
                "id": "S1",
                "date": "2024-03-04",
                "start_time": "09:00",
                "end_time": "17:00",
                "min_staff": 1,
                "max_staff": 2,
                "required_skills": ["nurse"]
            },
            {
                "id": "S2",
                "date": "2024-03-04",
                "start_time": "22:00",
                "end_time": "06:00"
            }
        ],
        "employees": [
            {
                "id": "alice",
                "skills": ["nurse"],
                "unavailable_dates": ["2024-03-08"],
                "max_hours_per_week": 32
            },
            { "id": "bob" }
        ],
        "skills": { "nurse": "registered nurse" },
        "preferences": {
            "alice": { "preferred_shifts": ["S1"], "avoid_shifts": ["S2"] }
        },
        "constraints": {},
        "weights": { "employee_preferences": 60.5 }
    }"#;

    #[test]
    fn test_parse_and_convert() {
        let problem = ProblemDto::from_json(SAMPLE_PAYLOAD)
            .unwrap()
            .into_problem()
            .unwrap();

        assert_eq!(problem.shift_count(), 2);
        assert_eq!(problem.employee_count(), 2);

        let s1 = &problem.shifts[0];
        assert_eq!(s1.max_staff, 2);
        assert!(s1.required_skills.contains("nurse"));

        // Missing staffing fields take the documented defaults.
        let s2 = &problem.shifts[1];
        assert_eq!(s2.min_staff, 1);
        assert_eq!(s2.max_staff, 3);
        assert_eq!(s2.duration_hours(), 8);

        let bob = &problem.employees[1];
        assert_eq!(bob.max_hours_per_week, 40);
        assert_eq!(bob.max_consecutive_days, 5);

        assert_eq!(problem.preferences.score("alice", "S1"), 10);
        assert_eq!(problem.preferences.score("alice", "S2"), -10);
        assert_eq!(problem.weights.preference_weight(), 60);
    }

    #[test]
    fn test_malformed_time_is_fatal() {
        let payload = r#"{
            "shifts": [
                { "id": "S1", "date": "2024-03-04", "start_time": "9am", "end_time": "17:00" }
            ],
            "employees": [ { "id": "alice" } ]
        }"#;

        let err = ProblemDto::from_json(payload).unwrap_err();
        assert!(matches!(err, SchedulerError::Payload(_)));
        assert!(err.to_string().contains("invalid clock time"));
    }

    #[test]
    fn test_unknown_preference_reference_is_fatal() {
        let payload = r#"{
            "shifts": [
                { "id": "S1", "date": "2024-03-04", "start_time": "09:00", "end_time": "17:00" }
            ],
            "employees": [ { "id": "alice" } ],
            "preferences": { "alice": { "preferred_shifts": ["GHOST"] } }
        }"#;

        let err = ProblemDto::from_json(payload)
            .unwrap()
            .into_problem()
            .unwrap_err();
        assert!(matches!(err, SchedulerError::Invalid(_)));
        assert!(err.to_string().contains("GHOST"));
    }

    #[test]
    fn test_success_payload_shape() {
        let shift = Shift::new(
            "S1",
            "2024-03-04".parse().unwrap(),
            "09:00".parse().unwrap(),
            "17:00".parse().unwrap(),
        );
        let mut roster = Roster::new();
        roster.add_assignment(Assignment::new("alice", &shift));

        let report = SolveReport {
            status: SolveStatus::Optimal,
            objective_value: Some(550.0),
            solve_time: Duration::from_millis(125),
            num_branches: 0,
            num_conflicts: 0,
            roster,
            coverage: Some(CoverageStats {
                total_shifts: 1,
                fully_covered_shifts: 1,
                coverage_percentage: 100.0,
            }),
        };

        let rendered = ResultDto::from_report(report).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["status"], "OPTIMAL");
        assert_eq!(value["objective_value"], 550.0);
        let assignment = &value["assignments"][0];
        assert_eq!(assignment["employee_id"], "alice");
        assert_eq!(assignment["shift_id"], "S1");
        assert_eq!(assignment["date"], "2024-03-04");
        assert_eq!(assignment["start_time"], "09:00");
        assert_eq!(assignment["end_time"], "17:00");
        assert_eq!(assignment["hours"], 8);
        let stats = &value["statistics"];
        assert_eq!(stats["is_optimal"], true);
        assert_eq!(stats["total_assigned_shifts"], 1);
        assert_eq!(stats["coverage_stats"]["coverage_percentage"], 100.0);
    }

    #[test]
    fn test_failure_payload_omits_statistics() {
        let report = SolveReport {
            status: SolveStatus::Infeasible,
            objective_value: None,
            solve_time: Duration::from_millis(10),
            num_branches: 0,
            num_conflicts: 0,
            roster: Roster::new(),
            coverage: None,
        };

        let rendered = ResultDto::from_report(report).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["status"], "INFEASIBLE");
        assert!(value["assignments"].as_array().unwrap().is_empty());
        assert!(value.get("statistics").is_none());
        assert!(value.get("objective_value").is_none());
    }

    #[test]
    fn test_error_payload() {
        let err = SchedulerError::Internal(anyhow::anyhow!("variable table corrupted"));
        let rendered = ResultDto::from_error(&err).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["status"], "ERROR");
        assert!(value["error"]
            .as_str()
            .unwrap()
            .contains("variable table corrupted"));
        assert!(value.get("trace").is_some());
    }
}
