//! Constraint-programming roster formulation.
//!
//! Translates a `Problem` into boolean assignment variables, hard
//! constraints and a weighted soft objective against a
//! [`SolverBackend`](crate::solver::SolverBackend), then decodes the
//! backend's solution into a `Roster` with coverage statistics.
//!
//! Hard constraint families (violating any means infeasibility):
//! - coverage: per-shift head count within `[min_staff, max_staff]`
//! - no double booking: at most one shift per overlap group per employee
//!   and date
//! - skill eligibility: unqualified pairs pinned to zero
//! - availability: pairs on unavailable dates pinned to zero
//! - weekly hours: per ISO week, assigned hours within the employee cap
//!
//! Soft terms (preferences, consecutive-day penalties) live in the
//! `objective` submodule.
//!
//! # Reference
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Van den Bergh et al. (2013), "Personnel Scheduling: A Literature Review"

mod objective;

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info};

use crate::kpi::CoverageStats;
use crate::models::{Assignment, Problem, Roster, Shift};
use crate::overlap::overlap_groups;
use crate::solver::{LinearTerm, SolveOutcome, SolveStatus, SolverBackend};

/// Wall-clock budget handed to the backend when the caller names none.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(300);

/// Builds the roster model inside a solver backend and orchestrates the
/// solve.
///
/// The builder exclusively owns the decision-variable table for the
/// lifetime of one solve; a new problem means a new builder.
pub struct RosterCpBuilder<'a, B: SolverBackend> {
    backend: B,
    problem: &'a Problem,
    /// One boolean per (employee index, shift index) pair.
    vars: HashMap<(usize, usize), B::Var>,
    built: bool,
}

/// What one solve reports back to the caller.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Terminal status.
    pub status: SolveStatus,
    /// Objective value; present when `status.is_success()`.
    pub objective_value: Option<f64>,
    /// Wall-clock time the search took.
    pub solve_time: Duration,
    /// Search branches explored (0 when the backend does not report it).
    pub num_branches: u64,
    /// Search conflicts hit (0 when the backend does not report it).
    pub num_conflicts: u64,
    /// Extracted assignments; empty unless `status.is_success()`.
    pub roster: Roster,
    /// Coverage statistics; present only on success.
    pub coverage: Option<CoverageStats>,
}

impl<'a, B: SolverBackend> RosterCpBuilder<'a, B> {
    /// Creates a builder over a validated problem.
    pub fn new(backend: B, problem: &'a Problem) -> Self {
        Self {
            backend,
            problem,
            vars: HashMap::new(),
            built: false,
        }
    }

    /// Populates the backend with variables, hard constraints and the
    /// objective. Idempotent; [`solve`](Self::solve) calls it when
    /// needed.
    pub fn build(&mut self) {
        if self.built {
            return;
        }
        self.create_assignment_vars();
        self.add_coverage();
        self.add_no_double_booking();
        self.add_skill_requirements();
        self.add_availability();
        self.add_max_weekly_hours();
        self.build_objective();
        self.built = true;
        debug!(variables = self.vars.len(), "roster model built");
    }

    /// Number of assignment variables created so far.
    pub fn variable_count(&self) -> usize {
        self.vars.len()
    }

    /// Releases the populated backend, for callers driving the search
    /// themselves.
    pub fn into_backend(mut self) -> B {
        self.build();
        self.backend
    }

    /// Runs the build (if pending) and the backend search, then decodes.
    ///
    /// One invocation, one terminal status. Inconclusive statuses come
    /// back with an empty roster and no statistics; retrying is the
    /// caller's decision, never this crate's.
    pub fn solve(mut self, time_limit: Duration) -> SolveReport {
        self.build();
        info!(
            shifts = self.problem.shift_count(),
            employees = self.problem.employee_count(),
            time_limit_seconds = time_limit.as_secs(),
            "solving roster model"
        );

        let Self {
            backend,
            problem,
            vars,
            ..
        } = self;
        let outcome = backend.solve(time_limit);
        info!(
            status = %outcome.status,
            seconds = outcome.wall_time.as_secs_f64(),
            "solver finished"
        );

        let (roster, coverage) = if outcome.status.is_success() {
            let roster = Self::decode_solution(problem, &vars, &outcome);
            let coverage = CoverageStats::calculate(&roster, &problem.shifts);
            (roster, Some(coverage))
        } else {
            (Roster::new(), None)
        };

        SolveReport {
            status: outcome.status,
            objective_value: outcome.objective_value,
            solve_time: outcome.wall_time,
            num_branches: outcome.num_branches,
            num_conflicts: outcome.num_conflicts,
            roster,
            coverage,
        }
    }

    fn var(&self, e_idx: usize, s_idx: usize) -> B::Var {
        self.vars[&(e_idx, s_idx)]
    }

    /// One boolean per (employee, shift) pair, created exactly once.
    fn create_assignment_vars(&mut self) {
        for (s_idx, shift) in self.problem.shifts.iter().enumerate() {
            for (e_idx, employee) in self.problem.employees.iter().enumerate() {
                let name = format!("assign_e{}_s{}", employee.id, shift.id);
                let var = self.backend.new_bool_var(&name);
                self.vars.insert((e_idx, s_idx), var);
            }
        }
    }

    /// Per shift: head count within `[min_staff, max_staff]`.
    fn add_coverage(&mut self) {
        for (s_idx, shift) in self.problem.shifts.iter().enumerate() {
            let terms: Vec<LinearTerm<B::Var>> = (0..self.problem.employees.len())
                .map(|e_idx| (self.var(e_idx, s_idx), 1))
                .collect();
            self.backend
                .add_linear_lower_bound(&terms, i64::from(shift.min_staff));
            self.backend
                .add_linear_upper_bound(&terms, i64::from(shift.max_staff));
        }
    }

    /// Per employee and overlap group: at most one of the group's shifts.
    fn add_no_double_booking(&mut self) {
        // Overlap groups depend only on the date's shifts; compute once
        // per date and reuse across employees.
        for shift_idxs in self.problem.shifts_by_date().values() {
            let dated: Vec<(usize, &Shift)> = shift_idxs
                .iter()
                .map(|&s_idx| (s_idx, &self.problem.shifts[s_idx]))
                .collect();
            for group in overlap_groups(&dated) {
                for e_idx in 0..self.problem.employees.len() {
                    let terms: Vec<LinearTerm<B::Var>> = group
                        .iter()
                        .map(|&s_idx| (self.var(e_idx, s_idx), 1))
                        .collect();
                    self.backend.add_linear_upper_bound(&terms, 1);
                }
            }
        }
    }

    /// Pairs whose shift demands skills the employee lacks are pinned
    /// false. A point constraint, not a penalty.
    fn add_skill_requirements(&mut self) {
        for (s_idx, shift) in self.problem.shifts.iter().enumerate() {
            if shift.required_skills.is_empty() {
                continue;
            }
            for (e_idx, employee) in self.problem.employees.iter().enumerate() {
                if !employee.has_skills(&shift.required_skills) {
                    let pinned = [(self.var(e_idx, s_idx), 1)];
                    self.backend.add_linear_equality(&pinned, 0);
                }
            }
        }
    }

    /// Pairs landing on an employee's unavailable date are pinned false.
    fn add_availability(&mut self) {
        for (e_idx, employee) in self.problem.employees.iter().enumerate() {
            for (s_idx, shift) in self.problem.shifts.iter().enumerate() {
                if employee.is_unavailable_on(shift.date) {
                    let pinned = [(self.var(e_idx, s_idx), 1)];
                    self.backend.add_linear_equality(&pinned, 0);
                }
            }
        }
    }

    /// Per employee and ISO week: assigned hours within the weekly cap.
    fn add_max_weekly_hours(&mut self) {
        let weeks = self.problem.shifts_by_week();
        for (e_idx, employee) in self.problem.employees.iter().enumerate() {
            for shift_idxs in weeks.values() {
                let terms: Vec<LinearTerm<B::Var>> = shift_idxs
                    .iter()
                    .map(|&s_idx| {
                        (
                            self.var(e_idx, s_idx),
                            self.problem.shifts[s_idx].duration_hours(),
                        )
                    })
                    .collect();
                self.backend
                    .add_linear_upper_bound(&terms, i64::from(employee.max_hours_per_week));
            }
        }
    }

    /// Extracts every true assignment variable into a roster entry, in
    /// shift-major order.
    fn decode_solution(
        problem: &Problem,
        vars: &HashMap<(usize, usize), B::Var>,
        outcome: &SolveOutcome<B::Var>,
    ) -> Roster {
        let mut roster = Roster::new();
        for (s_idx, shift) in problem.shifts.iter().enumerate() {
            for (e_idx, employee) in problem.employees.iter().enumerate() {
                if outcome.value(vars[&(e_idx, s_idx)]) {
                    roster.add_assignment(Assignment::new(&employee.id, shift));
                }
            }
        }
        roster
    }
}
