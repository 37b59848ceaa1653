//! Soft objective terms.
//!
//! Two weighted families feed a single maximized linear sum:
//! per-assignment preference scores, and penalties for every window of
//! `max_consecutive_days + 1` worked dates. Weights truncate to integers
//! before use; the linear objective wants integral coefficients and the
//! truncation is the documented precision loss. Fairness, rest-period and
//! continuity weights are accepted without producing terms.

use tracing::debug;

use crate::solver::{LinearTerm, SolverBackend};

use super::RosterCpBuilder;

impl<B: SolverBackend> RosterCpBuilder<'_, B> {
    /// Collects every soft term and hands the backend the maximization
    /// directive.
    pub(super) fn build_objective(&mut self) {
        let mut terms: Vec<LinearTerm<B::Var>> = Vec::new();
        self.add_preference_terms(&mut terms);
        self.add_consecutive_day_terms(&mut terms);
        debug!(terms = terms.len(), "objective assembled");
        self.backend.set_objective_maximize(&terms);
    }

    /// One term per assignment variable: preference score (+10/0/-10)
    /// times the truncated preference weight.
    fn add_preference_terms(&mut self, terms: &mut Vec<LinearTerm<B::Var>>) {
        let weight = self.problem.weights.preference_weight();
        for (s_idx, shift) in self.problem.shifts.iter().enumerate() {
            for (e_idx, employee) in self.problem.employees.iter().enumerate() {
                let score = self.problem.preferences.score(&employee.id, &shift.id);
                terms.push((self.var(e_idx, s_idx), score * weight));
            }
        }
    }

    /// Consecutive-workday penalties.
    ///
    /// Per employee: one day-worked indicator per shift date (the or of
    /// that date's assignment variables), then one indicator per sliding
    /// window of `max_consecutive_days + 1` sorted dates, equivalent to
    /// "every day in the window worked". The equivalence must be reified
    /// in both directions; a one-sided implication would let the solver
    /// leave the indicator false and dodge the penalty. Employees whose
    /// horizon is shorter than a window contribute nothing.
    fn add_consecutive_day_terms(&mut self, terms: &mut Vec<LinearTerm<B::Var>>) {
        let weight = self.problem.weights.consecutive_days_weight();
        let by_date = self.problem.shifts_by_date();

        for (e_idx, employee) in self.problem.employees.iter().enumerate() {
            let window = employee.max_consecutive_days as usize + 1;
            if by_date.len() < window {
                continue;
            }

            let mut day_worked: Vec<B::Var> = Vec::with_capacity(by_date.len());
            for (date, shift_idxs) in &by_date {
                let day_shifts: Vec<B::Var> = shift_idxs
                    .iter()
                    .map(|&s_idx| self.var(e_idx, s_idx))
                    .collect();
                let day_var = self
                    .backend
                    .new_bool_var(&format!("worked_e{}_d{}", employee.id, date));
                self.backend.add_max_equality(day_var, &day_shifts);
                day_worked.push(day_var);
            }

            for (w_idx, run) in day_worked.windows(window).enumerate() {
                let indicator = self
                    .backend
                    .new_bool_var(&format!("consec_e{}_w{}", employee.id, w_idx));
                let run_terms: Vec<LinearTerm<B::Var>> =
                    run.iter().map(|&day| (day, 1)).collect();
                self.backend
                    .add_reified_equality(&run_terms, run.len() as i64, indicator);
                terms.push((indicator, -weight));
            }
        }
    }
}
