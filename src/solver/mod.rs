//! External solver contract.
//!
//! The model builder emits boolean decision variables, linear constraints
//! and a maximization objective through [`SolverBackend`]; the search
//! itself is the backend's business. One production backend ships with
//! the crate ([`MilpSolver`], built on `good_lp`); anything honoring the
//! trait can be swapped in. A backend instance carries exactly one model
//! and is consumed by its solve.

mod milp;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::Duration;

pub use milp::MilpSolver;

/// A variable with an integer coefficient, one addend of a linear sum.
pub type LinearTerm<V> = (V, i64);

/// Terminal solver status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// A provably best assignment was found.
    Optimal,
    /// An assignment was found; optimality was not proven (for example
    /// because the time budget ran out first).
    Feasible,
    /// The hard constraints admit no assignment.
    Infeasible,
    /// The backend rejected the model itself.
    ModelInvalid,
    /// The backend gave up without a verdict. Not proof of infeasibility.
    Unknown,
}

impl SolveStatus {
    /// Whether an assignment can be extracted.
    pub fn is_success(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }

    /// Wire-format name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::Feasible => "FEASIBLE",
            SolveStatus::Infeasible => "INFEASIBLE",
            SolveStatus::ModelInvalid => "MODEL_INVALID",
            SolveStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a finished solve reports back.
#[derive(Debug, Clone)]
pub struct SolveOutcome<V> {
    /// Terminal status.
    pub status: SolveStatus,
    /// Objective value; present when `status.is_success()`.
    pub objective_value: Option<f64>,
    /// Wall-clock time the search took.
    pub wall_time: Duration,
    /// Search branches explored (0 when the backend does not report it).
    pub num_branches: u64,
    /// Search conflicts hit (0 when the backend does not report it).
    pub num_conflicts: u64,
    values: HashMap<V, bool>,
}

impl<V: Copy + Eq + Hash> SolveOutcome<V> {
    /// Outcome for a terminal status with no usable assignment.
    pub fn failed(status: SolveStatus, wall_time: Duration) -> Self {
        Self {
            status,
            objective_value: None,
            wall_time,
            num_branches: 0,
            num_conflicts: 0,
            values: HashMap::new(),
        }
    }

    /// Outcome carrying a solution.
    pub fn solved(
        status: SolveStatus,
        objective_value: f64,
        wall_time: Duration,
        values: HashMap<V, bool>,
    ) -> Self {
        Self {
            status,
            objective_value: Some(objective_value),
            wall_time,
            num_branches: 0,
            num_conflicts: 0,
            values,
        }
    }

    /// Solved value of a boolean variable; `false` when the backend never
    /// saw the variable or found no assignment.
    pub fn value(&self, var: V) -> bool {
        self.values.get(&var).copied().unwrap_or(false)
    }
}

/// Model-building and solving surface of an external combinatorial
/// solver.
///
/// Variables are booleans. Constraints are linear (in)equalities over
/// integer-weighted sums, plus the two boolean conveniences the roster
/// model needs: logical or (`add_max_equality`) and conjunction
/// reification (`add_reified_equality`).
pub trait SolverBackend {
    /// Backend-owned variable handle.
    type Var: Copy + Eq + Hash + fmt::Debug;

    /// Creates a boolean decision variable.
    fn new_bool_var(&mut self, name: &str) -> Self::Var;

    /// Sum of coefficient-weighted terms is at least `bound`.
    fn add_linear_lower_bound(&mut self, terms: &[LinearTerm<Self::Var>], bound: i64);

    /// Sum of coefficient-weighted terms is at most `bound`.
    fn add_linear_upper_bound(&mut self, terms: &[LinearTerm<Self::Var>], bound: i64);

    /// Sum of coefficient-weighted terms equals `bound`.
    fn add_linear_equality(&mut self, terms: &[LinearTerm<Self::Var>], bound: i64);

    /// `indicator` is true exactly when the sum equals `bound`.
    ///
    /// Both implication directions are required: a one-sided encoding
    /// lets the solver pick the indicator value that dodges its
    /// objective contribution.
    fn add_reified_equality(
        &mut self,
        terms: &[LinearTerm<Self::Var>],
        bound: i64,
        indicator: Self::Var,
    );

    /// `target` equals the maximum of `sources`; logical or over
    /// booleans.
    fn add_max_equality(&mut self, target: Self::Var, sources: &[Self::Var]);

    /// Maximize the sum of coefficient-weighted terms.
    fn set_objective_maximize(&mut self, terms: &[LinearTerm<Self::Var>]);

    /// Runs the search within the wall-clock budget and reports exactly
    /// one terminal status.
    fn solve(self, time_limit: Duration) -> SolveOutcome<Self::Var>
    where
        Self: Sized;
}
