//! MILP backend on `good_lp`.
//!
//! Compiles the boolean model into mixed-integer linear form. The two
//! non-linear operations are encoded linearly over booleans:
//! - max equality (logical or): `target >= each source` and
//!   `target <= sum of sources`
//! - reified conjunction: `indicator <= each var` and
//!   `sum of vars - indicator <= n - 1`, which is the equivalence with
//!   both implication directions spelled out, since MILP has no native
//!   reification
//!
//! Reification is supported for unit-coefficient boolean sums whose bound
//! equals the term count (the conjunction case, the only shape the roster
//! model emits); other shapes are rejected loudly rather than encoded
//! wrong.
//!
//! The bundled `microlp` solver is pure Rust and proves optimality or
//! fails, so FEASIBLE is never produced here; it exists for time-limited
//! backends behind the same trait. The time budget is accepted for
//! contract parity and logged, but `microlp` exposes no cutoff knob.

use std::time::{Duration, Instant};

use good_lp::{
    constraint, default_solver, variable, Constraint, Expression, ProblemVariables,
    ResolutionError, Solution, SolverModel, Variable,
};
use tracing::{debug, warn};

use super::{LinearTerm, SolveOutcome, SolveStatus, SolverBackend};

/// Mixed-integer linear programming backend.
pub struct MilpSolver {
    vars: ProblemVariables,
    bools: Vec<Variable>,
    constraints: Vec<Constraint>,
    objective: Vec<(Variable, i64)>,
}

impl MilpSolver {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self {
            vars: ProblemVariables::new(),
            bools: Vec::new(),
            constraints: Vec::new(),
            objective: Vec::new(),
        }
    }

    /// Number of constraints emitted so far.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Number of variables created so far.
    pub fn variable_count(&self) -> usize {
        self.bools.len()
    }

    fn expression(terms: &[LinearTerm<Variable>]) -> Expression {
        terms
            .iter()
            .fold(Expression::from(0.0), |acc, (var, coeff)| {
                acc + (*coeff as f64) * *var
            })
    }
}

impl Default for MilpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBackend for MilpSolver {
    type Var = Variable;

    fn new_bool_var(&mut self, name: &str) -> Variable {
        let var = self.vars.add(variable().binary().name(name));
        self.bools.push(var);
        var
    }

    fn add_linear_lower_bound(&mut self, terms: &[LinearTerm<Variable>], bound: i64) {
        let sum = Self::expression(terms);
        let bound = bound as f64;
        self.constraints.push(constraint!(sum >= bound));
    }

    fn add_linear_upper_bound(&mut self, terms: &[LinearTerm<Variable>], bound: i64) {
        let sum = Self::expression(terms);
        let bound = bound as f64;
        self.constraints.push(constraint!(sum <= bound));
    }

    fn add_linear_equality(&mut self, terms: &[LinearTerm<Variable>], bound: i64) {
        let sum = Self::expression(terms);
        let bound = bound as f64;
        self.constraints.push(constraint!(sum == bound));
    }

    fn add_reified_equality(
        &mut self,
        terms: &[LinearTerm<Variable>],
        bound: i64,
        indicator: Variable,
    ) {
        let is_conjunction =
            terms.iter().all(|(_, coeff)| *coeff == 1) && bound == terms.len() as i64;
        if !is_conjunction {
            debug_assert!(false, "reified equality requires a boolean conjunction");
            warn!(
                bound,
                terms = terms.len(),
                "unsupported reified equality shape, constraint dropped"
            );
            return;
        }

        // indicator true forces every var true
        for (var, _) in terms {
            let implies = Expression::from(indicator) - *var;
            self.constraints.push(constraint!(implies <= 0.0));
        }
        // every var true forces the indicator true
        let conjunction = Self::expression(terms) - indicator;
        let slack = terms.len() as f64 - 1.0;
        self.constraints.push(constraint!(conjunction <= slack));
    }

    fn add_max_equality(&mut self, target: Variable, sources: &[Variable]) {
        for source in sources {
            let dominates = Expression::from(*source) - target;
            self.constraints.push(constraint!(dominates <= 0.0));
        }
        let cover: Expression = sources
            .iter()
            .fold(Expression::from(0.0), |acc, source| acc + *source)
            - target;
        self.constraints.push(constraint!(cover >= 0.0));
    }

    fn set_objective_maximize(&mut self, terms: &[LinearTerm<Variable>]) {
        self.objective = terms.to_vec();
    }

    fn solve(self, time_limit: Duration) -> SolveOutcome<Variable> {
        let MilpSolver {
            vars,
            bools,
            constraints,
            objective,
        } = self;

        debug!(
            variables = bools.len(),
            constraints = constraints.len(),
            time_limit_seconds = time_limit.as_secs(),
            "handing model to MILP solver"
        );

        let objective_expr = objective
            .iter()
            .fold(Expression::from(0.0), |acc, (var, coeff)| {
                acc + (*coeff as f64) * *var
            });

        let started = Instant::now();
        let mut model = vars.maximise(objective_expr).using(default_solver);
        for c in constraints {
            model = model.with(c);
        }

        match model.solve() {
            Ok(solution) => {
                let values = bools
                    .iter()
                    .map(|var| (*var, solution.value(*var) > 0.5))
                    .collect();
                let objective_value = objective
                    .iter()
                    .map(|(var, coeff)| *coeff as f64 * solution.value(*var).round())
                    .sum();
                SolveOutcome::solved(
                    SolveStatus::Optimal,
                    objective_value,
                    started.elapsed(),
                    values,
                )
            }
            Err(ResolutionError::Infeasible) => {
                SolveOutcome::failed(SolveStatus::Infeasible, started.elapsed())
            }
            Err(ResolutionError::Unbounded) => {
                SolveOutcome::failed(SolveStatus::ModelInvalid, started.elapsed())
            }
            Err(err) => {
                warn!(error = %err, "solver returned without a verdict");
                SolveOutcome::failed(SolveStatus::Unknown, started.elapsed())
            }
        }
    }
}
