//! Staff shift scheduling via constraint optimization.
//!
//! Turns a roster of shifts, employees, skills, availability and
//! preferences into a boolean constraint/objective program, hands it to
//! an external combinatorial solver, and decodes the result into a
//! schedule with coverage statistics.
//!
//! # Modules
//!
//! - **`models`**: domain types: `Shift`, `Employee`, `Preferences`,
//!   `ObjectiveWeights`, `Problem`, `Roster`
//! - **`time`**: clock-of-day parsing, overnight-aware durations, ISO week keys
//! - **`overlap`**: same-date shift conflict groups
//! - **`validation`**: input integrity checks, collected exhaustively
//! - **`cp`**: the model builder and solve orchestration
//! - **`solver`**: the external-solver contract and the bundled MILP backend
//! - **`kpi`**: coverage statistics
//! - **`dto`**: the JSON wire contract
//!
//! # Architecture
//!
//! Model construction is single-threaded, pure in-memory assembly over
//! one exclusively-owned `Problem`; the solve step is a single blocking
//! call into the backend under a wall-clock budget. Coverage, double
//! booking, skills, availability and weekly hours are hard constraints;
//! preferences and consecutive-day runs are weighted objective terms.
//!
//! # References
//!
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Van den Bergh et al. (2013), "Personnel Scheduling: A Literature Review"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod cp;
pub mod dto;
pub mod error;
pub mod kpi;
pub mod logging;
pub mod models;
pub mod overlap;
pub mod solver;
pub mod time;
pub mod validation;
