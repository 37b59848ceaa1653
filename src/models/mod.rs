//! Rostering domain models.
//!
//! Core data types for representing staff scheduling problems and
//! solutions: what needs covering (`Shift`), who can cover it
//! (`Employee`), what people want (`Preferences`), how much each rule
//! matters (`ObjectiveWeights`), and what the solver decided (`Roster`).

mod employee;
mod preference;
mod problem;
mod roster;
mod shift;
mod weights;

pub use employee::{Employee, DEFAULT_MAX_CONSECUTIVE_DAYS, DEFAULT_MAX_HOURS_PER_WEEK};
pub use preference::{Preferences, ShiftPreference, AVOIDED_SCORE, PREFERRED_SCORE};
pub use problem::Problem;
pub use roster::{Assignment, Roster};
pub use shift::Shift;
pub use weights::ObjectiveWeights;
