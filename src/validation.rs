//! Input validation for scheduling problems.
//!
//! Checks structural integrity of shifts, employees, preferences and
//! weights before any model is built. Detects:
//! - Empty or duplicate IDs
//! - Staffing bounds out of order (zero minimum, maximum below minimum)
//! - Preferences referencing unknown employees or shifts
//! - Negative constraint weights
//!
//! Every check runs; the caller gets the full list of problems, and a
//! payload that fails validation is rejected whole.

use std::collections::HashSet;

use crate::models::Problem;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An entity has an empty ID.
    EmptyId,
    /// min_staff is zero or exceeds max_staff.
    InvalidStaffBounds,
    /// A preference references an employee or shift that doesn't exist.
    UnknownReference,
    /// A weight is negative or not a number.
    NegativeWeight,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem before model construction.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    let mut shift_ids = HashSet::new();
    for shift in &problem.shifts {
        if shift.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "shift with empty ID",
            ));
        } else if !shift_ids.insert(shift.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate shift ID: {}", shift.id),
            ));
        }

        if shift.min_staff == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidStaffBounds,
                format!("shift '{}' needs a min_staff of at least 1", shift.id),
            ));
        }
        if shift.max_staff < shift.min_staff {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidStaffBounds,
                format!(
                    "shift '{}' has max_staff {} below min_staff {}",
                    shift.id, shift.max_staff, shift.min_staff
                ),
            ));
        }
    }

    let mut employee_ids = HashSet::new();
    for employee in &problem.employees {
        if employee.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "employee with empty ID",
            ));
        } else if !employee_ids.insert(employee.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate employee ID: {}", employee.id),
            ));
        }
    }

    for (employee_id, preference) in problem.preferences.iter() {
        if !employee_ids.contains(employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("preferences reference unknown employee '{employee_id}'"),
            ));
        }
        for shift_id in preference.preferred.iter().chain(preference.avoided.iter()) {
            if !shift_ids.contains(shift_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!(
                        "preferences of '{employee_id}' reference unknown shift '{shift_id}'"
                    ),
                ));
            }
        }
    }

    for (name, weight) in problem.weights.as_named() {
        // The negation also rejects NaN.
        if !(weight >= 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeWeight,
                format!("weight '{name}' must be non-negative, got {weight}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
