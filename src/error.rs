//! Crate error taxonomy.
//!
//! Input problems are fatal before any solve attempt. Infeasibility and
//! solver inconclusiveness are terminal statuses, not errors, and never
//! appear here. Unexpected internal failures ride the transparent
//! variant with their context chain intact.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced at the scheduling boundary.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// The payload could not be parsed against the JSON contract.
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Structured input failed validation; every detected issue listed.
    #[error("invalid problem: {}", format_validation(.0))]
    Invalid(Vec<ValidationError>),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected internal failure during construction or extraction.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SchedulerError {
    /// Diagnostic detail for the ERROR payload. For internal failures
    /// this is the full context chain; otherwise the display form.
    pub fn trace(&self) -> String {
        match self {
            SchedulerError::Internal(err) => format!("{err:?}"),
            other => other.to_string(),
        }
    }
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for boundary operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_errors_joined() {
        let err = SchedulerError::Invalid(vec![
            ValidationError {
                kind: ValidationErrorKind::DuplicateId,
                message: "duplicate shift ID: S1".to_string(),
            },
            ValidationError {
                kind: ValidationErrorKind::EmptyId,
                message: "employee with empty ID".to_string(),
            },
        ]);

        let rendered = err.to_string();
        assert!(rendered.contains("duplicate shift ID: S1"));
        assert!(rendered.contains("employee with empty ID"));
    }

    #[test]
    fn test_internal_trace_keeps_context() {
        let err = SchedulerError::Internal(
            anyhow::anyhow!("root cause").context("while decoding the solution"),
        );
        let trace = err.trace();
        assert!(trace.contains("root cause"));
        assert!(trace.contains("while decoding the solution"));
    }
}
