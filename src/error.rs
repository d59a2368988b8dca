//! Custom error types for edubudget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for edubudget operations
#[derive(Error, Debug)]
pub enum EdubudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The dataset could not be loaded; fatal for the session
    #[error("Error loading data: {0}")]
    Load(String),

    /// Invalid user input (column names, page numbers, chart kinds)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl EdubudgetError {
    /// Create a validation error for an unrecognized named value
    pub fn unknown_value(kind: &'static str, value: &str, accepted: &[&str]) -> Self {
        Self::Validation(format!(
            "unknown {} '{}' (expected one of: {})",
            kind,
            value,
            accepted.join(", ")
        ))
    }

    /// Check if this is a load failure
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for EdubudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EdubudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for EdubudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Load(err.to_string())
    }
}

/// Result type alias for edubudget operations
pub type EdubudgetResult<T> = Result<T, EdubudgetError>;
