//! Error types for the lifecycle library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::LifecycleKind;
use crate::settlement::SettlementStep;

/// Comprehensive error type for all lifecycle operations.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Employee not found for the given ID
    #[error("Employee with ID {id} not found")]
    EmployeeNotFound { id: u64 },
    /// The employee has no record for the requested process
    #[error("No {kind} record for employee {employee_id}")]
    LifecycleNotFound {
        employee_id: u64,
        kind: LifecycleKind,
    },
    /// No task with the given name in the checklist
    #[error("Task '{name}' not found in checklist")]
    TaskNotFound { name: String },
    /// A stage or status change that the lifecycle rules do not allow
    #[error("Invalid transition: {reason}")]
    InvalidTransition { reason: String },
    /// Raised by an access-controlled collaborator, never by the core itself
    #[error("Permission denied: {action}")]
    PermissionDenied { action: String },
    /// A settlement step's collaborator call failed
    #[error("Settlement step '{step}' failed: {message}")]
    DependencyFailure {
        step: SettlementStep,
        message: String,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// CSV export errors
    #[error("Export error: {source}")]
    Export {
        #[from]
        source: csv::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> LifecycleError {
        LifecycleError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LifecycleError {
        LifecycleError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LifecycleError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid transition error.
    pub fn invalid_transition(reason: impl Into<String>) -> Self {
        Self::InvalidTransition {
            reason: reason.into(),
        }
    }

    /// True for every "something is absent" kind: employee, record or task.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EmployeeNotFound { .. }
                | Self::LifecycleNotFound { .. }
                | Self::TaskNotFound { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| LifecycleError::database(message).with_source(e))
    }
}

/// Result type alias for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;
