//! Error types for fluentsql

use thiserror::Error;

/// Result type alias for fluentsql operations
pub type QbResult<T> = Result<T, QbError>;

/// Error types for statement rendering and execution
#[derive(Debug, Error)]
pub enum QbError {
    /// A predicate argument has no textual form for its operator
    /// (e.g. a scalar or a JSON object passed to `in` / `not in`).
    #[error("Unsupported argument type for '{field} {operator}': {argument}")]
    UnsupportedArgumentType {
        field: String,
        operator: String,
        argument: String,
    },

    /// Query execution error
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Check constraint violation: {0}")]
    CheckViolation(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl QbError {
    /// Create an unsupported argument error for a predicate.
    pub fn unsupported_argument(
        field: impl Into<String>,
        operator: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        Self::UnsupportedArgumentType {
            field: field.into(),
            operator: operator.into(),
            argument: argument.into(),
        }
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is an unsupported argument error
    pub fn is_unsupported_argument(&self) -> bool {
        matches!(self, Self::UnsupportedArgumentType { .. })
    }

    /// Check if this is a unique violation error
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Parse a tokio_postgres error into a more specific QbError
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            let constraint = db_err.constraint().unwrap_or("unknown");
            let message = db_err.message();

            match db_err.code().code() {
                "23505" => return Self::UniqueViolation(format!("{}: {}", constraint, message)),
                "23503" => {
                    return Self::ForeignKeyViolation(format!("{}: {}", constraint, message));
                }
                "23514" => return Self::CheckViolation(format!("{}: {}", constraint, message)),
                _ => {}
            }
        }
        Self::Query(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_argument_message_names_field_and_operator() {
        let err = QbError::unsupported_argument("id", "in", "Int(5)");
        assert!(err.is_unsupported_argument());
        assert_eq!(
            err.to_string(),
            "Unsupported argument type for 'id in': Int(5)"
        );
    }

    #[test]
    fn helper_predicates() {
        assert!(QbError::not_found("x").is_not_found());
        assert!(QbError::validation("x").to_string().starts_with("Validation error"));
        assert!(!QbError::validation("x").is_not_found());
    }
}
