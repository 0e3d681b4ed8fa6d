//! Contract error types for the records service
//!
//! These errors are transport-agnostic; the REST layer maps them onto
//! problem responses.

use thiserror::Error;

/// Records service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordsError {
    /// Record not found by primary key
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource kind (Customer, Category, Employee)
        resource: &'static str,
        /// Primary key that missed
        id: i32,
    },
    /// Uniqueness conflict (duplicate email, duplicate category name)
    #[error("conflict: {reason}")]
    Conflict {
        /// Conflict reason
        reason: String,
    },
    /// Payload failed field validation
    #[error("validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// Unexpected failure; the cause is logged, never surfaced
    #[error("internal error")]
    Internal,
}
