//! Error types for the service record store.

use crate::lifecycle::LifecycleState;
use crate::service::ServiceId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// No record exists for the given service id.
    #[error("service not found: {id}")]
    ServiceNotFound {
        /// The missing service id
        id: ServiceId,
    },

    /// A record was inserted with an id that is already taken.
    #[error("duplicate service id: {id}")]
    DuplicateService {
        /// The duplicate service id
        id: ServiceId,
    },

    /// A requested transition is not legal from the record's current state.
    #[error("illegal lifecycle transition {from} -> {to}")]
    InvalidTransition {
        /// State the record is currently in
        from: LifecycleState,
        /// State the caller asked for
        to: LifecycleState,
    },
}

impl StoreError {
    /// Creates a service not found error.
    pub fn service_not_found(id: ServiceId) -> Self {
        Self::ServiceNotFound { id }
    }

    /// Creates a duplicate service error.
    pub fn duplicate_service(id: ServiceId) -> Self {
        Self::DuplicateService { id }
    }

    /// Creates an invalid transition error.
    pub fn invalid_transition(from: LifecycleState, to: LifecycleState) -> Self {
        Self::InvalidTransition { from, to }
    }
}
