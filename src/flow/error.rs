//! Error types for the stage pipeline.
//!
//! Absence of a stage for a user-supplied path or id string is NOT an error
//! here; those queries return `Option`. These errors only cover malformed
//! tokens handed to `FromStr` and defects in the stage table itself, which
//! [`super::Pipeline`] checks once at construction.

use crate::flow::StageId;
use thiserror::Error;

/// Result type for pipeline operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors for stage parsing and pipeline validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    /// A string token does not name any of the fixed stages.
    #[error("unknown stage: {token}")]
    UnknownStage {
        /// The token that failed to parse
        token: String,
    },

    /// Two stages declare the same canonical path.
    #[error("duplicate stage path '{path}' declared by {first} and {second}")]
    DuplicatePath {
        /// The colliding path
        path: String,
        /// First stage declaring the path
        first: StageId,
        /// Second stage declaring the path
        second: StageId,
    },

    /// A declared path does not look like a route.
    #[error("stage {stage} has malformed path '{path}' (must start with '/')")]
    MalformedPath {
        /// The offending stage
        stage: StageId,
        /// The declared path
        path: String,
    },

    /// A stage cannot be reached from the entry stage by forward edges.
    #[error("stage {stage} is unreachable from the entry stage")]
    Unreachable {
        /// The unreachable stage
        stage: StageId,
    },
}

impl FlowError {
    /// Creates an unknown stage error for a token.
    pub fn unknown_stage(token: impl Into<String>) -> Self {
        Self::UnknownStage {
            token: token.into(),
        }
    }

    /// Creates a duplicate path error.
    pub fn duplicate_path(path: impl Into<String>, first: StageId, second: StageId) -> Self {
        Self::DuplicatePath {
            path: path.into(),
            first,
            second,
        }
    }

    /// Creates a malformed path error.
    pub fn malformed_path(stage: StageId, path: impl Into<String>) -> Self {
        Self::MalformedPath {
            stage,
            path: path.into(),
        }
    }

    /// Creates an unreachable stage error.
    pub fn unreachable(stage: StageId) -> Self {
        Self::Unreachable { stage }
    }
}
