// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Error Types
 * Transport, workflow and session errors with thiserror
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use thiserror::Error;

use crate::workflow::{BlockReason, Call, Phase};

/// An external call could not complete or returned a non-success status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{call} failed: {reason}")]
pub struct TransportFailure {
    pub call: Call,
    pub reason: String,
}

impl TransportFailure {
    pub fn new(call: Call, reason: impl Into<String>) -> Self {
        Self {
            call,
            reason: reason.into(),
        }
    }
}

/// Lifecycle errors raised by the workflow gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("{call} cannot complete while in phase {phase}")]
    OutOfOrder { phase: Phase, call: Call },

    #[error("Unknown phase: {0}")]
    UnknownPhase(String),
}

/// Errors surfaced by the session controller.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportFailure),

    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("View blocked: {0:?}")]
    Blocked(BlockReason),

    #[error("Invalid scan request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),
}

impl SessionError {
    /// Text to show the operator for this error.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Transport(failure) => failure.call.failure_message().to_string(),
            SessionError::Workflow(WorkflowError::OutOfOrder { .. }) => {
                "This step is not available for the current scan. Please run a New Scan.".to_string()
            }
            SessionError::Workflow(e) => e.to_string(),
            SessionError::Blocked(reason) => reason.message().to_string(),
            SessionError::InvalidRequest(errors) => {
                let field_errors = errors.field_errors();
                let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
                fields.sort_unstable();
                format!("Please fill in: {}", fields.join(", "))
            }
        }
    }
}
