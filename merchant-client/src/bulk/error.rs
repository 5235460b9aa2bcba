//! Bulk workflow errors and user-facing alerts

use shared::{BulkActionType, BulkTarget};
use thiserror::Error;
use uuid::Uuid;

use super::form::FieldError;
use crate::ClientError;

/// Shown when a failure carries no server message
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Bulk workflow error type
#[derive(Debug, Error)]
pub enum BulkError {
    /// Dispatch attempted with nothing selected
    #[error("Select at least one item first")]
    EmptySelection,

    /// The action form failed validation
    #[error("{}", join_fields(.0))]
    Invalid(Vec<FieldError>),

    /// The action does not apply to this kind of entity
    #[error("'{}' cannot be applied to {}", .0.as_str(), .1.noun())]
    Unsupported(BulkActionType, BulkTarget),

    /// Blocked by a client-side capability flag
    #[error("{0}")]
    PermissionDenied(String),

    /// Destructive action not yet confirmed
    #[error("Confirm '{0}' before continuing")]
    ConfirmationRequired(String),

    #[error("No action is pending")]
    NothingPending,

    #[error("This action cannot be undone")]
    NotUndoable,

    #[error("Unknown history entry {0}")]
    UnknownEntry(Uuid),

    #[error("Reordering is not available on this platform")]
    ReorderUnavailable,

    /// Network or backend failure
    #[error(transparent)]
    Request(#[from] ClientError),
}

impl BulkError {
    /// Whether the error was raised before any request was sent
    pub fn is_local(&self) -> bool {
        !matches!(self, BulkError::Request(_))
    }

    /// Text suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            BulkError::Request(err) => err
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
            other => other.to_string(),
        }
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// An alert raised by a failed workflow step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAlert {
    pub title: String,
    pub message: String,
}

impl UserAlert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Alert for a failed step named `context` (usually the action label)
    pub fn for_error(context: &str, err: &BulkError) -> Self {
        Self::new(format!("{} failed", context), err.user_message())
    }
}
