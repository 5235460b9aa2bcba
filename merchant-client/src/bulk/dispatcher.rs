//! Mutation dispatcher
//!
//! Turns (selection, action) into one request against the backend. All
//! preflight checks run before the network is touched.

use shared::{BulkAction, BulkActionRequest, BulkActionResult, BulkActionType, BulkTarget};

use super::backend::BulkBackend;
use super::error::BulkError;
use super::selection::SelectionSet;
use crate::Capabilities;

#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    capabilities: Capabilities,
}

impl Dispatcher {
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Check everything that can be checked locally, in order:
    /// selection, target support, capabilities, confirmation
    pub fn preflight(
        &self,
        target: BulkTarget,
        action: &BulkAction,
        selection: &SelectionSet,
        confirmed: bool,
    ) -> Result<BulkActionRequest, BulkError> {
        if selection.is_empty() {
            return Err(BulkError::EmptySelection);
        }

        let action_type = action.action_type();
        if !target.supports(action_type) {
            return Err(BulkError::Unsupported(action_type, target));
        }

        if action_type == BulkActionType::Delete {
            if !self.capabilities.can_delete {
                return Err(BulkError::PermissionDenied(format!(
                    "You do not have permission to delete {}",
                    target.noun()
                )));
            }
        } else if !self.capabilities.can_bulk_edit {
            return Err(BulkError::PermissionDenied(format!(
                "You do not have permission to bulk edit {}",
                target.noun()
            )));
        }

        if action_type.requires_confirmation() && !confirmed {
            return Err(BulkError::ConfirmationRequired(action.label()));
        }

        Ok(BulkActionRequest {
            action: action.clone(),
            ids: selection.to_vec(),
        })
    }

    /// Send a preflighted request
    pub async fn dispatch<B: BulkBackend>(
        &self,
        backend: &B,
        request: &BulkActionRequest,
    ) -> Result<BulkActionResult, BulkError> {
        let target = backend.target();
        let action = request.action.action_type();
        tracing::info!(
            target_kind = target.as_str(),
            action = action.as_str(),
            count = request.ids.len(),
            "Dispatching bulk action"
        );

        match backend.apply(request).await {
            Ok(result) => {
                if result.total() != request.ids.len() {
                    tracing::warn!(
                        requested = request.ids.len(),
                        reported = result.total(),
                        "Bulk result count differs from request"
                    );
                }
                tracing::info!(
                    target_kind = target.as_str(),
                    action = action.as_str(),
                    successful = result.successful,
                    failed = result.failed,
                    "Bulk action completed"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(
                    target_kind = target.as_str(),
                    action = action.as_str(),
                    error = %e,
                    "Bulk action failed"
                );
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::EntityStatus;

    fn selection(ids: &[&str]) -> SelectionSet {
        let mut s = SelectionSet::new();
        s.select_all(ids.iter().copied());
        s
    }

    fn deactivate() -> BulkAction {
        BulkAction::ChangeStatus {
            status: EntityStatus::Inactive,
        }
    }

    #[test]
    fn test_empty_selection_checked_first() {
        let dispatcher = Dispatcher::new(Capabilities {
            can_bulk_edit: false,
            can_delete: false,
        });
        let err = dispatcher
            .preflight(BulkTarget::Products, &BulkAction::Delete, &SelectionSet::new(), false)
            .unwrap_err();
        assert!(matches!(err, BulkError::EmptySelection));
    }

    #[test]
    fn test_request_carries_selection_in_order() {
        let request = Dispatcher::default()
            .preflight(BulkTarget::Products, &deactivate(), &selection(&["c", "a", "b"]), false)
            .unwrap();
        assert_eq!(request.ids, vec!["c", "a", "b"]);
        assert_eq!(request.action, deactivate());
    }

    #[test]
    fn test_unsupported_action_for_target() {
        let err = Dispatcher::default()
            .preflight(BulkTarget::Gallery, &deactivate(), &selection(&["g1"]), false)
            .unwrap_err();
        assert!(matches!(
            err,
            BulkError::Unsupported(BulkActionType::ChangeStatus, BulkTarget::Gallery)
        ));
    }

    #[test]
    fn test_capability_flags() {
        let no_edit = Dispatcher::new(Capabilities {
            can_bulk_edit: false,
            can_delete: true,
        });
        let err = no_edit
            .preflight(BulkTarget::Products, &deactivate(), &selection(&["p1"]), false)
            .unwrap_err();
        assert!(matches!(err, BulkError::PermissionDenied(_)));
        // delete is governed by its own flag
        assert!(
            no_edit
                .preflight(BulkTarget::Products, &BulkAction::Delete, &selection(&["p1"]), true)
                .is_ok()
        );

        let no_delete = Dispatcher::new(Capabilities {
            can_bulk_edit: true,
            can_delete: false,
        });
        let err = no_delete
            .preflight(BulkTarget::Variants, &BulkAction::Delete, &selection(&["v1"]), true)
            .unwrap_err();
        assert_eq!(err.to_string(), "You do not have permission to delete variants");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let err = Dispatcher::default()
            .preflight(BulkTarget::Products, &BulkAction::Delete, &selection(&["p1"]), false)
            .unwrap_err();
        assert!(matches!(err, BulkError::ConfirmationRequired(_)));
    }
}
