//! Bulk editing session
//!
//! Ties together one entity list, its selection, the pending action, the
//! dispatcher and the history. State transitions:
//!
//! - success (full or partial): record history, clear selection and pending
//!   action, reload the list
//! - failure: keep selection and pending action, raise an alert

use shared::models::SortOrderUpdate;
use shared::{BulkAction, BulkActionResult, BulkTarget, ListQuery, Pagination};
use uuid::Uuid;

use super::backend::{BulkBackend, Listed};
use super::dispatcher::Dispatcher;
use super::error::{BulkError, UserAlert};
use super::form::ActionForm;
use super::history::History;
use super::selection::SelectionSet;
use crate::debounce::{DebounceTicket, Debouncer};
use crate::reorder::Reorderable;
use crate::{Capabilities, ClientConfig};

/// A validated action waiting to be submitted
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAction {
    pub action: BulkAction,
    pub confirmed: bool,
}

pub struct BulkSession<B: BulkBackend> {
    backend: B,
    dispatcher: Dispatcher,
    debouncer: Debouncer,
    query: ListQuery,
    items: Vec<B::Item>,
    pagination: Option<Pagination>,
    selection: SelectionSet,
    pending: Option<PendingAction>,
    history: History,
    loading: bool,
    reload_count: u64,
    alert: Option<UserAlert>,
}

impl<B: BulkBackend> BulkSession<B> {
    pub fn new(backend: B, config: &ClientConfig) -> Self {
        Self::with_parts(
            backend,
            Dispatcher::new(config.capabilities),
            Debouncer::new(config.search_debounce()),
        )
    }

    pub fn with_capabilities(backend: B, capabilities: Capabilities) -> Self {
        Self::with_parts(
            backend,
            Dispatcher::new(capabilities),
            Debouncer::new(ClientConfig::default().search_debounce()),
        )
    }

    fn with_parts(backend: B, dispatcher: Dispatcher, debouncer: Debouncer) -> Self {
        Self {
            backend,
            dispatcher,
            debouncer,
            query: ListQuery::default(),
            items: Vec::new(),
            pagination: None,
            selection: SelectionSet::new(),
            pending: None,
            history: History::new(),
            loading: false,
            reload_count: 0,
            alert: None,
        }
    }

    // ========== Accessors ==========

    pub fn target(&self) -> BulkTarget {
        self.backend.target()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn items(&self) -> &[B::Item] {
        &self.items
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of successful list loads so far
    pub fn reload_count(&self) -> u64 {
        self.reload_count
    }

    pub fn alert(&self) -> Option<&UserAlert> {
        self.alert.as_ref()
    }

    /// Dismiss the current alert
    pub fn take_alert(&mut self) -> Option<UserAlert> {
        self.alert.take()
    }

    pub fn toolbar_enabled(&self) -> bool {
        self.selection.toolbar_enabled()
    }

    // ========== Listing ==========

    pub async fn load(&mut self) -> Result<(), BulkError> {
        self.loading = true;
        let loaded = self.backend.load(&self.query).await;
        self.loading = false;

        match loaded {
            Ok(page) => {
                tracing::debug!(
                    target_kind = self.target().as_str(),
                    count = page.items.len(),
                    total = page.pagination.total,
                    "List loaded"
                );
                self.items = page.items;
                self.pagination = Some(page.pagination);
                self.reload_count += 1;
                Ok(())
            }
            Err(e) => Err(self.fail("Loading", e.into())),
        }
    }

    /// Record new search text without loading
    ///
    /// Await [`DebounceTicket::settle`] on the returned ticket (it holds no
    /// borrow of the session), then pass it to [`Self::apply_search`]. Later
    /// calls supersede earlier tickets.
    pub fn search(&mut self, text: &str) -> DebounceTicket {
        self.query = std::mem::take(&mut self.query).with_search(text);
        self.debouncer.ticket()
    }

    /// Load for a settled search; `false` without loading if superseded
    pub async fn apply_search(&mut self, ticket: &DebounceTicket) -> Result<bool, BulkError> {
        if !ticket.is_current() {
            tracing::debug!(generation = ticket.generation(), "Search superseded");
            return Ok(false);
        }
        self.load().await?;
        Ok(true)
    }

    /// Replace the list filter and reload
    pub async fn set_query(&mut self, query: ListQuery) -> Result<(), BulkError> {
        self.query = query;
        self.load().await
    }

    // ========== Selection ==========

    pub fn toggle(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    /// Select exactly `ids`
    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.select_all(ids);
    }

    /// Select every item currently loaded
    pub fn select_all_loaded(&mut self) {
        let ids: Vec<String> = self.items.iter().map(|i| i.id().to_string()).collect();
        self.selection.select_all(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ========== Actions ==========

    /// Validate a form into the pending action
    ///
    /// Destructive actions start unconfirmed.
    pub fn prepare(&mut self, form: &ActionForm) -> Result<&PendingAction, BulkError> {
        let action = match form.validate() {
            Ok(action) => action,
            Err(fields) => return Err(self.fail("Bulk action", BulkError::Invalid(fields))),
        };

        let action_type = action.action_type();
        if !self.target().supports(action_type) {
            let err = BulkError::Unsupported(action_type, self.target());
            return Err(self.fail(&action.label(), err));
        }

        self.alert = None;
        Ok(&*self.pending.insert(PendingAction {
            confirmed: !action_type.requires_confirmation(),
            action,
        }))
    }

    /// Confirm the pending destructive action
    pub fn confirm(&mut self) -> Result<(), BulkError> {
        let pending = self.pending.as_mut().ok_or(BulkError::NothingPending)?;
        pending.confirmed = true;
        Ok(())
    }

    /// Drop the pending action; the selection stays
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Submit the pending action for the current selection
    pub async fn submit(&mut self) -> Result<BulkActionResult, BulkError> {
        let Some(pending) = self.pending.clone() else {
            return Err(self.fail("Bulk action", BulkError::NothingPending));
        };
        let label = pending.action.label();
        let target = self.target();

        let request = match self.dispatcher.preflight(
            target,
            &pending.action,
            &self.selection,
            pending.confirmed,
        ) {
            Ok(request) => request,
            Err(e) => return Err(self.fail(&label, e)),
        };

        self.loading = true;
        let dispatched = self.dispatcher.dispatch(&self.backend, &request).await;
        self.loading = false;

        let result = match dispatched {
            Ok(result) => result,
            Err(e) => return Err(self.fail(&label, e)),
        };

        self.history.record(target, pending.action, request.ids, &result);
        self.selection.clear();
        self.pending = None;
        self.alert = None;

        // the batch is applied; a failed refresh only leaves an alert behind
        if let Err(e) = self.load().await {
            tracing::warn!(error = %e, "Reload after bulk action failed");
        }
        Ok(result)
    }

    /// Undo a history entry and reload
    pub async fn undo(&mut self, entry_id: Uuid) -> Result<(), BulkError> {
        let request = match self.history.undo_request(entry_id) {
            Ok(request) => request,
            Err(e) => return Err(self.fail("Undo", e)),
        };
        let label = format!("Undo {}", request.action.label());

        self.loading = true;
        let undone = self.backend.undo(&request).await;
        self.loading = false;

        if let Err(e) = undone {
            return Err(self.fail(&label, e.into()));
        }
        self.history.mark_undone(entry_id)?;
        tracing::info!(
            target_kind = self.target().as_str(),
            entry = %entry_id,
            count = request.ids.len(),
            "Bulk action undone"
        );

        if let Err(e) = self.load().await {
            tracing::warn!(error = %e, "Reload after undo failed");
        }
        Ok(())
    }

    /// Move the item at `from` to `to` and persist the new order
    pub async fn reorder(
        &mut self,
        reorder: &dyn Reorderable,
        from: usize,
        to: usize,
    ) -> Result<(), BulkError> {
        if !reorder.is_available() {
            return Err(self.fail("Reorder", BulkError::ReorderUnavailable));
        }
        let current: Vec<SortOrderUpdate> = self
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| SortOrderUpdate {
                id: item.id().to_string(),
                sort_order: item.sort_order().unwrap_or(position as i32),
            })
            .collect();
        let updates = reorder.move_item(&current, from, to);
        if updates.is_empty() {
            return Ok(());
        }

        self.loading = true;
        let saved = self.backend.save_order(&updates).await;
        self.loading = false;

        if let Err(e) = saved {
            return Err(self.fail("Reorder", e.into()));
        }
        self.load().await
    }

    /// Raise an alert for `err` and hand it back
    fn fail(&mut self, context: &str, err: BulkError) -> BulkError {
        tracing::warn!(
            target_kind = self.target().as_str(),
            context,
            error = %err,
            "Bulk workflow step failed"
        );
        self.alert = Some(UserAlert::for_error(context, &err));
        err
    }
}
