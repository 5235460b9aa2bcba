//! Bulk action history
//!
//! Append-only log of dispatched batches. Undoing an entry flips its
//! `can_undo` flag; entries are never removed.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{BulkAction, BulkActionResult, BulkTarget, UndoRequest};
use uuid::Uuid;

use super::error::BulkError;

/// Overall outcome of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Partial,
    Failed,
}

impl Outcome {
    pub fn from_result(result: &BulkActionResult) -> Self {
        match (result.successful, result.failed) {
            (_, 0) => Outcome::Success,
            (0, _) => Outcome::Failed,
            _ => Outcome::Partial,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub description: String,
    pub target: BulkTarget,
    pub action: BulkAction,
    pub ids: Vec<String>,
    /// Number of entities in the batch
    pub product_count: usize,
    pub successful: usize,
    pub failed: usize,
    pub outcome: Outcome,
    pub batch_id: Option<String>,
    pub can_undo: bool,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn undo_request(&self) -> UndoRequest {
        UndoRequest {
            batch_id: self.batch_id.clone(),
            action: self.action.clone(),
            ids: self.ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dispatched batch and return the new entry
    pub fn record(
        &mut self,
        target: BulkTarget,
        action: BulkAction,
        ids: Vec<String>,
        result: &BulkActionResult,
    ) -> &HistoryEntry {
        let can_undo = action.action_type().is_undoable() && result.successful > 0;
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            description: action.label(),
            target,
            product_count: ids.len(),
            action,
            ids,
            successful: result.successful,
            failed: result.failed,
            outcome: Outcome::from_result(result),
            batch_id: result.batch_id.clone(),
            can_undo,
            timestamp: Utc::now(),
        };
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Entries in dispatch order, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Undo request for an entry that can still be undone
    pub fn undo_request(&self, id: Uuid) -> Result<UndoRequest, BulkError> {
        let entry = self.get(id).ok_or(BulkError::UnknownEntry(id))?;
        if !entry.can_undo {
            return Err(BulkError::NotUndoable);
        }
        Ok(entry.undo_request())
    }

    pub fn mark_undone(&mut self, id: Uuid) -> Result<(), BulkError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(BulkError::UnknownEntry(id))?;
        if !entry.can_undo {
            return Err(BulkError::NotUndoable);
        }
        entry.can_undo = false;
        Ok(())
    }
}
