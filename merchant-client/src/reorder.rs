//! Drag-to-reorder for sortable lists (gallery)
//!
//! Only native targets support drag gestures; web gets [`NoReorder`], which
//! never produces sort-order changes.

use shared::models::SortOrderUpdate;

use crate::Platform;

pub trait Reorderable: Send + Sync {
    fn is_available(&self) -> bool;

    /// Move the item at `from` to `to` within `current` (display order, with
    /// the sort orders the backend stores)
    ///
    /// Returns new sort orders for the items whose position changed. Empty
    /// when nothing moves or an index is out of range.
    fn move_item(
        &self,
        current: &[SortOrderUpdate],
        from: usize,
        to: usize,
    ) -> Vec<SortOrderUpdate>;
}

/// Native drag reordering
///
/// The moved window keeps its existing sort-order values, reassigned in the
/// new order, so items outside the window keep their relative position. If
/// the window's stored values are not strictly increasing (duplicates, gaps
/// out of order), the whole list is renumbered from 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragReorder;

impl Reorderable for DragReorder {
    fn is_available(&self) -> bool {
        true
    }

    fn move_item(
        &self,
        current: &[SortOrderUpdate],
        from: usize,
        to: usize,
    ) -> Vec<SortOrderUpdate> {
        if from == to || from >= current.len() || to >= current.len() {
            return Vec::new();
        }
        let mut order: Vec<&str> = current.iter().map(|item| item.id.as_str()).collect();
        let moved = order.remove(from);
        order.insert(to, moved);

        let (start, end) = (from.min(to), from.max(to));
        let slots: Vec<i32> = current[start..=end].iter().map(|item| item.sort_order).collect();
        if slots.windows(2).all(|pair| pair[0] < pair[1]) {
            return order[start..=end]
                .iter()
                .zip(slots)
                .map(|(id, sort_order)| SortOrderUpdate {
                    id: id.to_string(),
                    sort_order,
                })
                .collect();
        }

        order
            .iter()
            .enumerate()
            .map(|(position, id)| SortOrderUpdate {
                id: id.to_string(),
                sort_order: position as i32,
            })
            .collect()
    }
}

/// Reordering disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReorder;

impl Reorderable for NoReorder {
    fn is_available(&self) -> bool {
        false
    }

    fn move_item(
        &self,
        _current: &[SortOrderUpdate],
        _from: usize,
        _to: usize,
    ) -> Vec<SortOrderUpdate> {
        Vec::new()
    }
}

/// Reorder behavior for the platform
pub fn for_platform(platform: Platform) -> Box<dyn Reorderable> {
    match platform {
        Platform::Native => Box::new(DragReorder),
        Platform::Web => Box::new(NoReorder),
    }
}
