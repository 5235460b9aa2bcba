//! Bulk action wire types
//!
//! A bulk action applies one [`BulkAction`] to many entities in a single
//! request:
//!
//! ```json
//! {
//!   "action": "update_price",
//!   "params": { "price_type": "percentage", "direction": "increase", "value": 10.0 },
//!   "ids": ["p1", "p2"]
//! }
//! ```
//!
//! The response reports how many targets succeeded and failed. Batch ids and
//! per-item failures are backend-defined and passed through untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{AmountType, EntityStatus};

/// Entity family a bulk action operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkTarget {
    Products,
    Variants,
    Gallery,
}

impl BulkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkTarget::Products => "products",
            BulkTarget::Variants => "variants",
            BulkTarget::Gallery => "gallery",
        }
    }

    /// Plural noun used in user-facing messages
    pub fn noun(&self) -> &'static str {
        match self {
            BulkTarget::Products => "products",
            BulkTarget::Variants => "variants",
            BulkTarget::Gallery => "gallery items",
        }
    }

    /// Whether this family accepts the given action
    pub fn supports(&self, action: BulkActionType) -> bool {
        use BulkActionType::*;
        match self {
            BulkTarget::Products => true,
            BulkTarget::Variants => matches!(
                action,
                UpdatePrice | ChangeStatus | Activate | Deactivate | Delete
            ),
            BulkTarget::Gallery => matches!(action, Delete),
        }
    }
}

impl fmt::Display for BulkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Discriminant of [`BulkAction`], used before parameters are known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkActionType {
    ChangeCategory,
    UpdatePrice,
    ChangeStatus,
    Delete,
    ApplyDiscount,
    Activate,
    Deactivate,
}

impl BulkActionType {
    pub const ALL: [BulkActionType; 7] = [
        BulkActionType::ChangeCategory,
        BulkActionType::UpdatePrice,
        BulkActionType::ChangeStatus,
        BulkActionType::Delete,
        BulkActionType::ApplyDiscount,
        BulkActionType::Activate,
        BulkActionType::Deactivate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BulkActionType::ChangeCategory => "change_category",
            BulkActionType::UpdatePrice => "update_price",
            BulkActionType::ChangeStatus => "change_status",
            BulkActionType::Delete => "delete",
            BulkActionType::ApplyDiscount => "apply_discount",
            BulkActionType::Activate => "activate",
            BulkActionType::Deactivate => "deactivate",
        }
    }

    /// Deletes cannot be undone
    pub fn is_undoable(&self) -> bool {
        !matches!(self, BulkActionType::Delete)
    }

    /// Actions that need an explicit confirmation step before dispatch
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, BulkActionType::Delete)
    }
}

impl fmt::Display for BulkActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BulkActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| format!("unknown bulk action: {}", s.trim()))
    }
}

/// Direction of a price adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceDirection {
    #[default]
    Increase,
    Decrease,
}

/// A validated bulk operation with its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum BulkAction {
    ChangeCategory {
        category_id: String,
    },
    UpdatePrice {
        price_type: AmountType,
        direction: PriceDirection,
        value: Decimal,
    },
    ChangeStatus {
        status: EntityStatus,
    },
    Delete,
    ApplyDiscount {
        discount_type: AmountType,
        value: Decimal,
    },
    Activate,
    Deactivate,
}

impl BulkAction {
    pub fn action_type(&self) -> BulkActionType {
        match self {
            BulkAction::ChangeCategory { .. } => BulkActionType::ChangeCategory,
            BulkAction::UpdatePrice { .. } => BulkActionType::UpdatePrice,
            BulkAction::ChangeStatus { .. } => BulkActionType::ChangeStatus,
            BulkAction::Delete => BulkActionType::Delete,
            BulkAction::ApplyDiscount { .. } => BulkActionType::ApplyDiscount,
            BulkAction::Activate => BulkActionType::Activate,
            BulkAction::Deactivate => BulkActionType::Deactivate,
        }
    }

    /// Short human-readable description, used for history and alerts
    pub fn label(&self) -> String {
        match self {
            BulkAction::ChangeCategory { category_id } => {
                format!("Change category to {}", category_id)
            }
            BulkAction::UpdatePrice {
                price_type,
                direction,
                value,
            } => {
                let verb = match direction {
                    PriceDirection::Increase => "Increase",
                    PriceDirection::Decrease => "Decrease",
                };
                match price_type {
                    AmountType::Percentage => format!("{} price by {}%", verb, value.normalize()),
                    AmountType::Fixed => format!("{} price by {}", verb, value.normalize()),
                }
            }
            BulkAction::ChangeStatus { status } => format!("Change status to {}", status),
            BulkAction::Delete => "Delete".to_string(),
            BulkAction::ApplyDiscount {
                discount_type,
                value,
            } => match discount_type {
                AmountType::Percentage => format!("Apply {}% discount", value.normalize()),
                AmountType::Fixed => format!("Apply {} discount", value.normalize()),
            },
            BulkAction::Activate => "Activate".to_string(),
            BulkAction::Deactivate => "Deactivate".to_string(),
        }
    }
}

/// Request body of a bulk endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkActionRequest {
    #[serde(flatten)]
    pub action: BulkAction,
    pub ids: Vec<String>,
}

/// One target the backend could not update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkFailure {
    pub id: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Per-batch result reported by a bulk endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BulkActionResult {
    pub successful: usize,
    pub failed: usize,
    /// Backend handle for the batch, required by the undo endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<BulkFailure>,
}

impl BulkActionResult {
    pub fn total(&self) -> usize {
        self.successful + self.failed
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed == 0
    }
}

/// Request body of the undo endpoint
///
/// The backend decides what "undo" means for the batch; the client only
/// replays what it knows about the original request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(flatten)]
    pub action: BulkAction,
    pub ids: Vec<String>,
}
