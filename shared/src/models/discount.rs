//! Store Discount Model
//!
//! Store-wide discounts and time-boxed deals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AmountType;

/// Store discount / deal entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub id: String,
    pub title: String,
    pub discount_type: AmountType,
    pub value: Decimal,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    /// Outlets the discount applies to (empty = all outlets)
    #[serde(default)]
    pub outlet_ids: Vec<String>,
}

/// Create discount payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountCreate {
    pub title: String,
    pub discount_type: AmountType,
    pub value: Decimal,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub outlet_ids: Vec<String>,
}

/// Update discount payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<AmountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_ids: Option<Vec<String>>,
}
