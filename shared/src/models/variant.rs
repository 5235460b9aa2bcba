//! Variant Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EntityStatus;

/// One option value of a variant, e.g. `size = L`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub name: String,
    pub value: String,
}

/// Product variant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    /// Product reference (String ID)
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub stock: Option<i64>,
    pub status: EntityStatus,
    #[serde(default)]
    pub options: Vec<VariantOption>,
}
