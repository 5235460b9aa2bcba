//! Offer Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AmountType;

/// Product-scoped offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_ids: Vec<String>,
    pub discount_type: AmountType,
    pub value: Decimal,
    pub is_active: bool,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
}

/// Create offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferCreate {
    pub title: String,
    pub description: Option<String>,
    pub product_ids: Vec<String>,
    pub discount_type: AmountType,
    pub value: Decimal,
    pub valid_until: Option<DateTime<Utc>>,
}

/// Update offer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}
