//! QR Payment Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// QR payment lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrPaymentStatus {
    Pending,
    Paid,
    Expired,
    Cancelled,
}

impl QrPaymentStatus {
    /// Whether the payment can still change state
    pub fn is_final(&self) -> bool {
        !matches!(self, QrPaymentStatus::Pending)
    }
}

/// QR-code payment request generated for an outlet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrPayment {
    pub id: String,
    pub outlet_id: String,
    pub amount: Decimal,
    pub currency: String,
    /// Payload encoded into the QR image
    pub qr_payload: String,
    pub status: QrPaymentStatus,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Create QR payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrPaymentCreate {
    pub outlet_id: String,
    pub amount: Decimal,
    pub note: Option<String>,
}
