//! Action form validation
//!
//! Raw user input for a bulk action is validated into a [`BulkAction`] or a
//! list of field-level errors. Nothing reaches the network until this passes.

use rust_decimal::Decimal;
use shared::models::{AmountType, EntityStatus};
use shared::{BulkAction, BulkActionType, PriceDirection};
use std::fmt;

/// Upper bound for percentage values
const MAX_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// A validation failure tied to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Unvalidated bulk action input, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct ActionForm {
    pub action: Option<BulkActionType>,
    pub category_id: String,
    pub status: String,
    /// Percentage vs fixed amount, for price updates and discounts
    pub amount_type: AmountType,
    pub direction: PriceDirection,
    pub value: String,
}

impl ActionForm {
    pub fn new(action: BulkActionType) -> Self {
        Self {
            action: Some(action),
            ..Default::default()
        }
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = category_id.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn amount_type(mut self, amount_type: AmountType) -> Self {
        self.amount_type = amount_type;
        self
    }

    pub fn direction(mut self, direction: PriceDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Validate into a dispatchable action, reporting every failing field
    pub fn validate(&self) -> Result<BulkAction, Vec<FieldError>> {
        let Some(action) = self.action else {
            return Err(vec![FieldError::new("action", "Choose an action")]);
        };

        let mut errors = Vec::new();
        let result = match action {
            BulkActionType::ChangeCategory => {
                let category_id = self.category_id.trim();
                if category_id.is_empty() {
                    errors.push(FieldError::new("category_id", "Select a category"));
                }
                BulkAction::ChangeCategory {
                    category_id: category_id.to_string(),
                }
            }
            BulkActionType::ChangeStatus => {
                let status = parse_status(&self.status).unwrap_or_else(|e| {
                    errors.push(e);
                    EntityStatus::default()
                });
                BulkAction::ChangeStatus { status }
            }
            BulkActionType::UpdatePrice => {
                let value = parse_amount(&self.value, self.amount_type).unwrap_or_else(|e| {
                    errors.push(e);
                    Decimal::ZERO
                });
                BulkAction::UpdatePrice {
                    price_type: self.amount_type,
                    direction: self.direction,
                    value,
                }
            }
            BulkActionType::ApplyDiscount => {
                let value = parse_amount(&self.value, self.amount_type).unwrap_or_else(|e| {
                    errors.push(e);
                    Decimal::ZERO
                });
                BulkAction::ApplyDiscount {
                    discount_type: self.amount_type,
                    value,
                }
            }
            BulkActionType::Delete => BulkAction::Delete,
            BulkActionType::Activate => BulkAction::Activate,
            BulkActionType::Deactivate => BulkAction::Deactivate,
        };

        if errors.is_empty() {
            Ok(result)
        } else {
            Err(errors)
        }
    }
}

fn parse_status(raw: &str) -> Result<EntityStatus, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::new("status", "Select a status"));
    }
    raw.parse()
        .map_err(|_| FieldError::new("status", format!("Unknown status '{}'", raw)))
}

/// Parse a non-negative amount; percentages are capped at 100, fixed amounts
/// are not
fn parse_amount(raw: &str, amount_type: AmountType) -> Result<Decimal, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::new("value", "Enter a value"));
    }
    let value: Decimal = raw
        .parse()
        .map_err(|_| FieldError::new("value", "Must be a number"))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(FieldError::new("value", "Must not be negative"));
    }
    if amount_type == AmountType::Percentage && value > MAX_PERCENTAGE {
        return Err(FieldError::new(
            "value",
            "Percentage must be between 0 and 100",
        ));
    }
    Ok(value)
}
