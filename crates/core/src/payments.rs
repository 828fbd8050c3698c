//! Payment terms for legal cases.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const SYSTEM_LUMP_SUM: &str = "lump_sum";
pub const SYSTEM_INSTALLMENTS: &str = "installments";

/// All valid payment system strings.
pub const VALID_PAYMENT_SYSTEMS: &[&str] = &[SYSTEM_LUMP_SUM, SYSTEM_INSTALLMENTS];

/// How a legal-case amount is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSystem {
    LumpSum,
    Installments,
}

impl PaymentSystem {
    /// Convert from a wire string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            SYSTEM_LUMP_SUM => Ok(Self::LumpSum),
            SYSTEM_INSTALLMENTS => Ok(Self::Installments),
            _ => Err(CoreError::Validation(format!(
                "Invalid payment system '{s}'. Must be one of: {}",
                VALID_PAYMENT_SYSTEMS.join(", ")
            ))),
        }
    }
}

/// Per-installment amount for an installment plan.
///
/// Derived at read time, never stored. A plan needs a positive total and
/// at least one period; anything else is a validation error, not a
/// division.
pub fn installment_amount(total_amount: f64, periods: u32) -> Result<f64, CoreError> {
    if !(total_amount.is_finite() && total_amount > 0.0) {
        return Err(CoreError::Validation(
            "Total amount must be a positive number".to_string(),
        ));
    }
    if periods == 0 {
        return Err(CoreError::Validation(
            "An installment plan needs at least one period".to_string(),
        ));
    }
    Ok(total_amount / f64::from(periods))
}
