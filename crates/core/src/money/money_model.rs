//! Money domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// The two currencies a monetary input can be stated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "CNY")]
    Cny,
}

/// A monetary amount expressible in either currency.
///
/// Only the leg matching `primary_currency` is authoritative during
/// conversion; the other is advisory/display-only on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MoneyInput {
    #[serde(default)]
    pub usd: Decimal,
    #[serde(default)]
    pub cny: Decimal,
    #[serde(default)]
    pub primary_currency: Currency,
}

impl MoneyInput {
    /// A USD-primary input, convenient for tests and defaults.
    pub fn from_usd(usd: Decimal) -> Self {
        MoneyInput {
            usd,
            cny: Decimal::ZERO,
            primary_currency: Currency::Usd,
        }
    }

    /// A CNY-primary input.
    pub fn from_cny(cny: Decimal) -> Self {
        MoneyInput {
            usd: Decimal::ZERO,
            cny,
            primary_currency: Currency::Cny,
        }
    }

    /// Both legs must be non-negative.
    pub fn validate(&self, field: &str) -> Result<()> {
        if self.usd < Decimal::ZERO || self.cny < Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                message: "monetary amounts must be non-negative".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for MoneyInput {
    fn default() -> Self {
        MoneyInput::from_usd(Decimal::ZERO)
    }
}

/// A resolved monetary value, always rendered as a `(usd, cny)` pair at
/// 2-decimal precision. Produced only by the conversion step, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub usd: Decimal,
    pub cny: Decimal,
}
