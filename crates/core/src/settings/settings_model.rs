//! Settings domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EXCHANGE_RATE;

/// Application settings: a single configurable USD/CNY exchange rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub exchange_rate: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            exchange_rate: DEFAULT_EXCHANGE_RATE,
        }
    }
}
