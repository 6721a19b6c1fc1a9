//! Money module - dual-currency inputs and display values.

mod conversion;
mod money_model;

pub use conversion::{round_display, to_base_usd, to_display};
pub use money_model::{Currency, Money, MoneyInput};
