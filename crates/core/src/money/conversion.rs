//! Pure conversion between dual-currency inputs and display values.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::money::{Currency, Money, MoneyInput};

/// Rounds a value to display precision using round-half-up
/// (ties away from zero).
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Resolves a dual-currency input to its base-currency (USD) amount.
///
/// The caller guarantees `rate > 0`; input validation rejects non-positive
/// exchange rates before the pipeline runs.
pub fn to_base_usd(input: &MoneyInput, rate: Decimal) -> Decimal {
    match input.primary_currency {
        Currency::Cny => input.cny / rate,
        Currency::Usd => input.usd,
    }
}

/// Renders a base-currency amount as a dual-currency display pair.
///
/// Each leg is rounded independently: the USD leg first, then the CNY leg
/// computed from the already-rounded USD value. This order is load-bearing
/// for reproducible outputs.
pub fn to_display(base_usd: Decimal, rate: Decimal) -> Money {
    let usd = round_display(base_usd);
    let cny = round_display(usd * rate);
    Money { usd, cny }
}
