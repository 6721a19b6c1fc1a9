use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for monetary and percentage display values.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for the storage coefficient.
pub const COEFFICIENT_DECIMAL_PRECISION: u32 = 4;

/// Settings key under which the USD/CNY exchange rate is persisted.
pub const SETTING_EXCHANGE_RATE_KEY: &str = "exchange_rate";

/// Default USD/CNY exchange rate used when no setting is stored.
pub const DEFAULT_EXCHANGE_RATE: Decimal = dec!(7.25);
