//! Input and result models for the profit calculation engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::money::{Money, MoneyInput};

fn default_referral_fee_rate() -> Decimal {
    dec!(15)
}

fn default_return_rate() -> Decimal {
    dec!(5)
}

fn default_resellable_rate() -> Decimal {
    dec!(80)
}

fn default_exchange_rate() -> Decimal {
    crate::constants::DEFAULT_EXCHANGE_RATE
}

/// Procurement-phase inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrePurchase {
    pub unit_cost: MoneyInput,
    pub quantity: i64,
    pub shipping_per_unit: MoneyInput,
}

/// How advertising spend is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvertisingMode {
    /// Fixed daily budget over the whole sales window.
    Budget,
    /// Percentage of total revenue.
    Percentage,
}

/// Sales-phase inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DuringSale {
    pub selling_price: MoneyInput,
    pub daily_sales: i64,
    pub sales_days: i64,

    pub advertising_mode: AdvertisingMode,
    #[serde(default)]
    pub daily_ad_budget: Option<MoneyInput>,
    #[serde(default)]
    pub ad_percentage: Option<Decimal>,

    #[serde(default = "default_referral_fee_rate")]
    pub referral_fee_rate: Decimal,
    pub fba_fee_per_unit: MoneyInput,
    pub monthly_storage_fee: MoneyInput,
}

/// Post-sale inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AfterSale {
    #[serde(default = "default_return_rate")]
    pub return_rate: Decimal,
    #[serde(default = "default_resellable_rate")]
    pub resellable_rate: Decimal,
}

/// Per-calculation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalculatorSettings {
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: Decimal,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            exchange_rate: default_exchange_rate(),
        }
    }
}

/// The full commercial scenario fed to the calculation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FbaCalculatorInput {
    pub pre_purchase: PrePurchase,
    pub during_sale: DuringSale,
    pub after_sale: AfterSale,
    #[serde(default)]
    pub settings: CalculatorSettings,
}

fn check_non_negative(field: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            message: "must be non-negative".to_string(),
        }
        .into());
    }
    Ok(())
}

fn check_percentage(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > dec!(100) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            message: "must be between 0 and 100".to_string(),
        }
        .into());
    }
    Ok(())
}

impl FbaCalculatorInput {
    /// Validates ranges and mode-conditional required fields.
    ///
    /// Violations are validation failures surfaced before computation
    /// begins, never coerced.
    pub fn validate(&self) -> Result<()> {
        self.pre_purchase.unit_cost.validate("unitCost")?;
        self.pre_purchase
            .shipping_per_unit
            .validate("shippingPerUnit")?;
        check_non_negative("quantity", self.pre_purchase.quantity)?;

        self.during_sale.selling_price.validate("sellingPrice")?;
        self.during_sale.fba_fee_per_unit.validate("fbaFeePerUnit")?;
        self.during_sale
            .monthly_storage_fee
            .validate("monthlyStorageFee")?;
        check_non_negative("dailySales", self.during_sale.daily_sales)?;
        check_non_negative("salesDays", self.during_sale.sales_days)?;
        check_percentage("referralFeeRate", self.during_sale.referral_fee_rate)?;

        match self.during_sale.advertising_mode {
            AdvertisingMode::Budget => match &self.during_sale.daily_ad_budget {
                Some(budget) => budget.validate("dailyAdBudget")?,
                None => {
                    return Err(ValidationError::MissingField(
                        "dailyAdBudget".to_string(),
                    )
                    .into())
                }
            },
            AdvertisingMode::Percentage => match self.during_sale.ad_percentage {
                Some(pct) => check_percentage("adPercentage", pct)?,
                None => {
                    return Err(ValidationError::MissingField(
                        "adPercentage".to_string(),
                    )
                    .into())
                }
            },
        }

        check_percentage("returnRate", self.after_sale.return_rate)?;
        check_percentage("resellableRate", self.after_sale.resellable_rate)?;

        if self.settings.exchange_rate <= Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: "exchangeRate".to_string(),
                message: "must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Top-line revenue/cost/profit figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_revenue: Money,
    pub total_cost: Money,
    pub gross_profit: Money,
    pub gross_profit_margin: Decimal,
    pub net_profit: Money,
    pub net_profit_margin: Decimal,
    pub profit_per_unit: Money,
    pub roi: Decimal,
    /// Absent when the scenario never breaks even.
    pub break_even_days: Option<Decimal>,
}

/// The nine itemized cost lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub purchase_cost: Money,
    pub shipping_cost: Money,
    pub advertising_cost: Money,
    pub referral_fee: Money,
    pub fba_fee: Money,
    pub storage_fee: Money,
    pub return_processing_fee: Money,
    pub unsellable_disposal_fee: Money,
    pub return_loss: Money,
}

/// Intermediate quantities exposed for transparency/debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntermediateValues {
    pub total_sales_quantity: Decimal,
    pub storage_coefficient: Decimal,
    pub actual_storage_fee_per_unit: Money,
    pub return_quantity: Decimal,
    pub resellable_quantity: Decimal,
    pub unsellable_quantity: Decimal,
    pub return_processing_fee_per_unit: Money,
}

/// Entirely derived; a new input always produces a brand-new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FbaCalculationResult {
    pub summary: Summary,
    pub cost_breakdown: CostBreakdown,
    pub intermediate_values: IntermediateValues,
}
