//! The deterministic profit calculation pipeline.
//!
//! All intermediate arithmetic is performed in exact `Decimal`; only final
//! values are coerced to display precision. Division-by-zero guards are
//! built into the pipeline, so `compute` itself cannot fail for validated
//! input.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::calculator::calculator_model::{
    AdvertisingMode, CostBreakdown, FbaCalculationResult, FbaCalculatorInput, IntermediateValues,
    Summary,
};
use crate::constants::COEFFICIENT_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::money::{round_display, to_base_usd, to_display};

/// Days per storage month used for the storage coefficient.
const DAYS_PER_STORAGE_MONTH: u32 = 30;

/// Validates the input and runs the calculation pipeline.
pub fn calculate_profit(input: &FbaCalculatorInput) -> Result<FbaCalculationResult> {
    input.validate()?;
    Ok(compute(input))
}

fn compute(input: &FbaCalculatorInput) -> FbaCalculationResult {
    let rate = input.settings.exchange_rate;
    let money = |base: Decimal| to_display(base, rate);

    let unit_cost = to_base_usd(&input.pre_purchase.unit_cost, rate);
    let quantity = Decimal::from(input.pre_purchase.quantity);
    let shipping_per_unit = to_base_usd(&input.pre_purchase.shipping_per_unit, rate);

    let selling_price = to_base_usd(&input.during_sale.selling_price, rate);
    let daily_sales = Decimal::from(input.during_sale.daily_sales);
    let sales_days = Decimal::from(input.during_sale.sales_days);

    let referral_fee_rate = input.during_sale.referral_fee_rate / dec!(100);
    let fba_fee_per_unit = to_base_usd(&input.during_sale.fba_fee_per_unit, rate);
    let monthly_storage_fee = to_base_usd(&input.during_sale.monthly_storage_fee, rate);

    let return_rate = input.after_sale.return_rate / dec!(100);
    let resellable_rate = input.after_sale.resellable_rate / dec!(100);

    // Pre-sale costs
    let purchase_cost = unit_cost * quantity;
    let shipping_cost = shipping_per_unit * quantity;
    let total_pre_cost = purchase_cost + shipping_cost;

    // Sales volume: a seller can never sell more units than were purchased.
    let planned_sales = daily_sales * sales_days;
    let actual_sales_quantity = quantity.min(planned_sales);

    let total_revenue = selling_price * actual_sales_quantity;

    let advertising_cost = match input.during_sale.advertising_mode {
        AdvertisingMode::Budget => {
            // Validation guarantees the budget is present for this mode.
            let daily_budget = input
                .during_sale
                .daily_ad_budget
                .as_ref()
                .map(|b| to_base_usd(b, rate))
                .unwrap_or(Decimal::ZERO);
            daily_budget * sales_days
        }
        AdvertisingMode::Percentage => {
            let ad_percentage =
                input.during_sale.ad_percentage.unwrap_or(Decimal::ZERO) / dec!(100);
            total_revenue * ad_percentage
        }
    };

    let referral_fee_per_unit = selling_price * referral_fee_rate;
    let total_referral_fee = referral_fee_per_unit * actual_sales_quantity;

    let total_fba_fee = fba_fee_per_unit * actual_sales_quantity;

    // Average days a unit sits in storage is half the sales window.
    let avg_storage_days = sales_days / dec!(2);
    let storage_coefficient = if sales_days > Decimal::ZERO {
        avg_storage_days / Decimal::from(DAYS_PER_STORAGE_MONTH)
    } else {
        Decimal::ZERO
    };
    let actual_storage_fee_per_unit = monthly_storage_fee * storage_coefficient;
    let total_storage_fee = actual_storage_fee_per_unit * actual_sales_quantity;

    // Gross figures
    let gross_cost =
        total_pre_cost + advertising_cost + total_referral_fee + total_fba_fee + total_storage_fee;
    let gross_profit = total_revenue - gross_cost;
    let gross_profit_margin = if total_revenue > Decimal::ZERO {
        gross_profit / total_revenue * dec!(100)
    } else {
        Decimal::ZERO
    };

    // After-sale: returns refund their referral fee and cost a processing
    // fee of 20% of the referral fee, capped at a flat $5.00.
    let return_quantity = actual_sales_quantity * return_rate;

    let return_processing_fee_per_unit = (referral_fee_per_unit * dec!(0.20)).min(dec!(5.00));
    let total_return_processing_fee = return_processing_fee_per_unit * return_quantity;

    let resellable_quantity = return_quantity * resellable_rate;
    let unsellable_quantity = return_quantity * (Decimal::ONE - resellable_rate);

    // The seller absorbs both the original unit+shipping cost and a
    // disposal fee for stock that cannot be resold.
    let unsellable_disposal_fee = fba_fee_per_unit * unsellable_quantity;
    let return_loss = (unit_cost + shipping_per_unit) * unsellable_quantity;

    let refunded_referral_fee = referral_fee_per_unit * return_quantity;
    let adjusted_referral_fee = total_referral_fee - refunded_referral_fee;

    // Net figures
    let total_cost = total_pre_cost
        + advertising_cost
        + adjusted_referral_fee
        + total_fba_fee
        + total_storage_fee
        + total_return_processing_fee
        + unsellable_disposal_fee
        + return_loss;

    let net_profit = total_revenue - total_cost;
    let net_profit_margin = if total_revenue > Decimal::ZERO {
        net_profit / total_revenue * dec!(100)
    } else {
        Decimal::ZERO
    };

    // Unit economics
    let profit_per_unit = if actual_sales_quantity > Decimal::ZERO {
        net_profit / actual_sales_quantity
    } else {
        Decimal::ZERO
    };

    let total_investment = purchase_cost + shipping_cost + advertising_cost;
    let roi = if total_investment > Decimal::ZERO {
        net_profit / total_investment * dec!(100)
    } else {
        Decimal::ZERO
    };

    // Break-even: a non-positive daily profit never breaks even, so the
    // field is an explicit absence rather than zero or infinity.
    let break_even_days = if sales_days <= Decimal::ZERO {
        None
    } else {
        let daily_profit = net_profit / sales_days;
        if daily_profit > Decimal::ZERO {
            Some(total_investment / daily_profit)
        } else {
            None
        }
    };

    FbaCalculationResult {
        summary: Summary {
            total_revenue: money(total_revenue),
            total_cost: money(total_cost),
            gross_profit: money(gross_profit),
            gross_profit_margin: round_display(gross_profit_margin),
            net_profit: money(net_profit),
            net_profit_margin: round_display(net_profit_margin),
            profit_per_unit: money(profit_per_unit),
            roi: round_display(roi),
            break_even_days: break_even_days.map(round_display),
        },
        cost_breakdown: CostBreakdown {
            purchase_cost: money(purchase_cost),
            shipping_cost: money(shipping_cost),
            advertising_cost: money(advertising_cost),
            referral_fee: money(adjusted_referral_fee),
            fba_fee: money(total_fba_fee),
            storage_fee: money(total_storage_fee),
            return_processing_fee: money(total_return_processing_fee),
            unsellable_disposal_fee: money(unsellable_disposal_fee),
            return_loss: money(return_loss),
        },
        intermediate_values: IntermediateValues {
            total_sales_quantity: round_display(actual_sales_quantity),
            storage_coefficient: storage_coefficient.round_dp_with_strategy(
                COEFFICIENT_DECIMAL_PRECISION,
                RoundingStrategy::MidpointAwayFromZero,
            ),
            actual_storage_fee_per_unit: money(actual_storage_fee_per_unit),
            return_quantity: round_display(return_quantity),
            resellable_quantity: round_display(resellable_quantity),
            unsellable_quantity: round_display(unsellable_quantity),
            return_processing_fee_per_unit: money(return_processing_fee_per_unit),
        },
    }
}
