use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculator::{
    calculate_profit, AdvertisingMode, AfterSale, CalculatorSettings, DuringSale,
    FbaCalculatorInput, PrePurchase,
};
use crate::errors::Error;
use crate::money::MoneyInput;

/// The worked standard scenario: 100 units at $10 + $2 shipping, sold at
/// $29.99 over 20 days, 10% ad spend, 15% referral, $4.50 FBA fee, $0.50
/// monthly storage, 5% returns of which 80% resellable, rate 7.25.
fn standard_input() -> FbaCalculatorInput {
    FbaCalculatorInput {
        pre_purchase: PrePurchase {
            unit_cost: MoneyInput::from_usd(dec!(10.00)),
            quantity: 100,
            shipping_per_unit: MoneyInput::from_usd(dec!(2.00)),
        },
        during_sale: DuringSale {
            selling_price: MoneyInput::from_usd(dec!(29.99)),
            daily_sales: 5,
            sales_days: 20,
            advertising_mode: AdvertisingMode::Percentage,
            daily_ad_budget: None,
            ad_percentage: Some(dec!(10)),
            referral_fee_rate: dec!(15),
            fba_fee_per_unit: MoneyInput::from_usd(dec!(4.50)),
            monthly_storage_fee: MoneyInput::from_usd(dec!(0.50)),
        },
        after_sale: AfterSale {
            return_rate: dec!(5),
            resellable_rate: dec!(80),
        },
        settings: CalculatorSettings {
            exchange_rate: dec!(7.25),
        },
    }
}

#[test]
fn standard_case_summary() {
    let result = calculate_profit(&standard_input()).unwrap();
    let s = &result.summary;

    assert_eq!(s.total_revenue.usd, dec!(2999.00));
    assert_eq!(s.total_revenue.cny, dec!(21742.75));
    assert_eq!(s.gross_profit.usd, dec!(582.58));
    assert_eq!(s.gross_profit_margin, dec!(19.43));
    assert_eq!(s.total_cost.usd, dec!(2414.92));
    assert_eq!(s.net_profit.usd, dec!(584.08));
    assert_eq!(s.net_profit_margin, dec!(19.48));
    assert!(s.net_profit_margin > Decimal::ZERO);
    assert_eq!(s.profit_per_unit.usd, dec!(5.84));
    assert_eq!(s.roi, dec!(38.94));
    assert_eq!(s.break_even_days, Some(dec!(51.36)));
}

#[test]
fn standard_case_breakdown_and_intermediates() {
    let result = calculate_profit(&standard_input()).unwrap();
    let b = &result.cost_breakdown;
    let iv = &result.intermediate_values;

    assert_eq!(b.purchase_cost.usd, dec!(1000.00));
    assert_eq!(b.shipping_cost.usd, dec!(200.00));
    assert_eq!(b.advertising_cost.usd, dec!(299.90));
    // 449.85 total referral minus the refund for 5 returned units.
    assert_eq!(b.referral_fee.usd, dec!(427.36));
    assert_eq!(b.fba_fee.usd, dec!(450.00));
    assert_eq!(b.storage_fee.usd, dec!(16.67));
    assert_eq!(b.return_processing_fee.usd, dec!(4.50));
    assert_eq!(b.unsellable_disposal_fee.usd, dec!(4.50));
    assert_eq!(b.return_loss.usd, dec!(12.00));

    assert_eq!(iv.total_sales_quantity, dec!(100.00));
    assert_eq!(iv.storage_coefficient, dec!(0.3333));
    assert_eq!(iv.actual_storage_fee_per_unit.usd, dec!(0.17));
    assert_eq!(iv.return_quantity, dec!(5.00));
    assert_eq!(iv.resellable_quantity, dec!(4.00));
    assert_eq!(iv.unsellable_quantity, dec!(1.00));
    assert_eq!(iv.return_processing_fee_per_unit.usd, dec!(0.90));
}

#[test]
fn gross_profit_is_revenue_minus_gross_cost() {
    let result = calculate_profit(&standard_input()).unwrap();
    let s = &result.summary;
    let b = &result.cost_breakdown;

    // Reconstruct the gross cost from unrounded legs would drift, but at
    // display precision the identity must hold within one cent per leg.
    let gross_cost_approx = b.purchase_cost.usd
        + b.shipping_cost.usd
        + b.advertising_cost.usd
        + dec!(449.85) // un-adjusted referral fee
        + b.fba_fee.usd
        + b.storage_fee.usd;
    let diff = (s.total_revenue.usd - gross_cost_approx - s.gross_profit.usd).abs();
    assert!(diff <= dec!(0.01), "residual drift {diff}");
}

#[test]
fn unsellable_plus_resellable_equals_returns() {
    let result = calculate_profit(&standard_input()).unwrap();
    let iv = &result.intermediate_values;
    let diff =
        (iv.resellable_quantity + iv.unsellable_quantity - iv.return_quantity).abs();
    assert!(diff <= dec!(0.01));
}

#[test]
fn sales_capped_at_purchased_quantity() {
    let mut input = standard_input();
    input.pre_purchase.quantity = 10;

    let result = calculate_profit(&input).unwrap();
    assert_eq!(result.intermediate_values.total_sales_quantity, dec!(10.00));
    assert_eq!(result.summary.total_revenue.usd, dec!(299.90));
}

#[test]
fn budget_mode_spends_daily_budget_over_window() {
    let mut input = standard_input();
    input.during_sale.advertising_mode = AdvertisingMode::Budget;
    input.during_sale.ad_percentage = None;
    input.during_sale.daily_ad_budget = Some(MoneyInput::from_usd(dec!(10.00)));

    let result = calculate_profit(&input).unwrap();
    assert_eq!(result.cost_breakdown.advertising_cost.usd, dec!(200.00));
}

#[test]
fn return_processing_fee_capped_at_five_dollars() {
    let mut input = standard_input();
    // 15% of $200 is $30/unit referral; 20% of that exceeds the cap.
    input.during_sale.selling_price = MoneyInput::from_usd(dec!(200.00));

    let result = calculate_profit(&input).unwrap();
    assert_eq!(
        result.intermediate_values.return_processing_fee_per_unit.usd,
        dec!(5.00)
    );
}

#[test]
fn cny_primary_inputs_resolve_through_the_rate() {
    let mut input = standard_input();
    input.pre_purchase.unit_cost = MoneyInput::from_cny(dec!(72.50));

    let result = calculate_profit(&input).unwrap();
    // 72.50 CNY at 7.25 is the same $10 unit cost.
    assert_eq!(result.cost_breakdown.purchase_cost.usd, dec!(1000.00));
}

#[test]
fn zero_sales_days_hits_every_guard() {
    let mut input = standard_input();
    input.during_sale.sales_days = 0;

    let result = calculate_profit(&input).unwrap();
    let s = &result.summary;
    let iv = &result.intermediate_values;

    assert_eq!(iv.storage_coefficient, Decimal::ZERO);
    assert_eq!(iv.total_sales_quantity, Decimal::ZERO);
    assert_eq!(s.total_revenue.usd, Decimal::ZERO);
    assert_eq!(s.gross_profit_margin, Decimal::ZERO);
    assert_eq!(s.net_profit_margin, Decimal::ZERO);
    assert_eq!(s.profit_per_unit.usd, Decimal::ZERO);
    assert_eq!(s.break_even_days, None);
}

#[test]
fn unprofitable_scenario_has_no_break_even() {
    let mut input = standard_input();
    input.during_sale.selling_price = MoneyInput::from_usd(dec!(1.00));

    let result = calculate_profit(&input).unwrap();
    assert!(result.summary.net_profit.usd < Decimal::ZERO);
    assert_eq!(result.summary.break_even_days, None);
}

#[test]
fn break_even_present_iff_positive_daily_profit() {
    let result = calculate_profit(&standard_input()).unwrap();
    let s = &result.summary;
    assert!(s.net_profit.usd > Decimal::ZERO);
    assert!(s.break_even_days.is_some());
}

#[test]
fn rejects_missing_ad_percentage() {
    let mut input = standard_input();
    input.during_sale.ad_percentage = None;

    assert!(matches!(
        calculate_profit(&input),
        Err(Error::Validation(_))
    ));
}

#[test]
fn rejects_missing_daily_ad_budget() {
    let mut input = standard_input();
    input.during_sale.advertising_mode = AdvertisingMode::Budget;
    input.during_sale.daily_ad_budget = None;

    assert!(matches!(
        calculate_profit(&input),
        Err(Error::Validation(_))
    ));
}

#[test]
fn rejects_negative_quantity() {
    let mut input = standard_input();
    input.pre_purchase.quantity = -1;

    assert!(matches!(
        calculate_profit(&input),
        Err(Error::Validation(_))
    ));
}

#[test]
fn rejects_out_of_range_percentage() {
    let mut input = standard_input();
    input.after_sale.return_rate = dec!(101);

    assert!(matches!(
        calculate_profit(&input),
        Err(Error::Validation(_))
    ));
}

#[test]
fn rejects_non_positive_exchange_rate() {
    let mut input = standard_input();
    input.settings.exchange_rate = Decimal::ZERO;

    assert!(matches!(
        calculate_profit(&input),
        Err(Error::Validation(_))
    ));
}

#[test]
fn rejects_negative_money_leg() {
    let mut input = standard_input();
    input.pre_purchase.unit_cost.usd = dec!(-1);

    assert!(matches!(
        calculate_profit(&input),
        Err(Error::Validation(_))
    ));
}

#[test]
fn input_round_trips_through_camel_case_json() {
    let input = standard_input();
    let json = serde_json::to_string(&input).unwrap();
    assert!(json.contains("\"prePurchase\""));
    assert!(json.contains("\"advertisingMode\":\"percentage\""));

    let back: FbaCalculatorInput = serde_json::from_str(&json).unwrap();
    assert_eq!(back, input);
}

#[test]
fn defaults_apply_when_fields_omitted() {
    let json = r#"{
        "prePurchase": {
            "unitCost": {"usd": 10.0},
            "quantity": 100,
            "shippingPerUnit": {"usd": 2.0}
        },
        "duringSale": {
            "sellingPrice": {"usd": 29.99},
            "dailySales": 5,
            "salesDays": 20,
            "advertisingMode": "percentage",
            "adPercentage": 10,
            "fbaFeePerUnit": {"usd": 4.5},
            "monthlyStorageFee": {"usd": 0.5}
        },
        "afterSale": {}
    }"#;

    let input: FbaCalculatorInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.during_sale.referral_fee_rate, dec!(15));
    assert_eq!(input.after_sale.return_rate, dec!(5));
    assert_eq!(input.after_sale.resellable_rate, dec!(80));
    assert_eq!(input.settings.exchange_rate, dec!(7.25));
}
