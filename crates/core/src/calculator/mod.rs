//! Profit calculation engine - input/result models and the pure pipeline.

mod calculator_model;
mod calculator_service;
#[cfg(test)]
mod calculator_service_tests;

pub use calculator_model::{
    AdvertisingMode, AfterSale, CalculatorSettings, CostBreakdown, DuringSale,
    FbaCalculationResult, FbaCalculatorInput, IntermediateValues, PrePurchase, Summary,
};
pub use calculator_service::calculate_profit;
