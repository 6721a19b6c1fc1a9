//! Flattened CSV export of the calculation summary.

use crate::calculator::FbaCalculationResult;
use crate::errors::{Error, Result};
use crate::money::Money;

/// Renders the four headline figures as `metric,value_usd,value_cny` rows.
pub fn summary_csv(result: &FbaCalculationResult) -> Result<String> {
    let s = &result.summary;
    let rows: [(&str, &Money); 4] = [
        ("totalRevenue", &s.total_revenue),
        ("totalCost", &s.total_cost),
        ("grossProfit", &s.gross_profit),
        ("netProfit", &s.net_profit),
    ];

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["metric", "value_usd", "value_cny"])
        .map_err(|e| Error::Unexpected(e.to_string()))?;
    for (metric, money) in rows {
        writer
            .write_record([metric, &money.usd.to_string(), &money.cny.to_string()])
            .map_err(|e| Error::Unexpected(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Unexpected(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Unexpected(e.to_string()))
}
