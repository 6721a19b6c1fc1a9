use std::sync::Arc;

use axum::{routing::post, Json, Router};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use fba_core::calculator::{calculate_profit, FbaCalculationResult, FbaCalculatorInput};

/// Run the profit pipeline without persisting anything.
async fn calculate(
    Json(input): Json<FbaCalculatorInput>,
) -> ApiResult<Json<FbaCalculationResult>> {
    let result = calculate_profit(&input)?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/calculate", post(calculate))
}
