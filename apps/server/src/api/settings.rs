use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use fba_core::settings::Settings;

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Settings>> {
    let settings = state.settings_service.get_settings()?;
    Ok(Json(settings))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<Settings>,
) -> ApiResult<Json<Settings>> {
    let updated = state.settings_service.update_settings(settings).await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).put(update_settings))
}
