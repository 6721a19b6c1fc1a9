use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

mod calculator;
mod projects;
mod settings;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(calculator::router())
        .merge(projects::router())
        .merge(settings::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
