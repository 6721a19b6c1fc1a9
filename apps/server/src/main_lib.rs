use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use fba_core::projects::{ProjectService, ProjectServiceTrait};
use fba_core::settings::{SettingsService, SettingsServiceTrait};
use fba_storage_sqlite::projects::ProjectRepository;
use fba_storage_sqlite::settings::SettingsRepository;
use fba_storage_sqlite::{create_pool, init, run_migrations, spawn_writer};

pub struct AppState {
    pub project_service: Arc<dyn ProjectServiceTrait + Send + Sync>,
    pub settings_service: Arc<dyn SettingsServiceTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("FBA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let project_repository = Arc::new(ProjectRepository::new(pool.clone(), writer.clone()));
    let project_service: Arc<dyn ProjectServiceTrait + Send + Sync> =
        Arc::new(ProjectService::new(project_repository));

    let settings_repository = Arc::new(SettingsRepository::new(pool, writer));
    let settings_service: Arc<dyn SettingsServiceTrait + Send + Sync> =
        Arc::new(SettingsService::new(settings_repository));

    Ok(Arc::new(AppState {
        project_service,
        settings_service,
        db_path,
    }))
}
