use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use rust_decimal::Decimal;

use crate::constants::SETTING_EXCHANGE_RATE_KEY;
use crate::errors::{Result, ValidationError};
use crate::settings::settings_traits::SettingsRepositoryTrait;
use crate::settings::Settings;

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Current settings; falls back to the built-in default when the rate
    /// was never stored or does not parse.
    fn get_settings(&self) -> Result<Settings>;

    /// Persist new settings. The exchange rate must be positive.
    async fn update_settings(&self, new_settings: Settings) -> Result<Settings>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        let stored = self
            .settings_repository
            .get_setting(SETTING_EXCHANGE_RATE_KEY)?;

        let settings = match stored {
            Some(value) => match value.parse::<Decimal>() {
                Ok(rate) if rate > Decimal::ZERO => Settings {
                    exchange_rate: rate,
                },
                _ => {
                    warn!("Stored exchange rate {value:?} is invalid, using default");
                    Settings::default()
                }
            },
            None => Settings::default(),
        };
        Ok(settings)
    }

    async fn update_settings(&self, new_settings: Settings) -> Result<Settings> {
        if new_settings.exchange_rate <= Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: "exchangeRate".to_string(),
                message: "must be positive".to_string(),
            }
            .into());
        }

        self.settings_repository
            .set_setting(
                SETTING_EXCHANGE_RATE_KEY,
                &new_settings.exchange_rate.to_string(),
            )
            .await?;
        Ok(new_settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSettingsRepository {
        values: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl SettingsRepositoryTrait for MockSettingsRepository {
        fn get_setting(&self, setting_key: &str) -> Result<Option<String>> {
            Ok(self.values.lock().unwrap().get(setting_key).cloned())
        }

        async fn set_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(setting_key.to_string(), setting_value.to_string());
            Ok(())
        }
    }

    #[test]
    fn defaults_when_never_set() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::default()));
        assert_eq!(service.get_settings().unwrap().exchange_rate, dec!(7.25));
    }

    #[tokio::test]
    async fn round_trips_updated_rate() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::default()));
        service
            .update_settings(Settings {
                exchange_rate: dec!(7.10),
            })
            .await
            .unwrap();
        assert_eq!(service.get_settings().unwrap().exchange_rate, dec!(7.10));
    }

    #[tokio::test]
    async fn rejects_non_positive_rate() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::default()));
        let result = service
            .update_settings(Settings {
                exchange_rate: dec!(0),
            })
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn defaults_when_stored_value_is_garbage() {
        let repo = Arc::new(MockSettingsRepository::default());
        repo.values
            .lock()
            .unwrap()
            .insert(SETTING_EXCHANGE_RATE_KEY.to_string(), "not-a-rate".to_string());
        let service = SettingsService::new(repo);
        assert_eq!(service.get_settings().unwrap().exchange_rate, dec!(7.25));
    }
}
