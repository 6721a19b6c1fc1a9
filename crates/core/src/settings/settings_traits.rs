//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for the string key/value settings store.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key. `None` when never set.
    fn get_setting(&self, setting_key: &str) -> Result<Option<String>>;

    /// Insert or replace a single setting.
    async fn set_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}
