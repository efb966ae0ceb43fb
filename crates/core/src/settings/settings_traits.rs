//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for key/value tracker settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key. Missing keys are reported as
    /// `DatabaseError::NotFound`.
    fn get_setting(&self, setting_key: &str) -> Result<String>;

    /// Update a single setting.
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}
