use super::settings_model::{setting_keys, TrackerSettings, TrackerSettingsUpdate};
use super::SettingsRepositoryTrait;
use crate::constants::MAX_WINDOW_DAYS;
use crate::errors::{DatabaseError, Error, Result};
use crate::utils::time_utils::tracker_today;
use async_trait::async_trait;
use chrono::NaiveDate;
use chrono_tz::Tz;
use log::{debug, warn};
use std::str::FromStr;
use std::sync::Arc;

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Stored settings with defaults for anything not stored.
    fn get_tracker_settings(&self) -> Result<TrackerSettings>;

    async fn update_tracker_settings(&self, update: &TrackerSettingsUpdate) -> Result<TrackerSettings>;

    /// Today's date in the configured timezone.
    fn current_date(&self) -> Result<NaiveDate>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self {
            settings_repository,
        }
    }

    fn get_optional(&self, key: &str) -> Result<Option<String>> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn parse_value<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T> {
        match raw {
            None => Ok(default),
            Some(value) => value.trim().parse::<T>().map_err(|_| {
                warn!("Rejected stored setting {}={:?}", key, value);
                Error::InvalidConfigValue(format!("{} = '{}'", key, value))
            }),
        }
    }

    fn parse_timezone(timezone: &str) -> Result<Tz> {
        Tz::from_str(timezone)
            .map_err(|_| Error::InvalidConfigValue(format!("Unknown timezone '{}'", timezone)))
    }

    /// Checks ranges and the timezone name.
    pub fn validate(settings: &TrackerSettings) -> Result<()> {
        if settings.dashboard_window_days == 0 || settings.dashboard_window_days > MAX_WINDOW_DAYS {
            return Err(Error::InvalidConfigValue(format!(
                "{} must be between 1 and {}",
                setting_keys::DASHBOARD_WINDOW_DAYS,
                MAX_WINDOW_DAYS
            )));
        }
        if settings.streak_lookback_days == 0 || settings.streak_lookback_days > MAX_WINDOW_DAYS {
            return Err(Error::InvalidConfigValue(format!(
                "{} must be between 1 and {}",
                setting_keys::STREAK_LOOKBACK_DAYS,
                MAX_WINDOW_DAYS
            )));
        }
        Self::parse_timezone(&settings.timezone)?;
        Ok(())
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_tracker_settings(&self) -> Result<TrackerSettings> {
        let defaults = TrackerSettings::default();

        let settings = TrackerSettings {
            dashboard_window_days: Self::parse_value(
                setting_keys::DASHBOARD_WINDOW_DAYS,
                self.get_optional(setting_keys::DASHBOARD_WINDOW_DAYS)?,
                defaults.dashboard_window_days,
            )?,
            streak_lookback_days: Self::parse_value(
                setting_keys::STREAK_LOOKBACK_DAYS,
                self.get_optional(setting_keys::STREAK_LOOKBACK_DAYS)?,
                defaults.streak_lookback_days,
            )?,
            recent_achievements_limit: Self::parse_value(
                setting_keys::RECENT_ACHIEVEMENTS_LIMIT,
                self.get_optional(setting_keys::RECENT_ACHIEVEMENTS_LIMIT)?,
                defaults.recent_achievements_limit,
            )?,
            timezone: self
                .get_optional(setting_keys::TIMEZONE)?
                .unwrap_or(defaults.timezone),
        };

        Self::validate(&settings)?;
        Ok(settings)
    }

    async fn update_tracker_settings(&self, update: &TrackerSettingsUpdate) -> Result<TrackerSettings> {
        let merged = self.get_tracker_settings()?.merged(update);
        Self::validate(&merged)?;

        if let Some(days) = update.dashboard_window_days {
            self.settings_repository
                .update_setting(setting_keys::DASHBOARD_WINDOW_DAYS, &days.to_string())
                .await?;
        }
        if let Some(days) = update.streak_lookback_days {
            self.settings_repository
                .update_setting(setting_keys::STREAK_LOOKBACK_DAYS, &days.to_string())
                .await?;
        }
        if let Some(limit) = update.recent_achievements_limit {
            self.settings_repository
                .update_setting(setting_keys::RECENT_ACHIEVEMENTS_LIMIT, &limit.to_string())
                .await?;
        }
        if let Some(ref timezone) = update.timezone {
            self.settings_repository
                .update_setting(setting_keys::TIMEZONE, timezone)
                .await?;
        }

        debug!("Tracker settings updated: {:?}", merged);
        Ok(merged)
    }

    fn current_date(&self) -> Result<NaiveDate> {
        let settings = self.get_tracker_settings()?;
        let tz = Self::parse_timezone(&settings.timezone)?;
        Ok(tracker_today(tz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    #[derive(Default)]
    struct MockSettingsRepository {
        values: RwLock<HashMap<String, String>>,
    }

    impl MockSettingsRepository {
        fn with(pairs: &[(&str, &str)]) -> Self {
            let repo = Self::default();
            {
                let mut values = repo.values.write().unwrap();
                for (k, v) in pairs {
                    values.insert(k.to_string(), v.to_string());
                }
            }
            repo
        }
    }

    #[async_trait]
    impl SettingsRepositoryTrait for MockSettingsRepository {
        fn get_setting(&self, setting_key: &str) -> Result<String> {
            self.values
                .read()
                .unwrap()
                .get(setting_key)
                .cloned()
                .ok_or_else(|| DatabaseError::NotFound(setting_key.to_string()).into())
        }

        async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
            self.values
                .write()
                .unwrap()
                .insert(setting_key.to_string(), setting_value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_settings_fall_back_to_defaults() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::default()));
        assert_eq!(service.get_tracker_settings().unwrap(), TrackerSettings::default());
    }

    #[test]
    fn test_stored_settings_override_defaults() {
        let repo = MockSettingsRepository::with(&[
            (setting_keys::DASHBOARD_WINDOW_DAYS, "14"),
            (setting_keys::TIMEZONE, "Europe/Berlin"),
        ]);
        let settings = SettingsService::new(Arc::new(repo)).get_tracker_settings().unwrap();
        assert_eq!(settings.dashboard_window_days, 14);
        assert_eq!(settings.streak_lookback_days, 30);
        assert_eq!(settings.timezone, "Europe/Berlin");
    }

    #[test]
    fn test_unparseable_setting_is_rejected() {
        let repo = MockSettingsRepository::with(&[(setting_keys::STREAK_LOOKBACK_DAYS, "many")]);
        let result = SettingsService::new(Arc::new(repo)).get_tracker_settings();
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let repo = MockSettingsRepository::with(&[(setting_keys::TIMEZONE, "Mars/Olympus")]);
        let service = SettingsService::new(Arc::new(repo));
        assert!(matches!(
            service.get_tracker_settings(),
            Err(Error::InvalidConfigValue(_))
        ));
        assert!(service.current_date().is_err());
    }

    #[test]
    fn test_current_date_resolves_with_default_timezone() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::default()));
        assert!(service.current_date().is_ok());
    }

    #[tokio::test]
    async fn test_update_writes_only_given_fields() {
        let repo = Arc::new(MockSettingsRepository::default());
        let service = SettingsService::new(repo.clone());

        let updated = service
            .update_tracker_settings(&TrackerSettingsUpdate {
                dashboard_window_days: Some(30),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.dashboard_window_days, 30);
        let stored = repo.values.read().unwrap().clone();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored.get(setting_keys::DASHBOARD_WINDOW_DAYS).unwrap(), "30");
    }

    #[tokio::test]
    async fn test_invalid_update_writes_nothing() {
        let repo = Arc::new(MockSettingsRepository::default());
        let service = SettingsService::new(repo.clone());

        let result = service
            .update_tracker_settings(&TrackerSettingsUpdate {
                dashboard_window_days: Some(0),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
        assert!(repo.values.read().unwrap().is_empty());
    }
}
