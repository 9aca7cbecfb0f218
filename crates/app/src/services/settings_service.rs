//! Settings service — use-cases for reading and writing setpoints.

use greenhouse_domain::error::GreenhouseError;
use greenhouse_domain::setting::{SettingName, SettingsSnapshot};

use crate::shared::SharedGreenhouse;

/// Application service for the settings store.
#[derive(Debug, Clone)]
pub struct SettingsService {
    state: SharedGreenhouse,
}

impl SettingsService {
    #[must_use]
    pub fn new(state: SharedGreenhouse) -> Self {
        Self { state }
    }

    /// Set one setting from its wire name and raw value.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhouseError::UnknownSetting`] for a name outside the
    /// seven known settings, or [`GreenhouseError::InvalidValue`] when the
    /// value does not parse or is out of range. The stored value is
    /// unchanged on error.
    pub fn set_setting(&self, name: &str, raw: &str) -> Result<(), GreenhouseError> {
        let name: SettingName = name.parse()?;
        self.state.with(|gh| gh.settings.set(name, raw))?;
        tracing::debug!(setting = %name, value = raw, "setting updated");
        Ok(())
    }

    /// Current value of one setting, by wire name.
    ///
    /// # Errors
    ///
    /// Returns [`GreenhouseError::UnknownSetting`] for an unknown name.
    pub fn get_setting(&self, name: &str) -> Result<String, GreenhouseError> {
        let name: SettingName = name.parse()?;
        Ok(self.state.with(|gh| gh.settings.get(name)))
    }

    /// All seven current values.
    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        self.state.with(|gh| gh.settings.snapshot())
    }
}
