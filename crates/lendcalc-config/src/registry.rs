//! Settings registry.
//!
//! Holds interest settings by name with at most one active setting per loan
//! type. Registering an active setting deactivates the previous one.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use tracing::{debug, info};

use lendcalc_core::LoanType;

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::file::SettingsFile;
use crate::interest::InterestSetting;

/// Thread-safe store of interest settings.
///
/// # Example
///
/// ```rust
/// use lendcalc_config::{InterestSetting, SettingsRegistry};
/// use lendcalc_core::LoanType;
///
/// let registry = SettingsRegistry::new();
/// registry.register(InterestSetting::new("Old", LoanType::Emi, 3.0).active()).unwrap();
/// registry.register(InterestSetting::new("New", LoanType::Emi, 2.5).active()).unwrap();
///
/// assert_eq!(registry.active_for(LoanType::Emi).unwrap().name, "New");
/// assert!(!registry.get("Old").unwrap().is_active);
/// ```
#[derive(Debug, Default)]
pub struct SettingsRegistry {
    settings: RwLock<HashMap<String, InterestSetting>>,
}

impl SettingsRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from parsed settings, registering them in file order.
    pub fn from_settings_file(file: SettingsFile) -> ConfigResult<Self> {
        let registry = Self::new();
        for setting in file.settings {
            registry.register(setting)?;
        }
        Ok(registry)
    }

    /// Loads a registry from a `.toml` or `.json` settings file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let registry = Self::from_settings_file(SettingsFile::from_path(path)?)?;
        info!(
            path = %path.display(),
            settings = registry.len()?,
            "loaded interest settings"
        );
        Ok(registry)
    }

    /// Validates and stores a setting, replacing any setting of the same name.
    ///
    /// If the setting is active, every other setting of the same loan type is
    /// deactivated.
    pub fn register(&self, setting: InterestSetting) -> ConfigResult<()> {
        setting.validate_or_error()?;

        let mut settings = self
            .settings
            .write()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;

        if setting.is_active {
            for other in settings.values_mut() {
                if other.loan_type == setting.loan_type && other.name != setting.name && other.is_active {
                    debug!(name = %other.name, loan_type = %other.loan_type, "deactivating interest setting");
                    other.is_active = false;
                }
            }
        }

        debug!(name = %setting.name, loan_type = %setting.loan_type, active = setting.is_active, "registered interest setting");
        settings.insert(setting.name.clone(), setting);
        Ok(())
    }

    /// Returns the setting with the given name.
    pub fn get(&self, name: &str) -> ConfigResult<InterestSetting> {
        let settings = self
            .settings
            .read()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;

        settings
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::not_found(name))
    }

    /// Returns the active setting for a loan type.
    pub fn active_for(&self, loan_type: LoanType) -> ConfigResult<InterestSetting> {
        let settings = self
            .settings
            .read()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;

        settings
            .values()
            .find(|s| s.is_active && s.loan_type == loan_type)
            .cloned()
            .ok_or_else(|| ConfigError::not_found(format!("active {loan_type} setting")))
    }

    /// Returns all active settings ordered by loan type, then name.
    pub fn active_settings(&self) -> ConfigResult<Vec<InterestSetting>> {
        let settings = self
            .settings
            .read()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;

        let mut active: Vec<InterestSetting> =
            settings.values().filter(|s| s.is_active).cloned().collect();
        active.sort_by(|a, b| a.loan_type.cmp(&b.loan_type).then_with(|| a.name.cmp(&b.name)));
        Ok(active)
    }

    /// Removes a setting, returning it.
    pub fn remove(&self, name: &str) -> ConfigResult<InterestSetting> {
        let mut settings = self
            .settings
            .write()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;

        settings.remove(name).ok_or_else(|| ConfigError::not_found(name))
    }

    /// Number of registered settings.
    pub fn len(&self) -> ConfigResult<usize> {
        let settings = self
            .settings
            .read()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;
        Ok(settings.len())
    }

    /// Returns true if no settings are registered.
    pub fn is_empty(&self) -> ConfigResult<bool> {
        Ok(self.len()? == 0)
    }
}
