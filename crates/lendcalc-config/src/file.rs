//! Settings files.
//!
//! A settings file holds a list of interest settings under a `settings` key,
//! in TOML (`[[settings]]` tables) or JSON (`{"settings": [...]}`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::interest::InterestSetting;

/// Parsed contents of a settings file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Interest settings in file order.
    #[serde(default)]
    pub settings: Vec<InterestSetting>,
}

impl SettingsFile {
    /// Parses TOML settings.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parses JSON settings.
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a TOML settings file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::from_toml_str(&read(path.as_ref())?)
    }

    /// Reads a settings file, choosing the format by extension (`.toml` or `.json`).
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&read(path)?),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&read(path)?),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn read(path: &Path) -> ConfigResult<String> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendcalc_core::LoanType;

    const SAMPLE: &str = r#"
[[settings]]
name = "Standard Flat"
loan_type = "Flat Rate"
default_rate = 3.0
is_active = true

[[settings.amount_slabs]]
min_amount = 1.0
max_amount = 25000.0
interest_rate = 3.5

[[settings]]
name = "Standard EMI"
loan_type = "EMI"
default_rate = 2.5
penalty_rate = 2.0
"#;

    #[test]
    fn test_parse_toml() {
        let file = SettingsFile::from_toml_str(SAMPLE).unwrap();
        assert_eq!(file.settings.len(), 2);

        let flat = &file.settings[0];
        assert_eq!(flat.loan_type, LoanType::FlatRate);
        assert!(flat.is_active);
        assert_eq!(flat.penalty_rate, 1.0);
        assert_eq!(flat.amount_slabs.len(), 1);
        assert_eq!(flat.amount_slabs[0].max_amount, Some(25_000.0));

        let emi = &file.settings[1];
        assert_eq!(emi.loan_type, LoanType::Emi);
        assert!(!emi.is_active);
        assert_eq!(emi.penalty_rate, 2.0);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"settings": [{"name": "J", "loan_type": "emi", "default_rate": 1.5}]}"#;
        let file = SettingsFile::from_json_str(json).unwrap();
        assert_eq!(file.settings[0].loan_type, LoanType::Emi);
        assert!(file.settings[0].amount_slabs.is_empty());
    }

    #[test]
    fn test_unknown_loan_type() {
        let bad = "[[settings]]\nname = \"X\"\nloan_type = \"Balloon\"\ndefault_rate = 1.0\n";
        assert!(matches!(
            SettingsFile::from_toml_str(bad),
            Err(ConfigError::Deserialization(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            SettingsFile::from_path("rates.yaml"),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SettingsFile::from_path("/nonexistent/lendcalc/rates.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
