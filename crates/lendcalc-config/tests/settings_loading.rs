//! Loading interest settings from files on disk.

use std::io::Write;

use lendcalc_config::{ConfigError, SettingsRegistry};
use lendcalc_core::LoanType;
use tempfile::Builder;

const RATES_TOML: &str = r#"
[[settings]]
name = "Gold Flat"
loan_type = "Flat Rate"
description = "Flat rate loans against gold"
default_rate = 3.0
penalty_rate = 1.5
is_active = true

[[settings.amount_slabs]]
min_amount = 1.0
max_amount = 50000.0
interest_rate = 3.5

[[settings.amount_slabs]]
min_amount = 50000.01
interest_rate = 2.75

[[settings]]
name = "Personal EMI"
loan_type = "EMI"
default_rate = 2.5
is_active = true
"#;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_registry_from_toml_file() {
    let file = write_temp(".toml", RATES_TOML);
    let registry = SettingsRegistry::from_file(file.path()).unwrap();

    assert_eq!(registry.len().unwrap(), 2);

    let flat = registry.active_for(LoanType::FlatRate).unwrap();
    assert_eq!(flat.name, "Gold Flat");
    assert_eq!(flat.penalty_rate, 1.5);
    assert_eq!(flat.applicable_rate(20_000.0), 3.5);
    assert_eq!(flat.applicable_rate(80_000.0), 2.75);

    let emi = registry.active_for(LoanType::Emi).unwrap();
    assert_eq!(emi.applicable_rate(80_000.0), 2.5);
    assert_eq!(emi.penalty_rate, 1.0);
}

#[test]
fn loads_registry_from_json_file() {
    let json = r#"{
        "settings": [
            {"name": "Json EMI", "loan_type": "EMI", "default_rate": 1.25, "is_active": true}
        ]
    }"#;
    let file = write_temp(".json", json);
    let registry = SettingsRegistry::from_file(file.path()).unwrap();

    assert_eq!(registry.active_for(LoanType::Emi).unwrap().default_rate, 1.25);
}

#[test]
fn rejects_invalid_settings_in_file() {
    let toml = r#"
[[settings]]
name = "Broken"
loan_type = "EMI"
default_rate = 0.0
penalty_rate = -2.0
"#;
    let file = write_temp(".toml", toml);
    let err = SettingsRegistry::from_file(file.path()).unwrap_err();

    match err {
        ConfigError::MultipleValidationErrors(errors) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn later_active_setting_wins() {
    let toml = r#"
[[settings]]
name = "First"
loan_type = "EMI"
default_rate = 3.0
is_active = true

[[settings]]
name = "Second"
loan_type = "EMI"
default_rate = 2.0
is_active = true
"#;
    let file = write_temp(".toml", toml);
    let registry = SettingsRegistry::from_file(file.path()).unwrap();

    assert_eq!(registry.active_for(LoanType::Emi).unwrap().name, "Second");
    assert_eq!(registry.active_settings().unwrap().len(), 1);
}

#[test]
fn reads_toml_regardless_of_extension() {
    let file = write_temp(".conf", RATES_TOML);
    let parsed = lendcalc_config::SettingsFile::from_toml_file(file.path()).unwrap();
    assert_eq!(parsed.settings.len(), 2);

    assert!(matches!(
        SettingsRegistry::from_file(file.path()),
        Err(ConfigError::UnsupportedFormat { .. })
    ));
}
