//! Lendcalc Configuration Layer
//!
//! Interest settings for the Lendcalc loan calculators: which rate applies to
//! a loan of a given type and amount, and what penalty rate applies when it
//! falls overdue.
//!
//! # Features
//!
//! - **Interest Settings**: Default rate, penalty rate, and amount slabs per loan type
//! - **Validation**: Every setting is checked before it can be registered
//! - **Registry**: Thread-safe store with one active setting per loan type
//! - **Loading**: Settings files in TOML or JSON
//!
//! # Example
//!
//! ```rust
//! use lendcalc_config::{InterestSetting, RateSlab, SettingsRegistry};
//! use lendcalc_core::LoanType;
//!
//! let registry = SettingsRegistry::new();
//!
//! let setting = InterestSetting::new("Gold EMI", LoanType::Emi, 2.5)
//!     .with_slab(RateSlab::new(1.0, Some(50_000.0), 3.0))
//!     .with_slab(RateSlab::new(50_000.01, None, 2.0))
//!     .active();
//! registry.register(setting).unwrap();
//!
//! let active = registry.active_for(LoanType::Emi).unwrap();
//! assert_eq!(active.applicable_rate(10_000.0), 3.0);
//! assert_eq!(active.applicable_rate(75_000.0), 2.0);
//! ```
//!
//! # Settings files
//!
//! ```toml
//! [[settings]]
//! name = "Standard Flat"
//! loan_type = "Flat Rate"
//! default_rate = 3.0
//! penalty_rate = 1.0
//! is_active = true
//!
//! [[settings.amount_slabs]]
//! min_amount = 1.0
//! max_amount = 25000.0
//! interest_rate = 3.5
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod file;
pub mod interest;
pub mod registry;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use file::SettingsFile;
pub use interest::{InterestSetting, RateSlab};
pub use registry::SettingsRegistry;
