//! # Lendcalc
//!
//! Loan repayment analytics: flat-interest and EMI quotes, repayment
//! schedules, payments, late penalties, and the interest settings that drive
//! them.
//!
//! The host application calls [`init`] once at startup and hands the returned
//! [`LoanCalculator`] to whatever needs it. For quotes priced from configured
//! interest settings, wrap a [`SettingsRegistry`] in a [`LoanDesk`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use lendcalc::{InterestSetting, LoanDesk, LoanType, SettingsRegistry};
//!
//! let calculator = lendcalc::init();
//! let flat = calculator.calculate_flat_interest(100_000.0, 10.0, 12.0);
//! assert_eq!(flat.total_amount, 220_000.0);
//!
//! let settings = Arc::new(SettingsRegistry::new());
//! settings
//!     .register(InterestSetting::new("Standard EMI", LoanType::Emi, 2.5).active())
//!     .unwrap();
//!
//! let desk = LoanDesk::new(calculator, settings);
//! let quote = desk.quote(LoanType::Emi, 100_000.0, 12).unwrap();
//! assert!((quote.installment() - 9_748.71).abs() < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod desk;

use std::sync::Once;

use tracing::info;

pub use desk::{DeskError, DeskResult, LoanDesk};
pub use lendcalc_config::{
    ConfigError, ConfigResult, InterestSetting, RateSlab, SettingsFile, SettingsRegistry,
    Validate, ValidationError,
};
pub use lendcalc_core::prelude::*;
pub use lendcalc_core::{calculator, payment, penalty, schedule, summary, types};

static INIT: Once = Once::new();

/// Activates the loan calculator for the host application.
///
/// Safe to call more than once; only the first call logs. The returned
/// calculator holds no state, so every call hands back an equivalent value.
pub fn init() -> LoanCalculator {
    INIT.call_once(|| {
        info!(version = env!("CARGO_PKG_VERSION"), "loan calculator initialized");
    });
    LoanCalculator::new()
}
