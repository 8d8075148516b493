//! # Lendcalc Core
//!
//! Loan repayment calculations for the Lendcalc library.
//!
//! This crate provides the building blocks used throughout Lendcalc:
//!
//! - **Calculator**: Flat-interest and equated-installment (EMI) computations
//! - **Schedules**: Installment-by-installment repayment schedules with due dates
//! - **Payments**: Oldest-first crediting of payments, with partial installments
//! - **Penalties**: Pro-rated late payment penalties
//! - **Summaries**: Portfolio-level totals and collection rate
//!
//! ## Numeric model
//!
//! All amounts are `f64`. The two calculators never fail: degenerate inputs such
//! as a zero tenure flow through IEEE-754 arithmetic and surface as `inf` or `NaN`
//! in the result. Use [`LoanTerms`] when inputs should be checked up front.
//!
//! ## Example
//!
//! ```rust
//! use lendcalc_core::prelude::*;
//!
//! let calc = LoanCalculator::new();
//!
//! let flat = calc.calculate_flat_interest(100_000.0, 10.0, 12.0);
//! assert_eq!(flat.total_interest, 120_000.0);
//!
//! let emi = calc.calculate_emi(100_000.0, 0.0, 4.0);
//! assert_eq!(emi.emi, 25_000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod calculator;
pub mod error;
pub mod payment;
pub mod penalty;
pub mod schedule;
pub mod summary;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{
        calculate_emi, calculate_emi_for_frequency, calculate_flat_interest, LoanCalculator,
        LoanQuote,
    };
    pub use crate::error::{LoanError, LoanResult};
    pub use crate::payment::{PaymentAllocation, PaymentReceipt};
    pub use crate::penalty::{calculate_penalty, DEFAULT_PENALTY_RATE_PER_MONTH};
    pub use crate::schedule::{Installment, InstallmentStatus, RepaymentSchedule};
    pub use crate::summary::{LoanPosition, LoanStatus, PortfolioSummary};
    pub use crate::types::{
        Date, EmiResult, FlatInterestResult, Frequency, LoanTerms, LoanType, MAX_TENURE,
    };
}

// Re-export commonly used types at crate root
pub use calculator::{LoanCalculator, LoanQuote};
pub use error::{LoanError, LoanResult};
pub use types::{Date, EmiResult, FlatInterestResult, Frequency, LoanTerms, LoanType};
