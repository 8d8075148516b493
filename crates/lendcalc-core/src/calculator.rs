//! Flat-interest and equated-installment (EMI) calculators.
//!
//! Both calculators are pure closed-form computations over `f64`. They do not
//! validate their inputs: a zero tenure divides by zero and the result carries
//! `inf` or `NaN`, negative inputs produce negative amounts. Callers that want
//! inputs rejected up front should build [`LoanTerms`](crate::types::LoanTerms)
//! first.
//!
//! # Rate convention
//!
//! `rate` is a percentage applied once per period of `tenure`. The EMI
//! calculator does not divide it by 12, so a 10% rate over 12 periods is 10%
//! per period. Use [`calculate_emi_for_frequency`] when the rate is quoted
//! per annum.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::types::{EmiResult, FlatInterestResult, Frequency, LoanType};

/// Computes a flat-interest loan.
///
/// ```text
/// total_interest  = principal * (rate / 100) * tenure
/// total_amount    = principal + total_interest
/// monthly_payment = total_amount / tenure
/// ```
///
/// # Example
///
/// ```rust
/// use lendcalc_core::calculator::calculate_flat_interest;
///
/// let result = calculate_flat_interest(100_000.0, 10.0, 12.0);
/// assert_eq!(result.total_amount, 220_000.0);
/// ```
pub fn calculate_flat_interest(principal: f64, rate: f64, tenure: f64) -> FlatInterestResult {
    trace!(principal, rate, tenure, "flat interest");
    warn_degenerate_tenure(tenure);

    let total_interest = principal * (rate / 100.0) * tenure;
    let total_amount = principal + total_interest;
    let monthly_payment = total_amount / tenure;

    FlatInterestResult {
        principal,
        total_interest,
        total_amount,
        monthly_payment,
    }
}

/// Computes an equated-installment loan on a reducing balance.
///
/// With `r = rate / 100` taken as the per-period rate:
///
/// ```text
/// emi = principal / tenure                          if r == 0
/// emi = principal * r * (1+r)^tenure / ((1+r)^tenure - 1)   otherwise
/// ```
///
/// `total_amount = emi * tenure` and `total_interest = total_amount - principal`.
///
/// # Example
///
/// ```rust
/// use lendcalc_core::calculator::calculate_emi;
///
/// let result = calculate_emi(100_000.0, 10.0, 12.0);
/// assert!((result.emi - 14_676.33).abs() < 0.01);
/// ```
pub fn calculate_emi(principal: f64, rate: f64, tenure: f64) -> EmiResult {
    trace!(principal, rate, tenure, "emi");
    warn_degenerate_tenure(tenure);

    let period_rate = rate / 100.0;
    let emi = if period_rate == 0.0 {
        principal / tenure
    } else {
        let growth = (1.0 + period_rate).powf(tenure);
        principal * period_rate * growth / (growth - 1.0)
    };

    let total_amount = emi * tenure;
    let total_interest = total_amount - principal;

    EmiResult {
        principal,
        emi,
        total_amount,
        total_interest,
    }
}

/// Computes an EMI loan from an annual rate and a payment frequency.
///
/// The annual percentage is spread evenly over the periods of one year
/// (`rate / periods_per_year`) and the result is then identical to
/// [`calculate_emi`] at that period rate. Every frequency is divided down,
/// not only monthly: a quarterly loan at 12% is charged 3% per quarter.
///
/// # Example
///
/// ```rust
/// use lendcalc_core::calculator::{calculate_emi, calculate_emi_for_frequency};
/// use lendcalc_core::types::Frequency;
///
/// let monthly = calculate_emi_for_frequency(120_000.0, 12.0, 12.0, Frequency::Monthly);
/// assert_eq!(monthly, calculate_emi(120_000.0, 1.0, 12.0));
/// ```
pub fn calculate_emi_for_frequency(
    principal: f64,
    annual_rate: f64,
    tenure: f64,
    frequency: Frequency,
) -> EmiResult {
    let rate = annual_rate / f64::from(frequency.periods_per_year());
    calculate_emi(principal, rate, tenure)
}

fn warn_degenerate_tenure(tenure: f64) {
    if tenure == 0.0 || !tenure.is_finite() {
        warn!(tenure, "degenerate tenure, result will not be finite");
    }
}

// =============================================================================
// SERVICE OBJECT
// =============================================================================

/// Result of quoting a loan of either type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "loan_type")]
pub enum LoanQuote {
    /// Flat-interest quote.
    #[serde(rename = "Flat Rate")]
    Flat(FlatInterestResult),
    /// Equated-installment quote.
    #[serde(rename = "EMI")]
    Emi(EmiResult),
}

impl LoanQuote {
    /// Returns the loan type this quote was computed for.
    pub fn loan_type(&self) -> LoanType {
        match self {
            LoanQuote::Flat(_) => LoanType::FlatRate,
            LoanQuote::Emi(_) => LoanType::Emi,
        }
    }

    /// Returns the principal.
    pub fn principal(&self) -> f64 {
        match self {
            LoanQuote::Flat(r) => r.principal,
            LoanQuote::Emi(r) => r.principal,
        }
    }

    /// Returns the total interest over the tenure.
    pub fn total_interest(&self) -> f64 {
        match self {
            LoanQuote::Flat(r) => r.total_interest,
            LoanQuote::Emi(r) => r.total_interest,
        }
    }

    /// Returns principal plus interest.
    pub fn total_amount(&self) -> f64 {
        match self {
            LoanQuote::Flat(r) => r.total_amount,
            LoanQuote::Emi(r) => r.total_amount,
        }
    }

    /// Returns the per-period payment (monthly payment or EMI).
    pub fn installment(&self) -> f64 {
        match self {
            LoanQuote::Flat(r) => r.monthly_payment,
            LoanQuote::Emi(r) => r.emi,
        }
    }
}

/// Loan calculator service.
///
/// A stateless handle over the calculator functions, meant to be created
/// once by the host application (see `lendcalc::init`) and passed to
/// whatever needs it. It is `Copy` and can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoanCalculator;

impl LoanCalculator {
    /// Creates a calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// See [`calculate_flat_interest`].
    pub fn calculate_flat_interest(&self, principal: f64, rate: f64, tenure: f64) -> FlatInterestResult {
        calculate_flat_interest(principal, rate, tenure)
    }

    /// See [`calculate_emi`].
    pub fn calculate_emi(&self, principal: f64, rate: f64, tenure: f64) -> EmiResult {
        calculate_emi(principal, rate, tenure)
    }

    /// See [`calculate_emi_for_frequency`].
    pub fn calculate_emi_for_frequency(
        &self,
        principal: f64,
        annual_rate: f64,
        tenure: f64,
        frequency: Frequency,
    ) -> EmiResult {
        calculate_emi_for_frequency(principal, annual_rate, tenure, frequency)
    }

    /// Quotes a loan of the given type.
    pub fn quote(&self, loan_type: LoanType, principal: f64, rate: f64, tenure: f64) -> LoanQuote {
        match loan_type {
            LoanType::FlatRate => LoanQuote::Flat(calculate_flat_interest(principal, rate, tenure)),
            LoanType::Emi => LoanQuote::Emi(calculate_emi(principal, rate, tenure)),
        }
    }
}
