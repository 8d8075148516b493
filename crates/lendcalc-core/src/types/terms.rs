//! Validated loan terms.

use serde::Serialize;

use crate::calculator::{calculate_emi, calculate_flat_interest};
use crate::error::{LoanError, LoanResult};

/// Longest tenure accepted, in periods (100 years of monthly installments).
pub const MAX_TENURE: u32 = 1_200;

/// Principal, rate, and tenure checked up front.
///
/// The calculator functions accept anything and let bad inputs surface as
/// `NaN` or `inf`. Schedules and the loan desk go through `LoanTerms`
/// instead, which refuses terms that cannot describe a real loan.
///
/// # Example
///
/// ```rust
/// use lendcalc_core::types::LoanTerms;
///
/// let terms = LoanTerms::new(50_000.0, 2.5, 24).unwrap();
/// assert_eq!(terms.tenure(), 24);
/// assert!(LoanTerms::new(50_000.0, 2.5, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanTerms {
    principal: f64,
    rate: f64,
    tenure: u32,
}

impl LoanTerms {
    /// Creates validated loan terms.
    ///
    /// `rate` is a percentage per period; zero is allowed.
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InvalidTerms` if the principal is not a positive
    /// finite number, the rate is negative or not finite, the tenure is zero
    /// or above [`MAX_TENURE`], or the flat or EMI amounts for these terms
    /// would not be finite.
    pub fn new(principal: f64, rate: f64, tenure: u32) -> LoanResult<Self> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(LoanError::invalid_terms(
                "principal",
                format!("must be greater than 0, got {principal}"),
            ));
        }
        if !rate.is_finite() || rate < 0.0 {
            return Err(LoanError::invalid_terms(
                "rate",
                format!("cannot be negative, got {rate}"),
            ));
        }
        if tenure == 0 {
            return Err(LoanError::invalid_terms("tenure", "must be greater than 0"));
        }
        if tenure > MAX_TENURE {
            return Err(LoanError::invalid_terms(
                "tenure",
                format!("cannot exceed {MAX_TENURE} periods, got {tenure}"),
            ));
        }

        // (1+r)^tenure can overflow, and a rate too small to move 1+r leaves
        // the EMI denominator at zero.
        let periods = f64::from(tenure);
        if !calculate_flat_interest(principal, rate, periods).is_finite()
            || !calculate_emi(principal, rate, periods).is_finite()
        {
            return Err(LoanError::invalid_terms(
                "rate",
                format!("{rate} over {tenure} periods does not give finite amounts"),
            ));
        }
        Ok(Self {
            principal,
            rate,
            tenure,
        })
    }

    /// Returns the principal.
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Returns the per-period rate as a percentage.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the per-period rate as a fraction (`rate / 100`).
    pub fn period_rate(&self) -> f64 {
        self.rate / 100.0
    }

    /// Returns the number of periods.
    pub fn tenure(&self) -> u32 {
        self.tenure
    }
}
