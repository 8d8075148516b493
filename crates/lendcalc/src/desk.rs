//! Loan desk.
//!
//! Prices loans from the registered interest settings: the active setting for
//! a loan type supplies the rate for the requested principal and the penalty
//! rate for late installments and payments.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use lendcalc_config::{ConfigError, SettingsRegistry};
use lendcalc_core::payment::PaymentReceipt;
use lendcalc_core::penalty::calculate_penalty;
use lendcalc_core::{
    Date, LoanCalculator, LoanError, LoanQuote, LoanTerms, LoanType,
};
use lendcalc_core::schedule::RepaymentSchedule;

/// Result type for loan desk operations.
pub type DeskResult<T> = Result<T, DeskError>;

/// Errors from the loan desk.
#[derive(Debug, Error)]
pub enum DeskError {
    /// Loan terms, dates, or schedule error.
    #[error(transparent)]
    Loan(#[from] LoanError),

    /// Interest setting lookup error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Quotes and schedules loans against the active interest settings.
#[derive(Debug, Clone)]
pub struct LoanDesk {
    calculator: LoanCalculator,
    settings: Arc<SettingsRegistry>,
}

impl LoanDesk {
    /// Creates a desk over a shared settings registry.
    pub fn new(calculator: LoanCalculator, settings: Arc<SettingsRegistry>) -> Self {
        Self {
            calculator,
            settings,
        }
    }

    /// Returns the settings registry.
    pub fn settings(&self) -> &SettingsRegistry {
        &self.settings
    }

    /// Rate the active setting for `loan_type` applies to `principal`.
    pub fn rate_for(&self, loan_type: LoanType, principal: f64) -> DeskResult<f64> {
        let setting = self.settings.active_for(loan_type)?;
        let rate = setting.applicable_rate(principal);
        debug!(loan_type = %loan_type, principal, rate, setting = %setting.name, "resolved rate");
        Ok(rate)
    }

    /// Quotes a loan at the configured rate.
    ///
    /// The terms go through [`LoanTerms::new`], which rejects terms whose flat
    /// or EMI amounts would not be finite, so a returned quote is finite.
    pub fn quote(&self, loan_type: LoanType, principal: f64, tenure: u32) -> DeskResult<LoanQuote> {
        let terms = self.terms(loan_type, principal, tenure)?;
        Ok(self.calculator.quote(
            loan_type,
            terms.principal(),
            terms.rate(),
            f64::from(terms.tenure()),
        ))
    }

    /// Builds the repayment schedule for a loan at the configured rate.
    pub fn schedule(
        &self,
        loan_type: LoanType,
        principal: f64,
        tenure: u32,
        start: Date,
    ) -> DeskResult<RepaymentSchedule> {
        let terms = self.terms(loan_type, principal, tenure)?;
        Ok(RepaymentSchedule::generate(loan_type, &terms, start)?)
    }

    /// Penalty on an overdue amount at the configured penalty rate.
    pub fn penalty(&self, loan_type: LoanType, overdue_amount: f64, overdue_days: i64) -> DeskResult<f64> {
        let setting = self.settings.active_for(loan_type)?;
        Ok(calculate_penalty(overdue_amount, overdue_days, setting.penalty_rate))
    }

    /// Applies a payment to `schedule`, settling late penalties at the
    /// configured penalty rate first.
    pub fn pay(
        &self,
        schedule: &mut RepaymentSchedule,
        amount: f64,
        payment_date: Date,
    ) -> DeskResult<PaymentReceipt> {
        let setting = self.settings.active_for(schedule.loan_type())?;
        Ok(schedule.apply_payment(amount, payment_date, setting.penalty_rate)?)
    }

    fn terms(&self, loan_type: LoanType, principal: f64, tenure: u32) -> DeskResult<LoanTerms> {
        let rate = self.rate_for(loan_type, principal)?;
        Ok(LoanTerms::new(principal, rate, tenure)?)
    }
}
