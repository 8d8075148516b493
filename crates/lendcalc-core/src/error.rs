//! Error types for loan calculations.
//!
//! The flat-interest and EMI calculators are infallible; these errors cover
//! the fallible edges around them: validated terms, dates, schedules,
//! payments, and parsing of loan type labels.

use thiserror::Error;

/// A specialized Result type for loan operations.
pub type LoanResult<T> = Result<T, LoanError>;

/// The main error type for loan operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    /// Invalid calendar date or date arithmetic out of range.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Loan terms rejected by validation.
    #[error("Invalid loan terms: {field} {reason}")]
    InvalidTerms {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Label that does not name a known loan type.
    #[error("Unknown loan type: {label}")]
    UnknownLoanType {
        /// The label that failed to parse.
        label: String,
    },

    /// Payment that cannot be applied to a schedule.
    #[error("Invalid payment of {amount}: {reason}")]
    InvalidPayment {
        /// The rejected amount.
        amount: f64,
        /// Why the payment was rejected.
        reason: String,
    },

    /// Installment number not present in a schedule.
    #[error("Installment not found: #{number}")]
    InstallmentNotFound {
        /// The requested installment number.
        number: u32,
    },
}

impl LoanError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an invalid payment error.
    #[must_use]
    pub fn invalid_payment(amount: f64, reason: impl Into<String>) -> Self {
        Self::InvalidPayment {
            amount,
            reason: reason.into(),
        }
    }

    /// Creates an unknown loan type error.
    #[must_use]
    pub fn unknown_loan_type(label: impl Into<String>) -> Self {
        Self::UnknownLoanType {
            label: label.into(),
        }
    }
}
