//! Payments against a repayment schedule.
//!
//! A payment settles the accrued late penalty first. The rest is credited to
//! unpaid installments oldest first, and within each installment to interest
//! before principal. An installment credited less than its amount is left
//! `Partial` until a later payment covers the remainder.
//!
//! See [`RepaymentSchedule::apply_payment`](crate::schedule::RepaymentSchedule::apply_payment).

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Shortfalls up to this amount count as settled.
pub const PAYMENT_TOLERANCE: f64 = 1e-6;

/// Split of a payment between penalty, interest, and principal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentAllocation {
    /// Paid towards accrued late penalties.
    pub penalty: f64,
    /// Paid towards installment interest.
    pub interest: f64,
    /// Paid towards installment principal.
    pub principal: f64,
}

impl PaymentAllocation {
    /// Sum of the three parts.
    pub fn total(&self) -> f64 {
        self.penalty + self.interest + self.principal
    }
}

/// Record of a payment applied to a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Amount received.
    pub amount: f64,
    /// Date the payment was made.
    pub payment_date: Date,
    /// Unpaid installment amount before the payment, penalties excluded.
    pub balance_before: f64,
    /// Unpaid installment amount after the payment, penalties excluded.
    pub balance_after: f64,
    /// How the amount was split.
    pub allocation: PaymentAllocation,
    /// Numbers of the installments the payment was credited to, oldest first.
    pub installments: Vec<u32>,
}
