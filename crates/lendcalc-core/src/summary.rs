//! Portfolio summaries.
//!
//! Aggregates open loans into totals and a collection rate, the figures a
//! lender's dashboard reports per customer or for the whole book.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanStatus {
    /// Being repaid on schedule
    Active,
    /// At least one installment is past due
    Overdue,
    /// Fully repaid
    Closed,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoanStatus::Active => "Active",
            LoanStatus::Overdue => "Overdue",
            LoanStatus::Closed => "Closed",
        };
        write!(f, "{name}")
    }
}

/// A loan's principal and what is still owed on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanPosition {
    /// Original principal.
    pub principal: f64,
    /// Amount still outstanding.
    pub outstanding: f64,
    /// Current status.
    pub status: LoanStatus,
}

impl LoanPosition {
    /// Creates a position, deriving the status from the outstanding amount.
    pub fn new(principal: f64, outstanding: f64, overdue: bool) -> Self {
        Self {
            principal,
            outstanding,
            status: Self::status_for(outstanding, overdue),
        }
    }

    /// Nothing outstanding closes the loan; otherwise it is overdue or active.
    pub fn status_for(outstanding: f64, overdue: bool) -> LoanStatus {
        if outstanding <= 0.0 {
            LoanStatus::Closed
        } else if overdue {
            LoanStatus::Overdue
        } else {
            LoanStatus::Active
        }
    }
}

/// Totals over the open loans of a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PortfolioSummary {
    /// Number of open loans.
    pub total_loans: usize,
    /// Sum of principal over open loans.
    pub total_principal: f64,
    /// Sum of outstanding amounts over open loans.
    pub total_outstanding: f64,
    /// Percentage of principal already collected, zero for an empty book.
    pub collection_rate: f64,
}

impl PortfolioSummary {
    /// Summarizes the open (not closed) positions.
    pub fn from_positions(positions: &[LoanPosition]) -> Self {
        let open = positions.iter().filter(|p| p.status != LoanStatus::Closed);

        let mut summary = Self::default();
        for position in open {
            summary.total_loans += 1;
            summary.total_principal += position.principal;
            summary.total_outstanding += position.outstanding;
        }

        if summary.total_principal != 0.0 {
            summary.collection_rate = (summary.total_principal - summary.total_outstanding)
                / summary.total_principal
                * 100.0;
        }
        summary
    }
}
