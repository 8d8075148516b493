//! Repayment schedules.
//!
//! A schedule lays out every installment of a loan with its due date and the
//! split between principal and interest. Flat-rate loans repay the same
//! principal and interest every period; EMI loans charge interest on the
//! remaining balance, so the principal share grows as the balance falls.
//!
//! Payments are credited to the oldest unpaid installment first; see
//! [`RepaymentSchedule::apply_payment`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::{calculate_emi, calculate_flat_interest};
use crate::error::{LoanError, LoanResult};
use crate::payment::{PaymentAllocation, PaymentReceipt, PAYMENT_TOLERANCE};
use crate::penalty::calculate_penalty;
use crate::types::{Date, LoanTerms, LoanType};

/// Payment status of an installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InstallmentStatus {
    /// Not yet paid
    #[default]
    Pending,
    /// Paid in part
    Partial,
    /// Paid in full
    Paid,
}

/// A single row of a repayment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based installment number.
    pub number: u32,
    /// Date the installment falls due.
    pub due_date: Date,
    /// Amount payable for this installment.
    pub installment_amount: f64,
    /// Portion of the installment that repays principal.
    pub principal_amount: f64,
    /// Portion of the installment that pays interest.
    pub interest_amount: f64,
    /// Principal still owed after this installment.
    pub remaining_balance: f64,
    /// Amount paid against this installment so far.
    #[serde(default)]
    pub paid_amount: f64,
    /// Date the installment was settled in full by a payment.
    #[serde(default)]
    pub paid_date: Option<Date>,
    /// Payment status.
    pub status: InstallmentStatus,
}

impl Installment {
    fn new(
        number: u32,
        due_date: Date,
        installment_amount: f64,
        principal_amount: f64,
        interest_amount: f64,
        remaining_balance: f64,
    ) -> Self {
        Self {
            number,
            due_date,
            installment_amount,
            principal_amount,
            interest_amount,
            remaining_balance,
            paid_amount: 0.0,
            paid_date: None,
            status: InstallmentStatus::Pending,
        }
    }

    /// Returns true once the installment is paid in full.
    pub fn is_paid(&self) -> bool {
        self.status == InstallmentStatus::Paid
    }

    /// Part of the installment amount not yet paid.
    pub fn outstanding(&self) -> f64 {
        (self.installment_amount - self.paid_amount).max(0.0)
    }

    /// Returns true if the installment is not fully paid and its due date is
    /// before `as_of`.
    pub fn is_overdue(&self, as_of: Date) -> bool {
        !self.is_paid() && self.due_date < as_of
    }

    /// Credits `credit` to the installment, interest first. Returns the
    /// interest and principal parts of the credit.
    fn credit(&mut self, credit: f64, payment_date: Date) -> (f64, f64) {
        let interest_left = (self.interest_amount - self.paid_amount).max(0.0);
        let interest = credit.min(interest_left);

        if self.outstanding() - credit <= PAYMENT_TOLERANCE {
            self.paid_amount = self.installment_amount;
            self.paid_date = Some(payment_date);
            self.status = InstallmentStatus::Paid;
        } else {
            self.paid_amount += credit;
            self.status = InstallmentStatus::Partial;
        }

        (interest, credit - interest)
    }
}

/// Full repayment schedule for a loan.
///
/// # Example
///
/// ```rust
/// use lendcalc_core::schedule::RepaymentSchedule;
/// use lendcalc_core::types::{Date, LoanTerms, LoanType};
///
/// let terms = LoanTerms::new(12_000.0, 2.0, 12).unwrap();
/// let start = Date::from_ymd(2025, 1, 15).unwrap();
/// let schedule = RepaymentSchedule::generate(LoanType::FlatRate, &terms, start).unwrap();
///
/// assert_eq!(schedule.len(), 12);
/// assert_eq!(schedule.installments()[0].due_date, Date::from_ymd(2025, 2, 15).unwrap());
/// assert_eq!(schedule.installments()[0].principal_amount, 1_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSchedule {
    loan_type: LoanType,
    start_date: Date,
    installments: Vec<Installment>,
}

impl RepaymentSchedule {
    /// Generates the schedule for `terms`, with installment `n` due `n` months
    /// after `start`.
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InvalidDate` if a due date falls outside the
    /// supported calendar range.
    pub fn generate(loan_type: LoanType, terms: &LoanTerms, start: Date) -> LoanResult<Self> {
        let installments = match loan_type {
            LoanType::FlatRate => flat_installments(terms, start)?,
            LoanType::Emi => emi_installments(terms, start)?,
        };

        debug!(
            loan_type = %loan_type,
            installments = installments.len(),
            start = %start,
            "generated repayment schedule"
        );

        Ok(Self {
            loan_type,
            start_date: start,
            installments,
        })
    }

    /// Returns the loan type the schedule was generated for.
    pub fn loan_type(&self) -> LoanType {
        self.loan_type
    }

    /// Returns the loan start date.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns all installments in order.
    pub fn installments(&self) -> &[Installment] {
        &self.installments
    }

    /// Returns an iterator over the installments.
    pub fn iter(&self) -> std::slice::Iter<'_, Installment> {
        self.installments.iter()
    }

    /// Returns the number of installments.
    pub fn len(&self) -> usize {
        self.installments.len()
    }

    /// Returns true if the schedule has no installments.
    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    /// Sum of all installment amounts.
    pub fn total_installment_amount(&self) -> f64 {
        self.installments.iter().map(|i| i.installment_amount).sum()
    }

    /// Sum of the unpaid parts of all installments.
    pub fn outstanding_amount(&self) -> f64 {
        self.installments.iter().map(Installment::outstanding).sum()
    }

    /// Due date of the first installment not yet paid in full.
    pub fn next_due_date(&self) -> Option<Date> {
        self.installments
            .iter()
            .find(|i| !i.is_paid())
            .map(|i| i.due_date)
    }

    /// Returns true if any unpaid installment fell due before `as_of`.
    pub fn is_overdue(&self, as_of: Date) -> bool {
        self.installments.iter().any(|i| i.is_overdue(as_of))
    }

    /// Unpaid installments that fell due before `as_of`.
    pub fn overdue_installments(&self, as_of: Date) -> Vec<&Installment> {
        self.installments
            .iter()
            .filter(|i| i.is_overdue(as_of))
            .collect()
    }

    /// Unpaid part of the installments that are overdue as of `as_of`.
    pub fn overdue_amount(&self, as_of: Date) -> f64 {
        self.installments
            .iter()
            .filter(|i| i.is_overdue(as_of))
            .map(Installment::outstanding)
            .sum()
    }

    /// Late penalty accrued on overdue installments as of `as_of`.
    ///
    /// Each overdue installment accrues [`calculate_penalty`] on its unpaid
    /// part for the days since it fell due.
    pub fn penalty_due(&self, as_of: Date, penalty_rate_per_month: f64) -> f64 {
        self.installments
            .iter()
            .filter(|i| i.is_overdue(as_of))
            .map(|i| calculate_penalty(i.outstanding(), as_of - i.due_date, penalty_rate_per_month))
            .sum()
    }

    /// Marks installment `number` as paid in full.
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InstallmentNotFound` if no installment has that number.
    pub fn mark_paid(&mut self, number: u32) -> LoanResult<()> {
        let installment = self
            .installments
            .iter_mut()
            .find(|i| i.number == number)
            .ok_or(LoanError::InstallmentNotFound { number })?;
        installment.paid_amount = installment.installment_amount;
        installment.status = InstallmentStatus::Paid;
        Ok(())
    }

    /// Applies a payment made on `payment_date`.
    ///
    /// The penalty accrued as of `payment_date` at `penalty_rate_per_month` is
    /// paid first. The rest goes to unpaid installments oldest first, interest
    /// before principal. The last installment reached is marked `Partial` if
    /// the payment does not cover it.
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InvalidPayment` if `amount` is not a positive
    /// finite number, or exceeds the penalty due plus the outstanding amount.
    pub fn apply_payment(
        &mut self,
        amount: f64,
        payment_date: Date,
        penalty_rate_per_month: f64,
    ) -> LoanResult<PaymentReceipt> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LoanError::invalid_payment(amount, "must be greater than 0"));
        }

        let penalty_due = self.penalty_due(payment_date, penalty_rate_per_month);
        let balance_before = self.outstanding_amount();
        let payable = penalty_due + balance_before;
        if amount > payable + PAYMENT_TOLERANCE {
            return Err(LoanError::invalid_payment(
                amount,
                format!("exceeds the {payable:.2} outstanding"),
            ));
        }

        let mut allocation = PaymentAllocation {
            penalty: penalty_due.min(amount),
            ..PaymentAllocation::default()
        };
        let mut remaining = amount - allocation.penalty;
        let mut credited = Vec::new();

        for installment in self.installments.iter_mut().filter(|i| !i.is_paid()) {
            if remaining <= PAYMENT_TOLERANCE {
                break;
            }
            let credit = remaining.min(installment.outstanding());
            let (interest, principal) = installment.credit(credit, payment_date);
            allocation.interest += interest;
            allocation.principal += principal;
            remaining -= credit;
            credited.push(installment.number);
        }

        let balance_after = self.outstanding_amount();
        debug!(
            amount,
            payment_date = %payment_date,
            penalty = allocation.penalty,
            balance_after,
            installments = credited.len(),
            "applied payment"
        );

        Ok(PaymentReceipt {
            amount,
            payment_date,
            balance_before,
            balance_after,
            allocation,
            installments: credited,
        })
    }
}

impl<'a> IntoIterator for &'a RepaymentSchedule {
    type Item = &'a Installment;
    type IntoIter = std::slice::Iter<'a, Installment>;

    fn into_iter(self) -> Self::IntoIter {
        self.installments.iter()
    }
}

fn flat_installments(terms: &LoanTerms, start: Date) -> LoanResult<Vec<Installment>> {
    let tenure = terms.tenure();
    let principal = terms.principal();
    let flat = calculate_flat_interest(principal, terms.rate(), f64::from(tenure));

    let principal_amount = principal / f64::from(tenure);
    let interest_amount = principal * terms.period_rate();

    (1..=tenure)
        .map(|n| -> LoanResult<Installment> {
            Ok(Installment::new(
                n,
                start.add_months(n)?,
                flat.monthly_payment,
                principal_amount,
                interest_amount,
                principal - principal_amount * f64::from(n),
            ))
        })
        .collect()
}

fn emi_installments(terms: &LoanTerms, start: Date) -> LoanResult<Vec<Installment>> {
    let tenure = terms.tenure();
    let rate = terms.period_rate();
    let emi = calculate_emi(terms.principal(), terms.rate(), f64::from(tenure)).emi;

    let mut remaining = terms.principal();
    let mut installments = Vec::with_capacity(tenure as usize);

    for n in 1..=tenure {
        let interest_amount = remaining * rate;
        let mut principal_amount = emi - interest_amount;
        let mut installment_amount = emi;

        // Final rows can overshoot the balance by rounding
        if principal_amount > remaining {
            principal_amount = remaining;
            installment_amount = principal_amount + interest_amount;
        }

        remaining -= principal_amount;

        installments.push(Installment::new(
            n,
            start.add_months(n)?,
            installment_amount,
            principal_amount,
            interest_amount,
            remaining.max(0.0),
        ));
    }

    Ok(installments)
}
