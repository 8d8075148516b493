//! Repayment schedules checked against the calculator totals.

use approx::assert_relative_eq;
use lendcalc_core::prelude::*;

fn loan_date() -> Date {
    Date::from_ymd(2025, 3, 10).unwrap()
}

#[test]
fn flat_schedule_matches_calculator() {
    let terms = LoanTerms::new(10_000.0, 5.0, 6).unwrap();
    let schedule = RepaymentSchedule::generate(LoanType::FlatRate, &terms, loan_date()).unwrap();
    let flat = calculate_flat_interest(10_000.0, 5.0, 6.0);

    assert_relative_eq!(schedule.total_installment_amount(), flat.total_amount, epsilon = 1e-6);
    let interest: f64 = schedule.iter().map(|i| i.interest_amount).sum();
    assert_relative_eq!(interest, flat.total_interest, epsilon = 1e-6);
}

#[test]
fn emi_schedule_matches_calculator() {
    let terms = LoanTerms::new(100_000.0, 2.5, 12).unwrap();
    let schedule = RepaymentSchedule::generate(LoanType::Emi, &terms, loan_date()).unwrap();
    let emi = calculate_emi(100_000.0, 2.5, 12.0);

    assert_relative_eq!(schedule.total_installment_amount(), emi.total_amount, epsilon = 1e-4);
    assert_eq!(schedule.loan_type(), LoanType::Emi);
    assert_eq!(schedule.start_date(), loan_date());
    assert_eq!(
        schedule.installments().last().map(|i| i.due_date),
        Some(Date::from_ymd(2026, 3, 10).unwrap())
    );
}

#[test]
fn overdue_penalty_flow() {
    let terms = LoanTerms::new(6_000.0, 0.0, 6).unwrap();
    let mut schedule = RepaymentSchedule::generate(LoanType::Emi, &terms, loan_date()).unwrap();
    schedule.mark_paid(1).unwrap();

    // Second installment due 2025-05-10, checked 30 days later
    let as_of = Date::from_ymd(2025, 6, 9).unwrap();
    let overdue = schedule.overdue_installments(as_of);
    assert_eq!(overdue.len(), 1);

    let days = as_of - overdue[0].due_date;
    assert_eq!(days, 30);

    let penalty = calculate_penalty(schedule.overdue_amount(as_of), days, DEFAULT_PENALTY_RATE_PER_MONTH);
    assert_relative_eq!(penalty, 10.0, epsilon = 1e-9);
}

#[test]
fn schedule_serializes_installment_rows() {
    let terms = LoanTerms::new(1_000.0, 1.0, 2).unwrap();
    let schedule = RepaymentSchedule::generate(LoanType::FlatRate, &terms, loan_date()).unwrap();

    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(json["loan_type"], "Flat Rate");
    assert_eq!(json["installments"][1]["due_date"], "2025-05-10");
    assert_eq!(json["installments"][1]["status"], "Pending");
    assert_eq!(json["installments"][1]["principal_amount"], 500.0);
    assert_eq!(json["installments"][1]["paid_amount"], 0.0);
    assert!(json["installments"][1]["paid_date"].is_null());
}

#[test]
fn payments_reduce_overdue_penalty() {
    let terms = LoanTerms::new(6_000.0, 0.0, 6).unwrap();
    let mut schedule = RepaymentSchedule::generate(LoanType::Emi, &terms, loan_date()).unwrap();

    // Installment 1 due 2025-04-10 is 30 days late on 2025-05-10
    let paid_on = Date::from_ymd(2025, 5, 10).unwrap();
    assert_relative_eq!(schedule.penalty_due(paid_on, DEFAULT_PENALTY_RATE_PER_MONTH), 10.0, epsilon = 1e-9);

    let receipt = schedule
        .apply_payment(510.0, paid_on, DEFAULT_PENALTY_RATE_PER_MONTH)
        .unwrap();
    assert_relative_eq!(receipt.allocation.penalty, 10.0, epsilon = 1e-9);
    assert_relative_eq!(receipt.allocation.principal, 500.0, epsilon = 1e-9);
    assert_eq!(schedule.installments()[0].status, InstallmentStatus::Partial);

    // Half the installment is still unpaid a month later
    let as_of = Date::from_ymd(2025, 6, 9).unwrap();
    assert_relative_eq!(schedule.overdue_amount(as_of), 500.0 + 1_000.0, epsilon = 1e-9);

    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(json["installments"][0]["status"], "Partial");
}
