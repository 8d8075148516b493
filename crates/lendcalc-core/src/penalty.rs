//! Late payment penalties.

/// Penalty rate applied when none is configured, in percent per month.
pub const DEFAULT_PENALTY_RATE_PER_MONTH: f64 = 1.0;

/// Days in a penalty month; penalties accrue pro rata over this length.
pub const PENALTY_DAYS_PER_MONTH: f64 = 30.0;

/// Computes the penalty on an overdue amount.
///
/// ```text
/// penalty = overdue_amount * (rate / 100) * (overdue_days / 30)
/// ```
///
/// Returns zero when `overdue_days` is zero or negative.
///
/// # Example
///
/// ```rust
/// use lendcalc_core::penalty::calculate_penalty;
///
/// assert_eq!(calculate_penalty(10_000.0, 30, 2.0), 200.0);
/// assert_eq!(calculate_penalty(10_000.0, 0, 2.0), 0.0);
/// ```
pub fn calculate_penalty(overdue_amount: f64, overdue_days: i64, penalty_rate_per_month: f64) -> f64 {
    if overdue_days <= 0 {
        return 0.0;
    }
    let months = overdue_days as f64 / PENALTY_DAYS_PER_MONTH;
    overdue_amount * (penalty_rate_per_month / 100.0) * months
}
