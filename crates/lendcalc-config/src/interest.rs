//! Interest settings.
//!
//! An interest setting names the rate a loan type is quoted at. Amount slabs
//! refine it: a loan whose principal falls inside a slab gets that slab's rate,
//! anything outside every slab falls back to the default rate.

use serde::{Deserialize, Serialize};

use lendcalc_core::penalty::DEFAULT_PENALTY_RATE_PER_MONTH;
use lendcalc_core::LoanType;

use crate::error::{Validate, ValidationError};

// =============================================================================
// RATE SLAB
// =============================================================================

/// Rate applied to principals in `[min_amount, max_amount]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSlab {
    /// Smallest principal the slab covers (inclusive).
    pub min_amount: f64,
    /// Largest principal the slab covers (inclusive); open-ended when absent.
    #[serde(default)]
    pub max_amount: Option<f64>,
    /// Rate in percent per period.
    pub interest_rate: f64,
}

impl RateSlab {
    /// Creates a slab.
    pub fn new(min_amount: f64, max_amount: Option<f64>, interest_rate: f64) -> Self {
        Self {
            min_amount,
            max_amount,
            interest_rate,
        }
    }

    /// Returns true if `amount` falls inside the slab.
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min_amount && self.max_amount.map_or(true, |max| amount <= max)
    }
}

// =============================================================================
// INTEREST SETTING
// =============================================================================

/// Rates applied to one loan type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestSetting {
    /// Unique setting name.
    pub name: String,

    /// Loan type the setting applies to.
    pub loan_type: LoanType,

    /// Description of this setting.
    #[serde(default)]
    pub description: Option<String>,

    /// Rate used when no slab matches, in percent per period.
    pub default_rate: f64,

    /// Late payment penalty in percent per month.
    #[serde(default = "default_penalty_rate")]
    pub penalty_rate: f64,

    /// Whether this is the setting in force for its loan type.
    #[serde(default)]
    pub is_active: bool,

    /// Amount slabs in ascending, non-overlapping order.
    #[serde(default)]
    pub amount_slabs: Vec<RateSlab>,
}

fn default_penalty_rate() -> f64 {
    DEFAULT_PENALTY_RATE_PER_MONTH
}

impl InterestSetting {
    /// Creates an inactive setting with no slabs.
    pub fn new(name: impl Into<String>, loan_type: LoanType, default_rate: f64) -> Self {
        Self {
            name: name.into(),
            loan_type,
            description: None,
            default_rate,
            penalty_rate: default_penalty_rate(),
            is_active: false,
            amount_slabs: Vec::new(),
        }
    }

    /// Appends an amount slab.
    #[must_use]
    pub fn with_slab(mut self, slab: RateSlab) -> Self {
        self.amount_slabs.push(slab);
        self
    }

    /// Sets the penalty rate.
    #[must_use]
    pub fn with_penalty_rate(mut self, rate: f64) -> Self {
        self.penalty_rate = rate;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the setting active.
    #[must_use]
    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }

    /// Rate for a loan of `amount`: the first slab containing it, else the default.
    pub fn applicable_rate(&self, amount: f64) -> f64 {
        self.amount_slabs
            .iter()
            .find(|slab| slab.contains(amount))
            .map_or(self.default_rate, |slab| slab.interest_rate)
    }
}

impl Validate for InterestSetting {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if self.default_rate.is_nan() || self.default_rate <= 0.0 {
            errors.push(ValidationError::new(
                "default_rate",
                "Default rate must be greater than 0",
            ));
        }

        if self.penalty_rate.is_nan() || self.penalty_rate < 0.0 {
            errors.push(ValidationError::new(
                "penalty_rate",
                "Penalty rate cannot be negative",
            ));
        }

        let mut prev_max = 0.0_f64;
        for (i, slab) in self.amount_slabs.iter().enumerate() {
            let field = format!("amount_slabs[{i}]");

            if slab.min_amount <= prev_max {
                errors.push(ValidationError::new(&field, "Amount slabs should not overlap"));
            }
            if let Some(max) = slab.max_amount {
                if max <= slab.min_amount {
                    errors.push(ValidationError::new(
                        &field,
                        "Maximum amount should be greater than minimum amount",
                    ));
                }
            }
            if slab.interest_rate < 0.0 {
                errors.push(ValidationError::new(&field, "Interest rate cannot be negative"));
            }

            prev_max = slab.max_amount.unwrap_or(f64::INFINITY);
        }

        errors
    }
}
