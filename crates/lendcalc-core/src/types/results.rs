//! Calculator result records.

use serde::{Deserialize, Serialize};

/// Outcome of a flat-interest calculation.
///
/// Interest is charged on the full principal for every period of the tenure,
/// so `total_amount == principal + total_interest` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatInterestResult {
    /// Borrowed amount.
    pub principal: f64,
    /// `principal * rate/100 * tenure`.
    pub total_interest: f64,
    /// Principal plus interest.
    pub total_amount: f64,
    /// `total_amount / tenure`.
    pub monthly_payment: f64,
}

/// Outcome of an equated-installment calculation.
///
/// `total_interest` is derived from `total_amount`, so the identity
/// `total_amount == principal + total_interest` holds up to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    /// Borrowed amount.
    pub principal: f64,
    /// Fixed installment paid every period.
    pub emi: f64,
    /// `emi * tenure`.
    pub total_amount: f64,
    /// `total_amount - principal`.
    pub total_interest: f64,
}

impl FlatInterestResult {
    /// Returns true if every field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.principal.is_finite()
            && self.total_interest.is_finite()
            && self.total_amount.is_finite()
            && self.monthly_payment.is_finite()
    }
}

impl EmiResult {
    /// Returns true if every field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.principal.is_finite()
            && self.emi.is_finite()
            && self.total_amount.is_finite()
            && self.total_interest.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_serializes_field_names() {
        let result = FlatInterestResult {
            principal: 100.0,
            total_interest: 10.0,
            total_amount: 110.0,
            monthly_payment: 55.0,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["monthly_payment"], 55.0);
        assert_eq!(json["total_amount"], 110.0);
    }

    #[test]
    fn test_is_finite() {
        let result = EmiResult {
            principal: 100.0,
            emi: f64::INFINITY,
            total_amount: f64::NAN,
            total_interest: f64::NAN,
        };
        assert!(!result.is_finite());
    }
}
