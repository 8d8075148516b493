//! Loan type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LoanError;

/// How interest is charged on a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoanType {
    /// Interest charged once on the full principal for the whole tenure.
    #[serde(rename = "Flat Rate", alias = "flat_rate", alias = "flat")]
    FlatRate,
    /// Reducing-balance loan repaid in equated installments.
    #[serde(rename = "EMI", alias = "emi")]
    Emi,
}

impl LoanType {
    /// Returns the display label ("Flat Rate" or "EMI").
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::FlatRate => "Flat Rate",
            LoanType::Emi => "EMI",
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanType {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat rate" | "flat_rate" | "flat" => Ok(LoanType::FlatRate),
            "emi" => Ok(LoanType::Emi),
            _ => Err(LoanError::unknown_loan_type(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("Flat Rate".parse::<LoanType>().unwrap(), LoanType::FlatRate);
        assert_eq!("flat".parse::<LoanType>().unwrap(), LoanType::FlatRate);
        assert_eq!(" EMI ".parse::<LoanType>().unwrap(), LoanType::Emi);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Balloon".parse::<LoanType>().unwrap_err();
        assert_eq!(err, LoanError::unknown_loan_type("Balloon"));
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&LoanType::FlatRate).unwrap(), "\"Flat Rate\"");
        let parsed: LoanType = serde_json::from_str("\"emi\"").unwrap();
        assert_eq!(parsed, LoanType::Emi);
    }
}
