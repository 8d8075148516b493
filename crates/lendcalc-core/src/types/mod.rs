//! Domain types for loan calculations.

mod date;
mod frequency;
mod loan_type;
mod results;
mod terms;

pub use date::Date;
pub use frequency::Frequency;
pub use loan_type::LoanType;
pub use results::{EmiResult, FlatInterestResult};
pub use terms::{LoanTerms, MAX_TENURE};
