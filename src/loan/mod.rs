//! Loan terms and portfolio loading

mod data;
pub mod loader;

pub use data::LoanTerms;
pub use loader::{load_loans, load_loans_from_reader, Loan};
