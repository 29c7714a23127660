//! Mortgage Calculator - Fixed-rate loan amortization engine
//!
//! This library provides:
//! - Constant monthly payment calculation (standard annuity formula)
//! - Full month-by-month amortization schedules with payoff handling
//! - A transport-agnostic JSON tool boundary for the two operations
//! - CSV portfolio loading for batch reporting

pub mod amortization;
pub mod error;
pub mod loan;
pub mod tools;

// Re-export commonly used types
pub use amortization::{monthly_payment, payment_schedule, PaymentBreakdown, ScheduleSummary};
pub use error::LoanError;
pub use loan::{Loan, LoanTerms};
