//! Constant monthly payment calculation

use crate::loan::LoanTerms;

/// Calculate the constant monthly payment that fully amortizes the loan
///
/// Standard annuity-immediate formula:
///
/// ```text
/// M = P * r * (1 + r)^n / ((1 + r)^n - 1)
/// ```
///
/// where `P` is the principal, `r` the monthly fractional rate and `n` the
/// total number of payments. A zero rate degenerates to an even split of
/// the principal across all payments.
///
/// No rounding to cents happens here; callers needing currency-rounded
/// figures round at presentation time only.
pub fn monthly_payment(terms: &LoanTerms) -> f64 {
    let r = terms.monthly_rate();
    let n = terms.num_payments();

    if r == 0.0 {
        return terms.principal / n as f64;
    }

    let growth = (1.0 + r).powi(n as i32);
    terms.principal * r * growth / (growth - 1.0)
}
