//! Loan terms with fail-fast input validation

use serde::{Deserialize, Serialize};

use crate::error::LoanError;

/// Terms of a fixed-rate, monthly-payment loan
///
/// Construct through [`LoanTerms::new`], which rejects invalid inputs.
/// The arithmetic in the rest of the crate assumes validated terms and
/// never has to worry about NaN or infinity propagation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Principal loan amount, in currency units
    pub principal: f64,

    /// Annual interest rate as a percentage (5 means 5%, not 0.05)
    pub annual_rate_pct: f64,

    /// Loan term in whole years
    pub term_years: u32,
}

impl LoanTerms {
    /// Create validated loan terms
    ///
    /// Fails with [`LoanError::InvalidInput`] when the principal is not a
    /// positive finite amount, the rate is negative or non-finite, or the
    /// term is zero years.
    pub fn new(principal: f64, annual_rate_pct: f64, term_years: u32) -> Result<Self, LoanError> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(LoanError::InvalidInput {
                field: "principal",
                reason: format!("must be a positive finite amount, got {principal}"),
            });
        }

        if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
            return Err(LoanError::InvalidInput {
                field: "annual_rate_pct",
                reason: format!("must be a non-negative finite percentage, got {annual_rate_pct}"),
            });
        }

        if term_years == 0 {
            return Err(LoanError::InvalidInput {
                field: "term_years",
                reason: "must be at least 1 year".to_string(),
            });
        }

        Ok(Self {
            principal,
            annual_rate_pct,
            term_years,
        })
    }

    /// Monthly fractional interest rate: annual percentage / 100 / 12
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / 12.0
    }

    /// Total number of monthly payments over the loan term
    pub fn num_payments(&self) -> u32 {
        self.term_years * 12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_terms() {
        let terms = LoanTerms::new(200_000.0, 5.0, 30).unwrap();
        assert_eq!(terms.num_payments(), 360);
        assert!((terms.monthly_rate() - 0.05 / 12.0).abs() < 1e-15);
    }

    #[test]
    fn test_zero_rate_is_valid() {
        let terms = LoanTerms::new(120_000.0, 0.0, 10).unwrap();
        assert_eq!(terms.monthly_rate(), 0.0);
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        assert!(LoanTerms::new(0.0, 5.0, 30).is_err());
        assert!(LoanTerms::new(-1000.0, 5.0, 30).is_err());
        assert!(LoanTerms::new(f64::NAN, 5.0, 30).is_err());
    }

    #[test]
    fn test_rejects_negative_or_non_finite_rate() {
        assert!(LoanTerms::new(100_000.0, -0.5, 30).is_err());
        assert!(LoanTerms::new(100_000.0, f64::INFINITY, 30).is_err());
    }

    #[test]
    fn test_rejects_zero_term() {
        let err = LoanTerms::new(100_000.0, 5.0, 0).unwrap_err();
        match err {
            LoanError::InvalidInput { field, .. } => assert_eq!(field, "term_years"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
