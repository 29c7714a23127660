//! Per-payment breakdown records and schedule summary

use serde::{Deserialize, Serialize};

/// A single month's payment split between principal and interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Payment number, 1-indexed and chronological
    pub payment_number: u32,

    /// Part of this payment that reduces the principal
    pub principal_portion: f64,

    /// Interest accrued on the balance outstanding at the start of the month
    pub interest_portion: f64,

    /// Principal still owed after this payment is applied
    pub remaining_balance: f64,
}

impl PaymentBreakdown {
    /// Total paid this month
    ///
    /// Always recomputed from the two portions so the stored parts can
    /// never diverge from the total.
    pub fn total_payment(&self) -> f64 {
        self.principal_portion + self.interest_portion
    }
}

/// Aggregate totals over a full schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_payments: u32,
    pub monthly_payment: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub final_balance: f64,
}

impl ScheduleSummary {
    /// Summarize a computed schedule
    pub fn from_schedule(schedule: &[PaymentBreakdown]) -> Self {
        let total_principal: f64 = schedule.iter().map(|r| r.principal_portion).sum();
        let total_interest: f64 = schedule.iter().map(|r| r.interest_portion).sum();

        Self {
            total_payments: schedule.len() as u32,
            // The first payment carries the constant payment amount; only
            // the final payment may differ from it.
            monthly_payment: schedule.first().map(|r| r.total_payment()).unwrap_or(0.0),
            total_principal,
            total_interest,
            total_paid: total_principal + total_interest,
            final_balance: schedule.last().map(|r| r.remaining_balance).unwrap_or(0.0),
        }
    }
}
