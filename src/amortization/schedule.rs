//! Amortization schedule generation
//!
//! Simulates the balance decay month by month: interest accrues on the
//! balance outstanding at the start of each month, the rest of the constant
//! payment goes to principal, and the final payment clears exactly what
//! remains.

use log::debug;

use super::breakdown::PaymentBreakdown;
use super::payment::monthly_payment;
use crate::loan::LoanTerms;

/// Generate the full amortization schedule for a loan
///
/// Returns one [`PaymentBreakdown`] per month, in chronological order.
/// For validated terms the schedule always has `term_years * 12` rows;
/// the loop still terminates early should the balance ever reach zero
/// ahead of schedule.
pub fn payment_schedule(terms: &LoanTerms) -> Vec<PaymentBreakdown> {
    let r = terms.monthly_rate();
    let n = terms.num_payments();
    let payment = monthly_payment(terms);

    debug!(
        "amortizing {:.2} over {} months at monthly rate {:.8}",
        terms.principal, n, r
    );

    let mut schedule = Vec::with_capacity(n as usize);
    let mut balance = terms.principal;

    for period in 1..=n {
        let interest = balance * r;
        let mut principal_portion = payment - interest;

        // The last payment clears whatever is left. The overshoot check
        // also absorbs floating-point drift that would otherwise push the
        // balance negative a period early.
        if period == n || principal_portion > balance {
            principal_portion = balance;
        }

        balance -= principal_portion;

        schedule.push(PaymentBreakdown {
            payment_number: period,
            principal_portion,
            interest_portion: interest,
            // Guard against residual negative floating-point noise
            remaining_balance: balance.max(0.0),
        });

        if balance <= 0.0 {
            break;
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::ScheduleSummary;
    use approx::assert_abs_diff_eq;

    fn schedule_for(principal: f64, rate: f64, years: u32) -> Vec<PaymentBreakdown> {
        let terms = LoanTerms::new(principal, rate, years).unwrap();
        payment_schedule(&terms)
    }

    #[test]
    fn test_schedule_length() {
        assert_eq!(schedule_for(200_000.0, 5.0, 30).len(), 360);
        assert_eq!(schedule_for(100_000.0, 4.0, 5).len(), 60);
        assert_eq!(schedule_for(120_000.0, 0.0, 10).len(), 120);
    }

    #[test]
    fn test_first_payment_breakdown() {
        let schedule = schedule_for(200_000.0, 5.0, 30);
        let first = &schedule[0];

        assert_eq!(first.payment_number, 1);
        // 200000 * (0.05 / 12)
        assert_abs_diff_eq!(first.interest_portion, 833.33, epsilon = 0.01);
        assert_abs_diff_eq!(first.principal_portion, 240.31, epsilon = 0.01);
        assert_abs_diff_eq!(first.total_payment(), 1073.64, epsilon = 0.01);
        assert_abs_diff_eq!(first.remaining_balance, 199_759.69, epsilon = 0.01);
    }

    #[test]
    fn test_last_payment_clears_balance() {
        let schedule = schedule_for(200_000.0, 5.0, 30);
        let last = schedule.last().unwrap();

        assert_eq!(last.payment_number, 360);
        assert_abs_diff_eq!(last.remaining_balance, 0.0, epsilon = 0.01);
        assert!(last.interest_portion > 0.0);
        assert!(last.principal_portion > 0.0);
    }

    #[test]
    fn test_principal_conservation() {
        for (principal, rate, years, tol) in [
            (200_000.0, 5.0, 30, 1.0),
            (100_000.0, 4.0, 5, 0.1),
            (500_000.0, 7.25, 40, 1.0),
        ] {
            let schedule = schedule_for(principal, rate, years);
            let total_principal: f64 = schedule.iter().map(|r| r.principal_portion).sum();
            assert_abs_diff_eq!(total_principal, principal, epsilon = tol);
        }
    }

    #[test]
    fn test_zero_interest_schedule() {
        let schedule = schedule_for(120_000.0, 0.0, 10);
        let expected = 120_000.0 / 120.0;

        for row in &schedule {
            assert_abs_diff_eq!(row.principal_portion, expected, epsilon = 0.01);
            assert_abs_diff_eq!(row.interest_portion, 0.0, epsilon = 0.01);
            assert_abs_diff_eq!(row.total_payment(), expected, epsilon = 0.01);
        }

        assert_abs_diff_eq!(schedule.last().unwrap().remaining_balance, 0.0, epsilon = 0.01);
    }

    #[test]
    fn test_progressive_shift_from_interest_to_principal() {
        let schedule = schedule_for(200_000.0, 6.0, 15);

        for pair in schedule.windows(2) {
            assert!(pair[1].interest_portion <= pair[0].interest_portion);
            assert!(pair[1].principal_portion >= pair[0].principal_portion);
            assert!(pair[1].remaining_balance < pair[0].remaining_balance);
        }
    }

    #[test]
    fn test_non_negative_rows() {
        let schedule = schedule_for(350_000.0, 6.125, 15);

        for row in &schedule {
            assert!(row.principal_portion >= 0.0);
            assert!(row.interest_portion >= 0.0);
            assert!(row.remaining_balance >= 0.0);
        }
    }

    #[test]
    fn test_payment_numbers_are_chronological() {
        let schedule = schedule_for(100_000.0, 4.0, 5);
        for (i, row) in schedule.iter().enumerate() {
            assert_eq!(row.payment_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_idempotent() {
        let terms = LoanTerms::new(200_000.0, 5.0, 30).unwrap();
        assert_eq!(payment_schedule(&terms), payment_schedule(&terms));
    }

    #[test]
    fn test_summary_totals() {
        let schedule = schedule_for(200_000.0, 5.0, 30);
        let summary = ScheduleSummary::from_schedule(&schedule);

        assert_eq!(summary.total_payments, 360);
        assert_abs_diff_eq!(summary.monthly_payment, 1073.64, epsilon = 0.01);
        assert_abs_diff_eq!(summary.total_principal, 200_000.0, epsilon = 1.0);
        assert_abs_diff_eq!(summary.final_balance, 0.0, epsilon = 0.01);
        assert!(summary.total_interest > 180_000.0 && summary.total_interest < 190_000.0);
    }
}
