//! Amortize an entire loan portfolio from loans.csv
//!
//! Outputs monthly aggregated cashflows across all loans for batch reporting

use mortgage_calculator::amortization::{payment_schedule, PaymentBreakdown};
use mortgage_calculator::loan::load_loans;
use rayon::prelude::*;
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Aggregated monthly results across all loans
#[derive(Debug, Clone, Default)]
struct AggregatedRow {
    month: u32,
    active_loans: u32,
    total_payment: f64,
    total_principal: f64,
    total_interest: f64,
    total_balance: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| "loans.csv".to_string());

    let start = Instant::now();
    println!("Loading loans from {}...", path);
    let loans = load_loans(&path)?;
    println!("Loaded {} loans in {:?}", loans.len(), start.elapsed());

    println!("Amortizing...");
    let amort_start = Instant::now();

    // Each loan is independent, so schedules run in parallel
    let schedules: Vec<Vec<PaymentBreakdown>> = loans
        .par_iter()
        .map(|loan| payment_schedule(&loan.terms))
        .collect();

    println!("Amortized {} loans in {:?}", loans.len(), amort_start.elapsed());

    // Aggregate results by month
    let max_months = schedules.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut aggregated: Vec<AggregatedRow> = (1..=max_months as u32)
        .map(|m| AggregatedRow { month: m, ..Default::default() })
        .collect();

    for schedule in &schedules {
        for row in schedule {
            let idx = (row.payment_number - 1) as usize;
            if idx < aggregated.len() {
                let agg = &mut aggregated[idx];
                agg.active_loans += 1;
                agg.total_payment += row.total_payment();
                agg.total_principal += row.principal_portion;
                agg.total_interest += row.interest_portion;
                agg.total_balance += row.remaining_balance;
            }
        }
    }

    // Write output
    let output_path = "portfolio_schedule.csv";
    let mut file = File::create(output_path)?;
    writeln!(
        file,
        "Month,ActiveLoans,TotalPayment,TotalPrincipal,TotalInterest,TotalBalance"
    )?;
    for agg in &aggregated {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2}",
            agg.month,
            agg.active_loans,
            agg.total_payment,
            agg.total_principal,
            agg.total_interest,
            agg.total_balance,
        )?;
    }
    println!("Aggregated schedule written to: {}", output_path);

    // Print summary
    let total_principal: f64 = aggregated.iter().map(|r| r.total_principal).sum();
    let total_interest: f64 = aggregated.iter().map(|r| r.total_interest).sum();

    println!("\nSummary:");
    println!("  Loans: {}", loans.len());
    println!("  Months: {}", max_months);
    println!("  Total Principal Repaid: ${:.2}", total_principal);
    println!("  Total Interest: ${:.2}", total_interest);

    Ok(())
}
