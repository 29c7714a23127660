//! Mortgage Calculator CLI
//!
//! Command-line interface for amortizing a single fixed-rate loan

use clap::Parser;
use mortgage_calculator::{monthly_payment, payment_schedule, LoanTerms, ScheduleSummary};
use std::fs::File;
use std::io::Write;

/// Amortize a fixed-rate loan and print its payment schedule
#[derive(Parser, Debug)]
#[command(name = "mortgage_calculator", version)]
struct Args {
    /// Principal loan amount
    principal: f64,

    /// Annual interest rate as a percentage (5 means 5%)
    rate: f64,

    /// Loan term in years
    years: u32,

    /// Write the full schedule to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Number of leading schedule rows to print
    #[arg(long, default_value_t = 24)]
    show: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let terms = LoanTerms::new(args.principal, args.rate, args.years)?;

    let payment = monthly_payment(&terms);
    let schedule = payment_schedule(&terms);

    println!("Mortgage Calculator v0.1.0");
    println!("==========================\n");
    println!("  Principal: ${:.2}", terms.principal);
    println!("  Annual Rate: {:.3}%", terms.annual_rate_pct);
    println!(
        "  Term: {} years ({} payments)",
        terms.term_years,
        terms.num_payments()
    );
    println!("  Monthly Payment: ${:.2}", payment);
    println!();

    println!(
        "{:>6} {:>14} {:>14} {:>14} {:>16}",
        "Month", "Principal", "Interest", "Payment", "Balance"
    );
    println!("{}", "-".repeat(68));

    for row in schedule.iter().take(args.show) {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
            row.payment_number,
            row.principal_portion,
            row.interest_portion,
            row.total_payment(),
            row.remaining_balance,
        );
    }

    if schedule.len() > args.show {
        println!("... ({} more months)", schedule.len() - args.show);
    }

    if let Some(path) = &args.csv {
        let mut file = File::create(path)?;
        writeln!(file, "Month,Principal,Interest,TotalPayment,RemainingBalance")?;
        for row in &schedule {
            writeln!(
                file,
                "{},{:.8},{:.8},{:.8},{:.8}",
                row.payment_number,
                row.principal_portion,
                row.interest_portion,
                row.total_payment(),
                row.remaining_balance,
            )?;
        }
        println!("\nFull schedule written to: {}", path);
    }

    let summary = ScheduleSummary::from_schedule(&schedule);
    println!("\nSummary:");
    println!("  Total Payments: {}", summary.total_payments);
    println!("  Total Principal: ${:.2}", summary.total_principal);
    println!("  Total Interest: ${:.2}", summary.total_interest);
    println!("  Total Paid: ${:.2}", summary.total_paid);

    Ok(())
}
