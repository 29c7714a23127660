//! Tool-call boundary for the two amortization operations
//!
//! The core exposes exactly two pure operations. Here they are described as
//! named, typed tools so that any transport (HTTP endpoint, agent runtime,
//! CLI) can register them and invoke them with JSON arguments, without
//! knowing anything about the core types. The units contract is part of the
//! tool surface: `annual_interest_rate` is a percentage (5 means 5%), the
//! conversion to a monthly fractional rate happens inside the core.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::amortization::{monthly_payment, payment_schedule, PaymentBreakdown};
use crate::error::LoanError;
use crate::loan::LoanTerms;

pub const CALCULATE_MONTHLY_PAYMENT: &str = "calculate_monthly_payment";
pub const GET_PAYMENT_SCHEDULE: &str = "get_payment_schedule";

/// A single typed parameter of a tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolParam {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
}

/// Description of one callable tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ToolParam],
}

/// Both tools take the same loan parameters
const LOAN_PARAMS: &[ToolParam] = &[
    ToolParam {
        name: "principal",
        kind: "number",
        description: "Principal loan amount in currency units",
    },
    ToolParam {
        name: "annual_interest_rate",
        kind: "number",
        description: "Annual interest rate as a percentage (5 means 5%)",
    },
    ToolParam {
        name: "loan_term_years",
        kind: "integer",
        description: "Loan term in whole years",
    },
];

/// All tools exposed by this crate, for discovery by a hosting runtime
pub fn tool_specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: CALCULATE_MONTHLY_PAYMENT,
            description: "Calculates the constant monthly mortgage payment from \
                          principal, annual interest rate, and loan term in years",
            parameters: LOAN_PARAMS,
        },
        ToolSpec {
            name: GET_PAYMENT_SCHEDULE,
            description: "Returns the full month-by-month amortization schedule: \
                          principal, interest, total payment, and remaining balance",
            parameters: LOAN_PARAMS,
        },
    ]
}

/// JSON arguments shared by both tools
#[derive(Debug, Deserialize)]
struct LoanRequest {
    principal: f64,
    annual_interest_rate: f64,
    loan_term_years: u32,
}

/// Schedule row as serialized over the tool boundary
///
/// The total payment is materialized here since JSON consumers cannot call
/// the derived accessor.
#[derive(Debug, Serialize)]
struct ScheduleRow {
    payment_number: u32,
    principal_payment: f64,
    interest_payment: f64,
    total_payment: f64,
    remaining_balance: f64,
}

impl From<&PaymentBreakdown> for ScheduleRow {
    fn from(row: &PaymentBreakdown) -> Self {
        Self {
            payment_number: row.payment_number,
            principal_payment: row.principal_portion,
            interest_payment: row.interest_portion,
            total_payment: row.total_payment(),
            remaining_balance: row.remaining_balance,
        }
    }
}

/// Dispatch a tool call by name with JSON arguments
///
/// Fails with [`LoanError::UnknownTool`] for unregistered names, with
/// [`LoanError::BadToolArguments`] for malformed arguments, and with
/// [`LoanError::InvalidInput`] when the arguments parse but describe an
/// invalid loan. There are no partial results.
pub fn handle_tool_call(name: &str, args: &Value) -> Result<Value, LoanError> {
    match name {
        CALCULATE_MONTHLY_PAYMENT => {
            let terms = parse_terms(name, args)?;
            Ok(serde_json::json!({ "monthly_payment": monthly_payment(&terms) }))
        }
        GET_PAYMENT_SCHEDULE => {
            let terms = parse_terms(name, args)?;
            let rows: Vec<ScheduleRow> =
                payment_schedule(&terms).iter().map(ScheduleRow::from).collect();
            Ok(serde_json::to_value(rows)?)
        }
        other => Err(LoanError::UnknownTool(other.to_string())),
    }
}

fn parse_terms(tool: &str, args: &Value) -> Result<LoanTerms, LoanError> {
    let request: LoanRequest =
        serde_json::from_value(args.clone()).map_err(|e| LoanError::BadToolArguments {
            tool: tool.to_string(),
            reason: e.to_string(),
        })?;

    LoanTerms::new(
        request.principal,
        request.annual_interest_rate,
        request.loan_term_years,
    )
}
