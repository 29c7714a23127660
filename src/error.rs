//! Error types for the amortization library

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("bad arguments for tool '{tool}': {reason}")]
    BadToolArguments { tool: String, reason: String },

    #[error("invalid loan record {loan_id}: {source}")]
    InvalidRecord {
        loan_id: u32,
        #[source]
        source: Box<LoanError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
