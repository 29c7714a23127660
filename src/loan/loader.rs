//! Load loan portfolios from CSV

use std::path::Path;

use csv::Reader;
use log::info;

use super::LoanTerms;
use crate::error::LoanError;

/// A loan in a portfolio: an identifier plus its terms
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Loan {
    pub loan_id: u32,
    pub terms: LoanTerms,
}

/// Raw CSV row matching the portfolio file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "LoanID")]
    loan_id: u32,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_pct: f64,
    #[serde(rename = "TermYears")]
    term_years: u32,
}

impl CsvRow {
    fn to_loan(self) -> Result<Loan, LoanError> {
        let terms = LoanTerms::new(self.principal, self.annual_rate_pct, self.term_years)
            .map_err(|e| LoanError::InvalidRecord {
                loan_id: self.loan_id,
                source: Box::new(e),
            })?;

        Ok(Loan {
            loan_id: self.loan_id,
            terms,
        })
    }
}

/// Load all loans from a CSV file
///
/// An invalid row fails the whole load; a batch run never proceeds on a
/// silently truncated portfolio.
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<Loan>, LoanError> {
    let mut reader = Reader::from_path(path.as_ref())?;
    let loans = collect_loans(&mut reader)?;
    info!("loaded {} loans from {}", loans.len(), path.as_ref().display());
    Ok(loans)
}

/// Load loans from any reader (e.g., string buffer, network stream)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Loan>, LoanError> {
    let mut csv_reader = Reader::from_reader(reader);
    collect_loans(&mut csv_reader)
}

fn collect_loans<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<Loan>, LoanError> {
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.to_loan()?);
    }

    Ok(loans)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
LoanID,Principal,AnnualRatePct,TermYears
1,200000,5,30
2,100000,4,5
3,120000,0,10
";

    #[test]
    fn test_load_from_reader() {
        let loans = load_loans_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(loans.len(), 3);

        let l1 = &loans[0];
        assert_eq!(l1.loan_id, 1);
        assert_eq!(l1.terms.principal, 200_000.0);
        assert_eq!(l1.terms.term_years, 30);

        // Zero-rate loans are valid portfolio entries
        assert_eq!(loans[2].terms.annual_rate_pct, 0.0);
    }

    #[test]
    fn test_invalid_row_fails_load() {
        let bad = "\
LoanID,Principal,AnnualRatePct,TermYears
1,200000,5,30
2,-50000,4,5
";
        let err = load_loans_from_reader(bad.as_bytes()).unwrap_err();
        match err {
            LoanError::InvalidRecord { loan_id, .. } => assert_eq!(loan_id, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
