//! Load termination requests from CSV
//!
//! Expected header: `ContractId,ContractStart,EarliestExpectedTermination,ReferenceDate`.
//! The last two columns may be left empty.

use super::TerminationRequest;
use crate::calendar::{parse_date, InvalidDate};
use csv::{Reader, Trim};
use std::path::Path;
use thiserror::Error;

/// Failure while reading a request file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// `row` is 1-based and excludes the header
    #[error("row {row}, column {column}: {source}")]
    Date {
        row: usize,
        column: &'static str,
        source: InvalidDate,
    },
}

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ContractId", default)]
    contract_id: Option<String>,
    #[serde(rename = "ContractStart")]
    contract_start: String,
    #[serde(rename = "EarliestExpectedTermination", default)]
    earliest_expected_termination: Option<String>,
    #[serde(rename = "ReferenceDate", default)]
    reference_date: Option<String>,
}

fn optional_date(
    value: Option<String>,
    row: usize,
    column: &'static str,
) -> Result<Option<chrono::NaiveDate>, LoadError> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(text) => parse_date(text)
            .map(Some)
            .map_err(|source| LoadError::Date { row, column, source }),
    }
}

impl CsvRow {
    fn to_request(self, row: usize) -> Result<TerminationRequest, LoadError> {
        let contract_start = parse_date(&self.contract_start).map_err(|source| LoadError::Date {
            row,
            column: "ContractStart",
            source,
        })?;

        Ok(TerminationRequest {
            contract_id: self.contract_id.filter(|id| !id.is_empty()),
            contract_start,
            earliest_expected_termination: optional_date(
                self.earliest_expected_termination,
                row,
                "EarliestExpectedTermination",
            )?,
            reference_date: optional_date(self.reference_date, row, "ReferenceDate")?,
        })
    }
}

fn read_all<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<TerminationRequest>, LoadError> {
    let mut requests = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        requests.push(row.to_request(index + 1)?);
    }

    Ok(requests)
}

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<TerminationRequest>, LoadError> {
    let reader = csv::ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    read_all(reader)
}

/// Load requests from any reader (e.g., string buffer, request body)
pub fn load_requests_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<TerminationRequest>, LoadError> {
    read_all(csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_load_requests_from_reader() {
        let data = "\
ContractId,ContractStart,EarliestExpectedTermination,ReferenceDate
A-1,2024-10-01,2025-04-01,2025-03-01
A-2,2018-05-18,,2024-10-01
,2016-02-29,,
";
        let requests = load_requests_from_reader(data.as_bytes()).unwrap();
        assert_eq!(requests.len(), 3);

        assert_eq!(requests[0].contract_id.as_deref(), Some("A-1"));
        assert_eq!(requests[0].contract_start, d(2024, 10, 1));
        assert_eq!(requests[0].earliest_expected_termination, Some(d(2025, 4, 1)));
        assert_eq!(requests[0].reference_date, Some(d(2025, 3, 1)));

        assert_eq!(requests[1].earliest_expected_termination, None);
        assert_eq!(requests[1].reference_date, Some(d(2024, 10, 1)));

        assert_eq!(requests[2].contract_id, None);
        assert_eq!(requests[2].contract_start, d(2016, 2, 29));
        assert_eq!(requests[2].reference_date, None);
    }

    #[test]
    fn test_load_requests_reports_bad_date() {
        let data = "\
ContractId,ContractStart,EarliestExpectedTermination,ReferenceDate
A-1,2024-10-01,,
A-2,2001-02-29,,
";
        let err = load_requests_from_reader(data.as_bytes()).unwrap_err();
        match err {
            LoadError::Date { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "ContractStart");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
