//! Error types returned by the termination engine

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::regime::LEGAL_FLOOR;

/// Failure of a single termination computation
///
/// None of these are retryable: the caller-supplied dates are the cause.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TerminationError {
    /// The reference date precedes the start of the contract
    #[error(
        "the starting date of a contract (contract_start = {contract_start}) should precede \
         the reference date (reference_date = {reference_date})"
    )]
    ContractDate {
        contract_start: NaiveDate,
        reference_date: NaiveDate,
    },

    /// The governing renewal predates the earliest supported legal regime
    #[error(
        "the latest contract renewal ({latest_renewal}) falls outside of the supported range \
         ({floor} - now)",
        floor = LEGAL_FLOOR
    )]
    UnsupportedDate { latest_renewal: NaiveDate },

    /// Calendar arithmetic left the range chrono can represent
    #[error("date arithmetic out of range: {date} + {months} months")]
    DateOutOfRange { date: NaiveDate, months: u32 },
}

/// Payload-free discriminant of [`TerminationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    ContractDate,
    UnsupportedDate,
    DateOutOfRange,
}

impl ErrorKind {
    /// Stable identifier used in batch and HTTP output
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ContractDate => "ContractDateError",
            ErrorKind::UnsupportedDate => "UnsupportedDateError",
            ErrorKind::DateOutOfRange => "DateOutOfRangeError",
        }
    }
}

impl TerminationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TerminationError::ContractDate { .. } => ErrorKind::ContractDate,
            TerminationError::UnsupportedDate { .. } => ErrorKind::UnsupportedDate,
            TerminationError::DateOutOfRange { .. } => ErrorKind::DateOutOfRange,
        }
    }
}

/// Shorthand `Result` used throughout the crate
pub type Result<T, E = TerminationError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let reference = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let err = TerminationError::ContractDate {
            contract_start: start,
            reference_date: reference,
        };
        assert_eq!(err.kind(), ErrorKind::ContractDate);
        assert_eq!(err.kind().as_str(), "ContractDateError");

        let err = TerminationError::UnsupportedDate {
            latest_renewal: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        };
        assert_eq!(err.kind(), ErrorKind::UnsupportedDate);
    }

    #[test]
    fn test_error_messages() {
        let err = TerminationError::ContractDate {
            contract_start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            reference_date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2020-01-01"));
        assert!(msg.contains("2018-01-01"));

        let err = TerminationError::UnsupportedDate {
            latest_renewal: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        };
        assert!(err.to_string().contains("2014-04-04"));
    }
}
