//! Legal regimes governing consumer termination of non-life contracts
//!
//! The law of April 4, 2014 requires three months notice and only allows
//! termination at the end of an annual term. The reform in force from
//! October 1, 2024 shortens notice to two months and, once a contract has
//! renewed, allows termination at any time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::add_months;
use crate::error::{Result, TerminationError};

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid regulatory date"),
    }
}

/// Earliest renewal date the rules are defined for
pub const LEGAL_FLOOR: NaiveDate = ymd(2014, 4, 4);

/// First renewal date governed by the 2024 reform
pub const REGIME_BOUNDARY: NaiveDate = ymd(2024, 10, 1);

/// Notice period under the 2014 law, in months
pub const STANDARD_NOTICE_MONTHS: u32 = 3;

/// Notice period under the 2024 reform, in months
pub const REFORMED_NOTICE_MONTHS: u32 = 2;

/// Set of termination rules in force for a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    /// Governing renewal in [2014-04-04, 2024-10-01)
    Standard2014,
    /// Governing renewal on or after 2024-10-01
    Reform2024,
}

impl Regime {
    /// Select the regime from the contract's governing renewal
    pub fn classify(latest_renewal: NaiveDate) -> Result<Self> {
        if latest_renewal < LEGAL_FLOOR {
            Err(TerminationError::UnsupportedDate { latest_renewal })
        } else if latest_renewal >= REGIME_BOUNDARY {
            Ok(Regime::Reform2024)
        } else {
            Ok(Regime::Standard2014)
        }
    }

    pub fn notice_months(&self) -> u32 {
        match self {
            Regime::Standard2014 => STANDARD_NOTICE_MONTHS,
            Regime::Reform2024 => REFORMED_NOTICE_MONTHS,
        }
    }

    /// Earliest date a notice given on `reference_date` has run its course
    pub fn notice_end(&self, reference_date: NaiveDate) -> Result<NaiveDate> {
        add_months(reference_date, self.notice_months())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Standard2014 => "Standard2014",
            Regime::Reform2024 => "Reform2024",
        }
    }
}
