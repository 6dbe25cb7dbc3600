//! Caller-supplied contract dates and their defaulting rules

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// The three dates describing one termination question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationRequest {
    /// Optional identifier carried through to the output
    #[serde(default)]
    pub contract_id: Option<String>,

    /// Date the contract with the insurer first took effect
    pub contract_start: NaiveDate,

    /// Earliest end date wanted by the policyholder (defaults to the reference date)
    #[serde(default)]
    pub earliest_expected_termination: Option<NaiveDate>,

    /// Earliest date notice can be given to the insurer (defaults to today)
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

/// Request dates after defaulting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDates {
    pub contract_start: NaiveDate,
    pub reference_date: NaiveDate,
    /// Never earlier than `reference_date`
    pub earliest_expected_termination: NaiveDate,
}

impl TerminationRequest {
    /// Create a request with only the contract start set
    pub fn new(contract_start: NaiveDate) -> Self {
        Self {
            contract_id: None,
            contract_start,
            earliest_expected_termination: None,
            reference_date: None,
        }
    }

    pub fn with_earliest_expected_termination(mut self, date: NaiveDate) -> Self {
        self.earliest_expected_termination = Some(date);
        self
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn with_contract_id(mut self, contract_id: impl Into<String>) -> Self {
        self.contract_id = Some(contract_id.into());
        self
    }

    /// Apply the defaults: reference date falls back to `clock.today()`, and
    /// the expected termination is raised to the reference date when missing
    /// or earlier.
    pub fn resolve<C: Clock + ?Sized>(&self, clock: &C) -> ResolvedDates {
        let reference_date = match self.reference_date {
            Some(date) => date,
            None => {
                let today = clock.today();
                debug!("no reference date given, using today ({today})");
                today
            }
        };

        let earliest_expected_termination = match self.earliest_expected_termination {
            Some(date) if date >= reference_date => date,
            Some(date) => {
                debug!("expected termination {date} precedes reference date {reference_date}, ignoring it");
                reference_date
            }
            None => reference_date,
        };

        ResolvedDates {
            contract_start: self.contract_start,
            reference_date,
            earliest_expected_termination,
        }
    }
}
