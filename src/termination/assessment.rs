//! Result of a termination computation

use chrono::NaiveDate;
use serde::Serialize;

use crate::regime::Regime;

/// Constraint that fixed the termination date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationBasis {
    /// First anniversary of a contract still in its first year
    FirstAnniversary,
    /// End of the minimum notice period
    NoticePeriod,
    /// Date wanted by the policyholder
    ExpectedTermination,
    /// Renewal at or after the expected termination date
    RenewalAnniversary,
    /// Renewal after that one, because notice came too late
    FollowingRenewal,
}

impl TerminationBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationBasis::FirstAnniversary => "FirstAnniversary",
            TerminationBasis::NoticePeriod => "NoticePeriod",
            TerminationBasis::ExpectedTermination => "ExpectedTermination",
            TerminationBasis::RenewalAnniversary => "RenewalAnniversary",
            TerminationBasis::FollowingRenewal => "FollowingRenewal",
        }
    }
}

/// Earliest termination date together with the dates that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminationAssessment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,

    pub contract_start: NaiveDate,

    /// Reference date after defaulting
    pub reference_date: NaiveDate,

    /// Expected termination after defaulting (never before `reference_date`)
    pub earliest_expected_termination: NaiveDate,

    /// Anniversary of `contract_start` at or before the expected termination
    pub latest_renewal: NaiveDate,

    /// Regime selected from `latest_renewal`
    pub regime: Regime,

    /// `reference_date` plus the regime's notice period
    pub notice_end: NaiveDate,

    pub termination_date: NaiveDate,

    pub basis: TerminationBasis,
}
