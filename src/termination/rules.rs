//! Per-regime termination rules

use chrono::NaiveDate;
use log::trace;

use super::TerminationBasis;
use crate::calendar::{add_years, anniversary_on_or_after};
use crate::contract::ResolvedDates;
use crate::error::Result;
use crate::regime::Regime;

/// Termination date produced by a rule, with what pinned it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RuleOutcome {
    pub termination_date: NaiveDate,
    pub notice_end: NaiveDate,
    pub basis: TerminationBasis,
}

/// Latest candidate; ties resolve to the earliest listed basis
fn latest(candidates: &[(NaiveDate, TerminationBasis)]) -> (NaiveDate, TerminationBasis) {
    let mut best = candidates[0];
    for &candidate in &candidates[1..] {
        if candidate.0 > best.0 {
            best = candidate;
        }
    }
    best
}

/// Contracts whose governing renewal is on or after 2024-10-01
///
/// In the first contract year termination only takes effect at the first
/// anniversary. After a renewal, termination may take effect at any time.
/// Both are subject to two months notice and the expected termination date.
pub(crate) fn reform_2024(dates: &ResolvedDates, latest_renewal: NaiveDate) -> Result<RuleOutcome> {
    let notice_end = Regime::Reform2024.notice_end(dates.reference_date)?;

    let (termination_date, basis) = if latest_renewal == dates.contract_start {
        let first_anniversary = add_years(dates.contract_start, 1)?;
        trace!("first contract year, first anniversary {first_anniversary}");
        latest(&[
            (first_anniversary, TerminationBasis::FirstAnniversary),
            (dates.earliest_expected_termination, TerminationBasis::ExpectedTermination),
            (notice_end, TerminationBasis::NoticePeriod),
        ])
    } else {
        latest(&[
            (dates.earliest_expected_termination, TerminationBasis::ExpectedTermination),
            (notice_end, TerminationBasis::NoticePeriod),
        ])
    };

    Ok(RuleOutcome {
        termination_date,
        notice_end,
        basis,
    })
}

/// Contracts whose governing renewal is before 2024-10-01
///
/// Termination only takes effect at a renewal anniversary, after three months
/// notice. When the notice cannot complete by the first renewal at or after
/// the expected termination date, the contract runs to the following one.
pub(crate) fn standard_2014(dates: &ResolvedDates) -> Result<RuleOutcome> {
    let notice_end = Regime::Standard2014.notice_end(dates.reference_date)?;

    let target_renewal =
        anniversary_on_or_after(dates.contract_start, dates.earliest_expected_termination)?;
    trace!("target renewal {target_renewal}, notice ends {notice_end}");

    let (termination_date, basis) = if notice_end > target_renewal {
        (
            add_years(target_renewal, 1)?,
            TerminationBasis::FollowingRenewal,
        )
    } else {
        latest(&[
            (target_renewal, TerminationBasis::RenewalAnniversary),
            (dates.earliest_expected_termination, TerminationBasis::ExpectedTermination),
            (notice_end, TerminationBasis::NoticePeriod),
        ])
    };

    Ok(RuleOutcome {
        termination_date,
        notice_end,
        basis,
    })
}
