//! Entry point: validation, regime dispatch and defaulting

use chrono::NaiveDate;
use log::debug;

use super::rules::{self, RuleOutcome};
use super::TerminationAssessment;
use crate::calendar::anniversary_on_or_before;
use crate::clock::{Clock, SystemClock};
use crate::contract::TerminationRequest;
use crate::error::{Result, TerminationError};
use crate::regime::Regime;

/// Computes the earliest legal termination date of consumer non-life contracts
///
/// Stateless apart from the clock used to default the reference date, so a
/// single instance can be shared across threads.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use insurance_termination::{FixedClock, TerminationCalculator};
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let calculator = TerminationCalculator::with_clock(FixedClock(today));
/// let start = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
/// let date = calculator.earliest_termination(start, None, None).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TerminationCalculator<C: Clock = SystemClock> {
    clock: C,
}

impl TerminationCalculator<SystemClock> {
    /// Calculator that defaults the reference date to the system date
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> TerminationCalculator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Earliest termination date for the given dates
    ///
    /// `reference_date` defaults to today; `earliest_expected_termination`
    /// defaults to the reference date and is never taken earlier than it.
    ///
    /// # Errors
    /// * [`TerminationError::ContractDate`] if the reference date precedes `contract_start`
    /// * [`TerminationError::UnsupportedDate`] if the governing renewal is before 2014-04-04
    pub fn earliest_termination(
        &self,
        contract_start: NaiveDate,
        earliest_expected_termination: Option<NaiveDate>,
        reference_date: Option<NaiveDate>,
    ) -> Result<NaiveDate> {
        let request = TerminationRequest {
            contract_id: None,
            contract_start,
            earliest_expected_termination,
            reference_date,
        };
        Ok(self.assess(&request)?.termination_date)
    }

    /// Full assessment of a request: resolved dates, regime and deciding constraint
    pub fn assess(&self, request: &TerminationRequest) -> Result<TerminationAssessment> {
        let dates = request.resolve(&self.clock);

        if dates.reference_date < dates.contract_start {
            return Err(TerminationError::ContractDate {
                contract_start: dates.contract_start,
                reference_date: dates.reference_date,
            });
        }

        let latest_renewal =
            anniversary_on_or_before(dates.contract_start, dates.earliest_expected_termination)?;
        let regime = Regime::classify(latest_renewal)?;
        debug!(
            "contract {} renewed {latest_renewal}, applying {}",
            dates.contract_start,
            regime.as_str()
        );

        let RuleOutcome {
            termination_date,
            notice_end,
            basis,
        } = match regime {
            Regime::Reform2024 => rules::reform_2024(&dates, latest_renewal)?,
            Regime::Standard2014 => rules::standard_2014(&dates)?,
        };

        Ok(TerminationAssessment {
            contract_id: request.contract_id.clone(),
            contract_start: dates.contract_start,
            reference_date: dates.reference_date,
            earliest_expected_termination: dates.earliest_expected_termination,
            latest_renewal,
            regime,
            notice_end,
            termination_date,
            basis,
        })
    }
}

/// Earliest termination date, defaulting the reference date to the system date
///
/// See [`TerminationCalculator::earliest_termination`].
pub fn compute_earliest_termination(
    contract_start: NaiveDate,
    earliest_expected_termination: Option<NaiveDate>,
    reference_date: Option<NaiveDate>,
) -> Result<NaiveDate> {
    TerminationCalculator::new().earliest_termination(
        contract_start,
        earliest_expected_termination,
        reference_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::termination::TerminationBasis;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn calculator(today: NaiveDate) -> TerminationCalculator<FixedClock> {
        TerminationCalculator::with_clock(FixedClock(today))
    }

    #[test]
    fn test_contract_date_error() {
        let err = calculator(d(2025, 1, 1))
            .earliest_termination(d(2020, 1, 1), Some(d(2020, 1, 1)), Some(d(2018, 1, 1)))
            .unwrap_err();
        assert_eq!(
            err,
            TerminationError::ContractDate {
                contract_start: d(2020, 1, 1),
                reference_date: d(2018, 1, 1),
            }
        );
    }

    #[test]
    fn test_contract_date_error_with_default_reference() {
        // A contract starting after today cannot be terminated yet
        let err = calculator(d(2025, 1, 1))
            .earliest_termination(d(2025, 6, 1), None, None)
            .unwrap_err();
        assert!(matches!(err, TerminationError::ContractDate { .. }));
    }

    #[test]
    fn test_unsupported_date_error() {
        let err = calculator(d(2025, 1, 1))
            .earliest_termination(d(1999, 1, 1), Some(d(2000, 1, 1)), Some(d(2000, 1, 1)))
            .unwrap_err();
        assert_eq!(
            err,
            TerminationError::UnsupportedDate {
                latest_renewal: d(2000, 1, 1)
            }
        );
    }

    #[test]
    fn test_old_contract_renewed_after_legal_floor_is_supported() {
        // Started in 1999, last renewed on 2015-01-01
        let date = calculator(d(2025, 1, 1))
            .earliest_termination(d(1999, 1, 1), Some(d(2015, 6, 1)), Some(d(2015, 6, 1)))
            .unwrap();
        assert_eq!(date, d(2016, 1, 1));
    }

    #[test]
    fn test_assess_reports_regime_and_basis() {
        let request = TerminationRequest::new(d(2018, 5, 18))
            .with_contract_id("C-42")
            .with_earliest_expected_termination(d(2024, 10, 1))
            .with_reference_date(d(2024, 10, 1));
        let assessment = calculator(d(2030, 1, 1)).assess(&request).unwrap();

        assert_eq!(assessment.contract_id.as_deref(), Some("C-42"));
        assert_eq!(assessment.latest_renewal, d(2024, 5, 18));
        assert_eq!(assessment.regime, Regime::Standard2014);
        assert_eq!(assessment.notice_end, d(2025, 1, 1));
        assert_eq!(assessment.termination_date, d(2025, 5, 18));
        assert_eq!(assessment.basis, TerminationBasis::RenewalAnniversary);
    }

    #[test]
    fn test_assess_crossing_into_reform() {
        let request = TerminationRequest::new(d(2018, 5, 18))
            .with_earliest_expected_termination(d(2025, 5, 21))
            .with_reference_date(d(2025, 5, 21));
        let assessment = calculator(d(2030, 1, 1)).assess(&request).unwrap();

        assert_eq!(assessment.latest_renewal, d(2025, 5, 18));
        assert_eq!(assessment.regime, Regime::Reform2024);
        assert_eq!(assessment.termination_date, d(2025, 7, 21));
        assert_eq!(assessment.basis, TerminationBasis::NoticePeriod);
    }

    #[test]
    fn test_defaults_use_clock() {
        let calc = calculator(d(2025, 11, 1));
        assert_eq!(
            calc.earliest_termination(d(2024, 10, 10), None, None).unwrap(),
            d(2026, 1, 1)
        );
        assert_eq!(
            calc.earliest_termination(d(2024, 10, 10), Some(d(2025, 12, 1)), None)
                .unwrap(),
            d(2026, 1, 1)
        );
        assert_eq!(
            calc.earliest_termination(d(2024, 10, 10), Some(d(2026, 2, 1)), None)
                .unwrap(),
            d(2026, 2, 1)
        );
    }
}
