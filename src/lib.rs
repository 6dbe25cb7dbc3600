//! Insurance Termination - earliest legal termination date of Belgian consumer non-life contracts
//!
//! This library provides:
//! - Regime selection between the April 4, 2014 law and the October 1, 2024 reform
//! - Anniversary and notice-period arithmetic with leap-day clamping
//! - Single and batch assessments of termination requests

pub mod calendar;
pub mod clock;
pub mod contract;
pub mod error;
pub mod regime;
pub mod termination;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use contract::{ResolvedDates, TerminationRequest};
pub use error::{ErrorKind, Result, TerminationError};
pub use regime::{Regime, LEGAL_FLOOR, REGIME_BOUNDARY};
pub use termination::{
    compute_earliest_termination, TerminationAssessment, TerminationBasis, TerminationCalculator,
};
