//! Earliest termination date engine

mod assessment;
mod calculator;
mod rules;

pub use assessment::{TerminationAssessment, TerminationBasis};
pub use calculator::{compute_earliest_termination, TerminationCalculator};
