//! Termination request records and CSV loading

mod data;
pub mod loader;

pub use data::{ResolvedDates, TerminationRequest};
pub use loader::{load_requests, load_requests_from_reader, LoadError};
