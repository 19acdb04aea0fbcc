//! Metric aggregators.
//!
//! Each aggregator is an independent pass over the dataset. Values returned
//! here are unrounded; rounding happens when the report is assembled.

mod completeness;
mod contact;
mod correlation;
mod demographics;
mod medicines;

pub use completeness::*;
pub use contact::*;
pub use correlation::*;
pub use demographics::*;
pub use medicines::*;

use thiserror::Error;

use crate::age::AgeError;

/// Metric computation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Record {index}: {source}")]
    InvalidBirthDate {
        index: usize,
        #[source]
        source: AgeError,
    },

    #[error("Cannot rank medicine #{rank}: only {distinct} distinct medicine names")]
    InsufficientMedicines { rank: usize, distinct: usize },
}

pub type MetricsResult<T> = Result<T, MetricsError>;

/// `part` as a percentage of `whole`; 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
