//! Domain models for consultation statistics.

mod record;
mod report;

pub use record::*;
pub use report::*;
