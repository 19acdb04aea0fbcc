//! Consult-Stats Core Library
//!
//! Descriptive statistics over patient consultation records.
//!
//! # Architecture
//!
//! ```text
//! JSON document → Dataset ──┬── missing percentages
//!                           ├── female percentage (mode-imputed gender)
//!                           ├── ages → age groups → adult count
//!                           │       └── age/medicine Pearson correlation
//!                           ├── average medicines, Nth medicine, active/inactive
//!                           └── valid mobile count
//!                                         │
//!                                         ▼
//!                               Report (rounded to 2 dp)
//! ```
//!
//! Every aggregator takes the dataset explicitly; there is no shared state.
//!
//! # Modules
//!
//! - [`dataset`]: JSON loading
//! - [`models`]: Domain types (ConsultationRecord, Medicine, Report, etc.)
//! - [`age`]: Age calculation from birth timestamps
//! - [`mobile`]: Indian mobile number validation
//! - [`metrics`]: Independent metric aggregators
//! - [`analysis`]: Pipeline running every aggregator
//! - [`report`]: Report assembly and rendering
//! - [`config`]: Analysis options

pub mod age;
pub mod analysis;
pub mod config;
pub mod dataset;
pub mod metrics;
pub mod mobile;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use age::{AgeCalculator, AgeError};
pub use analysis::Analyzer;
pub use config::{AnalysisOptions, BirthDatePolicy};
pub use dataset::{Dataset, LoadError};
pub use metrics::MetricsError;
pub use mobile::is_valid_mobile;
pub use models::{
    AgeGroup, AgeGroupCounts, ConsultationData, ConsultationRecord, Medicine,
    MissingPercentages, PatientDetails, Report,
};

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConsultStatsError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),
}

pub type ConsultStatsResult<T> = Result<T, ConsultStatsError>;

/// Compute the report for an already loaded dataset.
pub fn analyze(dataset: &Dataset, options: AnalysisOptions) -> ConsultStatsResult<Report> {
    Ok(Analyzer::new(dataset, options).run()?)
}

/// Load a JSON file and compute its report.
pub fn analyze_file<P: AsRef<Path>>(path: P, options: AnalysisOptions) -> ConsultStatsResult<Report> {
    let dataset = Dataset::open(path)?;
    analyze(&dataset, options)
}
