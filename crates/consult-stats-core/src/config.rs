//! Analysis options.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::age::AgeCalculator;

/// How to treat a non-empty birth date that does not parse.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BirthDatePolicy {
    /// Abort the analysis with an error naming the record
    #[default]
    Strict,
    /// Log a warning and exclude the record from age-based metrics
    TreatAsMissing,
}

/// Options controlling a single analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisOptions {
    /// Date ages are computed against
    pub reference_date: NaiveDate,
    /// Handling of malformed birth dates
    pub birth_date_policy: BirthDatePolicy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            reference_date: Utc::now().date_naive(),
            birth_date_policy: BirthDatePolicy::default(),
        }
    }
}

impl AnalysisOptions {
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    pub fn with_birth_date_policy(mut self, policy: BirthDatePolicy) -> Self {
        self.birth_date_policy = policy;
        self
    }

    /// Age calculator bound to the reference date.
    pub fn age_calculator(&self) -> AgeCalculator {
        AgeCalculator::new(self.reference_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AnalysisOptions::default();
        assert_eq!(options.birth_date_policy, BirthDatePolicy::Strict);
    }

    #[test]
    fn test_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let options = AnalysisOptions::default()
            .with_reference_date(date)
            .with_birth_date_policy(BirthDatePolicy::TreatAsMissing);

        assert_eq!(options.reference_date, date);
        assert_eq!(options.age_calculator().reference_date(), date);
        assert_eq!(options.birth_date_policy, BirthDatePolicy::TreatAsMissing);
    }
}
