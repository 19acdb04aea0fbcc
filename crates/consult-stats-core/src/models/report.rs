//! Aggregate report models.

use serde::{Deserialize, Serialize};

/// Percentage of records missing each identity field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MissingPercentages {
    #[serde(rename = "firstName")]
    pub first_name: f64,
    #[serde(rename = "lastName")]
    pub last_name: f64,
    #[serde(rename = "birthDate")]
    pub birth_date: f64,
}

/// Age bracket derived from a computed age.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    /// 12 and under
    Child,
    /// 13 to 19
    Teen,
    /// 20 to 59
    Adult,
    /// 60 and over
    Senior,
}

impl AgeGroup {
    /// Bracket for an age in whole years.
    pub fn from_age(age: i32) -> Self {
        match age {
            a if a <= 12 => AgeGroup::Child,
            a if a <= 19 => AgeGroup::Teen,
            a if a <= 59 => AgeGroup::Adult,
            _ => AgeGroup::Senior,
        }
    }
}

/// Record counts per age bracket.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgeGroupCounts {
    pub child: usize,
    pub teen: usize,
    pub adult: usize,
    pub senior: usize,
    /// Records without a computable age
    pub unknown: usize,
}

impl AgeGroupCounts {
    pub fn record(&mut self, group: Option<AgeGroup>) {
        match group {
            Some(AgeGroup::Child) => self.child += 1,
            Some(AgeGroup::Teen) => self.teen += 1,
            Some(AgeGroup::Adult) => self.adult += 1,
            Some(AgeGroup::Senior) => self.senior += 1,
            None => self.unknown += 1,
        }
    }

    /// Records that landed in any bracket.
    pub fn bracketed(&self) -> usize {
        self.child + self.teen + self.adult + self.senior
    }

    pub fn total(&self) -> usize {
        self.bracketed() + self.unknown
    }
}

/// Final statistics report.
///
/// Percentages, the medicine average and the correlation are rounded to two
/// decimals; counts are exact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub missing_percentages: MissingPercentages,
    pub female_percentage: f64,
    pub adult_count: usize,
    pub average_medicines: f64,
    /// `None` when fewer than three distinct medicine names exist
    pub third_most_frequent_medicine: Option<String>,
    /// (active %, inactive %)
    pub medicine_distribution: (f64, f64),
    pub valid_mobile_count: usize,
    pub pearson_correlation: f64,
}
