//! Report assembly and rendering.

use std::fmt;

use crate::models::{MissingPercentages, Report};

/// Unrounded aggregator outputs, as produced by the metrics pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMetrics {
    pub missing_percentages: MissingPercentages,
    pub female_percentage: f64,
    pub adult_count: usize,
    pub average_medicines: f64,
    pub third_most_frequent_medicine: Option<String>,
    pub medicine_distribution: (f64, f64),
    pub valid_mobile_count: usize,
    pub pearson_correlation: f64,
}

/// Round to two decimals.
///
/// Rounds the exact stored value, so `2.675` (held as 2.67499...) gives
/// `2.67`. Scaling by 100 first would round the inexact product instead.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

impl Report {
    /// Round every fractional metric and freeze the result.
    pub fn assemble(raw: RawMetrics) -> Self {
        let missing = raw.missing_percentages;
        let (active, inactive) = raw.medicine_distribution;
        Self {
            missing_percentages: MissingPercentages {
                first_name: round2(missing.first_name),
                last_name: round2(missing.last_name),
                birth_date: round2(missing.birth_date),
            },
            female_percentage: round2(raw.female_percentage),
            adult_count: raw.adult_count,
            average_medicines: round2(raw.average_medicines),
            third_most_frequent_medicine: raw.third_most_frequent_medicine,
            medicine_distribution: (round2(active), round2(inactive)),
            valid_mobile_count: raw.valid_mobile_count,
            pearson_correlation: round2(raw.pearson_correlation),
        }
    }

    /// Export to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = &self.missing_percentages;
        writeln!(f, "Missing values:")?;
        writeln!(f, "  firstName: {:.2}%", missing.first_name)?;
        writeln!(f, "  lastName: {:.2}%", missing.last_name)?;
        writeln!(f, "  birthDate: {:.2}%", missing.birth_date)?;
        writeln!(f, "Female (after imputation): {:.2}%", self.female_percentage)?;
        writeln!(f, "Adults (20-59): {}", self.adult_count)?;
        writeln!(f, "Average medicines per consultation: {:.2}", self.average_medicines)?;
        writeln!(
            f,
            "3rd most frequent medicine: {}",
            self.third_most_frequent_medicine.as_deref().unwrap_or("n/a")
        )?;
        writeln!(
            f,
            "Medicines active/inactive: {:.2}% / {:.2}%",
            self.medicine_distribution.0, self.medicine_distribution.1
        )?;
        writeln!(f, "Valid mobile numbers: {}", self.valid_mobile_count)?;
        write!(f, "Age vs medicine count (Pearson): {:.2}", self.pearson_correlation)
    }
}
