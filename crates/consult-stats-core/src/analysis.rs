//! Analysis pipeline.
//!
//! Pipeline: Dataset → Ages → Aggregators → Report

use crate::config::AnalysisOptions;
use crate::dataset::Dataset;
use crate::metrics::{self, MetricsResult, REPORTED_MEDICINE_RANK};
use crate::models::{AgeGroupCounts, Report};
use crate::report::RawMetrics;

/// Runs every aggregator over one dataset.
pub struct Analyzer<'a> {
    dataset: &'a Dataset,
    options: AnalysisOptions,
}

impl<'a> Analyzer<'a> {
    /// Create a new analyzer.
    pub fn new(dataset: &'a Dataset, options: AnalysisOptions) -> Self {
        Self { dataset, options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Age of every record under the configured reference date and policy.
    pub fn ages(&self) -> MetricsResult<Vec<Option<i32>>> {
        metrics::record_ages(
            self.dataset,
            &self.options.age_calculator(),
            self.options.birth_date_policy,
        )
    }

    /// Per-bracket record counts.
    pub fn age_group_counts(&self) -> MetricsResult<AgeGroupCounts> {
        Ok(metrics::age_group_counts(&self.ages()?))
    }

    /// Compute all metrics without rounding.
    pub fn compute(&self) -> MetricsResult<RawMetrics> {
        let dataset = self.dataset;
        let ages = self.ages()?;

        let missing_percentages = metrics::missing_percentages(dataset);
        tracing::debug!(?missing_percentages, "Computed missing percentages");

        let female_percentage = metrics::female_percentage(dataset);
        tracing::debug!(female_percentage, "Computed female percentage");

        let age_groups = metrics::age_group_counts(&ages);
        tracing::debug!(?age_groups, "Computed age groups");

        let average_medicines = metrics::average_medicines(dataset);
        tracing::debug!(average_medicines, "Computed average medicines");

        // Too few distinct names leaves the field null rather than failing the run
        let third_most_frequent_medicine =
            metrics::nth_most_frequent_medicine(dataset, REPORTED_MEDICINE_RANK)
                .map(str::to_string)
                .inspect_err(|e| tracing::warn!(error = %e, "Medicine ranking unavailable"))
                .ok();
        tracing::debug!(?third_most_frequent_medicine, "Ranked medicines");

        let medicine_distribution = metrics::medicine_distribution(dataset);
        tracing::debug!(?medicine_distribution, "Computed medicine distribution");

        let valid_mobile_count = metrics::valid_mobile_count(dataset);
        tracing::debug!(valid_mobile_count, "Counted valid mobile numbers");

        let pearson_correlation = metrics::age_medicine_correlation(dataset, &ages);
        tracing::debug!(pearson_correlation, "Computed age/medicine correlation");

        Ok(RawMetrics {
            missing_percentages,
            female_percentage,
            adult_count: age_groups.adult,
            average_medicines,
            third_most_frequent_medicine,
            medicine_distribution,
            valid_mobile_count,
            pearson_correlation,
        })
    }

    /// Compute all metrics and assemble the rounded report.
    pub fn run(&self) -> MetricsResult<Report> {
        Ok(Report::assemble(self.compute()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BirthDatePolicy;
    use crate::metrics::MetricsError;
    use crate::models::{ConsultationData, ConsultationRecord, Medicine};
    use chrono::NaiveDate;

    fn options() -> AnalysisOptions {
        AnalysisOptions::default().with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn test_empty_dataset_report() {
        let dataset = Dataset::default();
        let report = Analyzer::new(&dataset, options()).run().unwrap();

        assert_eq!(report.missing_percentages.first_name, 0.0);
        assert_eq!(report.female_percentage, 0.0);
        assert_eq!(report.adult_count, 0);
        assert_eq!(report.average_medicines, 0.0);
        assert_eq!(report.third_most_frequent_medicine, None);
        assert_eq!(report.medicine_distribution, (0.0, 0.0));
        assert_eq!(report.valid_mobile_count, 0);
        assert_eq!(report.pearson_correlation, 0.0);
    }

    #[test]
    fn test_strict_policy_aborts() {
        let dataset =
            Dataset::from_json_str(r#"[{"patientDetails": {"birthDate": "yesterday"}}]"#).unwrap();
        let err = Analyzer::new(&dataset, options()).run().unwrap_err();
        assert!(matches!(err, MetricsError::InvalidBirthDate { index: 0, .. }));
    }

    #[test]
    fn test_lenient_policy_excludes_record() {
        let dataset = Dataset::from_json_str(
            r#"[
                {"patientDetails": {"birthDate": "yesterday"}},
                {"patientDetails": {"birthDate": "1990-01-01T00:00:00.000000Z"}}
            ]"#,
        )
        .unwrap();
        let analyzer = Analyzer::new(
            &dataset,
            options().with_birth_date_policy(BirthDatePolicy::TreatAsMissing),
        );

        let counts = analyzer.age_group_counts().unwrap();
        assert_eq!(counts.adult, 1);
        assert_eq!(counts.unknown, 1);

        let report = analyzer.run().unwrap();
        assert_eq!(report.adult_count, 1);
        // Malformed is still present, so not counted as missing
        assert_eq!(report.missing_percentages.birth_date, 0.0);
    }

    #[test]
    fn test_reports_third_ranked_medicine_only() {
        let dataset = Dataset::from_json_str(
            r#"[{"consultationData": {"medicines": [
                {"medicineName": "A", "isActive": true},
                {"medicineName": "B", "isActive": true},
                {"medicineName": "A", "isActive": true}
            ]}}]"#,
        )
        .unwrap();
        let report = Analyzer::new(&dataset, options()).run().unwrap();
        assert_eq!(report.third_most_frequent_medicine, None);
        assert_eq!(report.average_medicines, 3.0);

        let dataset = Dataset::from_json_str(
            r#"[{"consultationData": {"medicines": [
                {"medicineName": "A", "isActive": true},
                {"medicineName": "B", "isActive": true},
                {"medicineName": "C", "isActive": true},
                {"medicineName": "A", "isActive": true}
            ]}}]"#,
        )
        .unwrap();
        let report = Analyzer::new(&dataset, options()).run().unwrap();
        assert_eq!(report.third_most_frequent_medicine.as_deref(), Some("C"));
    }

    #[test]
    fn test_average_rounds_stored_value() {
        // 107 medicines over 40 records: 2.675 is held just below the half
        let record = |count: usize| ConsultationRecord {
            consultation_data: Some(ConsultationData {
                medicines: Some(vec![Medicine::new("Paracetamol", true); count]),
            }),
            ..Default::default()
        };
        let records: Vec<_> = std::iter::repeat_with(|| record(3))
            .take(27)
            .chain(std::iter::repeat_with(|| record(2)).take(13))
            .collect();
        let dataset = Dataset::new(records);

        let report = Analyzer::new(&dataset, options()).run().unwrap();
        assert_eq!(report.average_medicines, 2.67);
    }
}
