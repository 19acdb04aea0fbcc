//! Missing-value rates.

use crate::dataset::Dataset;
use crate::models::{ConsultationRecord, MissingPercentages};

use super::percentage;

/// Percentage of records missing first name, last name and birth date.
pub fn missing_percentages(dataset: &Dataset) -> MissingPercentages {
    MissingPercentages {
        first_name: missing_percentage(dataset, ConsultationRecord::first_name),
        last_name: missing_percentage(dataset, ConsultationRecord::last_name),
        birth_date: missing_percentage(dataset, ConsultationRecord::birth_date),
    }
}

/// Percentage of records for which `field` is absent, null or empty.
pub fn missing_percentage(
    dataset: &Dataset,
    field: fn(&ConsultationRecord) -> Option<&str>,
) -> f64 {
    let count = dataset.iter().filter(|&r| field(r).is_none()).count();
    percentage(count, dataset.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_percentages() {
        let dataset = Dataset::from_json_str(
            r#"[
                {"patientDetails": {"firstName": "A", "lastName": "B", "birthDate": "2000-01-01T00:00:00.000Z"}},
                {"patientDetails": {"firstName": "", "lastName": "B"}},
                {"patientDetails": {"firstName": null}},
                {}
            ]"#,
        )
        .unwrap();

        let missing = missing_percentages(&dataset);
        assert_eq!(missing.first_name, 75.0);
        assert_eq!(missing.last_name, 50.0);
        assert_eq!(missing.birth_date, 75.0);
    }

    #[test]
    fn test_empty_dataset() {
        assert_eq!(
            missing_percentages(&Dataset::default()),
            MissingPercentages::default()
        );
    }
}
