//! Gender and age-group aggregates.

use std::collections::HashMap;

use crate::age::AgeCalculator;
use crate::config::BirthDatePolicy;
use crate::dataset::Dataset;
use crate::models::{AgeGroup, AgeGroupCounts};

use super::{percentage, MetricsError, MetricsResult};

/// Gender code counted by [`female_percentage`].
pub const FEMALE: &str = "F";

/// Most frequent non-missing gender. Ties go to the value seen first.
pub fn gender_mode(dataset: &Dataset) -> Option<&str> {
    most_common(dataset.iter().filter_map(|r| r.gender()))
}

/// Percentage of records whose gender, imputed with the dataset mode when
/// missing, is female.
pub fn female_percentage(dataset: &Dataset) -> f64 {
    let mode = gender_mode(dataset);
    let female = dataset
        .iter()
        .filter(|r| r.gender().or(mode) == Some(FEMALE))
        .count();
    percentage(female, dataset.len())
}

/// Age of every record, in input order.
///
/// Missing birth dates yield `None`. Malformed ones either abort or become
/// `None`, depending on `policy`.
pub fn record_ages(
    dataset: &Dataset,
    calculator: &AgeCalculator,
    policy: BirthDatePolicy,
) -> MetricsResult<Vec<Option<i32>>> {
    dataset
        .iter()
        .enumerate()
        .map(|(index, record)| match calculator.age(record.birth_date()) {
            Ok(age) => Ok(age),
            Err(source) => match policy {
                BirthDatePolicy::Strict => Err(MetricsError::InvalidBirthDate { index, source }),
                BirthDatePolicy::TreatAsMissing => {
                    tracing::warn!(index, error = %source, "Treating malformed birth date as missing");
                    Ok(None)
                }
            },
        })
        .collect()
}

/// Bracket counts for a list of per-record ages.
pub fn age_group_counts(ages: &[Option<i32>]) -> AgeGroupCounts {
    let mut counts = AgeGroupCounts::default();
    for age in ages {
        counts.record(age.map(AgeGroup::from_age));
    }
    counts
}

/// First-encountered-wins mode of a sequence.
fn most_common<'a>(values: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        let count = counts.entry(value).or_insert_with(|| {
            order.push(value);
            0
        });
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for value in order {
        let count = counts[value];
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
