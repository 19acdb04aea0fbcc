//! Prescription aggregates.

use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::models::Medicine;

use super::{percentage, MetricsError, MetricsResult};

/// Frequency rank reported as `third_most_frequent_medicine`.
pub const REPORTED_MEDICINE_RANK: usize = 3;

/// Occurrences of one medicine name across the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineFrequency<'a> {
    pub name: &'a str,
    pub count: usize,
}

fn all_medicines(dataset: &Dataset) -> impl Iterator<Item = &Medicine> {
    dataset.iter().flat_map(|r| r.medicines())
}

/// Total medicine entries across all records.
pub fn total_medicines(dataset: &Dataset) -> usize {
    dataset.iter().map(|r| r.medicine_count()).sum()
}

/// Medicines per record, averaged over every record (including those with
/// no prescriptions). 0 for an empty dataset.
pub fn average_medicines(dataset: &Dataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }
    total_medicines(dataset) as f64 / dataset.len() as f64
}

/// Medicine names by descending frequency.
///
/// Names with equal counts keep the order in which they were first seen.
/// Entries without a name are skipped.
pub fn medicine_frequencies(dataset: &Dataset) -> Vec<MedicineFrequency<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut frequencies: Vec<MedicineFrequency<'_>> = Vec::new();

    for name in all_medicines(dataset).filter_map(Medicine::name) {
        match index.get(name).copied() {
            Some(i) => frequencies[i].count += 1,
            None => {
                index.insert(name, frequencies.len());
                frequencies.push(MedicineFrequency { name, count: 1 });
            }
        }
    }

    // Stable sort keeps first-seen order among ties
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

/// Name ranked `rank` (1-based) by frequency.
pub fn nth_most_frequent_medicine(dataset: &Dataset, rank: usize) -> MetricsResult<&str> {
    let frequencies = medicine_frequencies(dataset);
    rank.checked_sub(1)
        .and_then(|i| frequencies.get(i))
        .map(|f| f.name)
        .ok_or(MetricsError::InsufficientMedicines {
            rank,
            distinct: frequencies.len(),
        })
}

/// Percentages of medicine entries that are active and inactive.
///
/// Both are 0 when there are no medicine entries.
pub fn medicine_distribution(dataset: &Dataset) -> (f64, f64) {
    let (active, inactive) = all_medicines(dataset).fold((0, 0), |(a, i), med| {
        if med.active() {
            (a + 1, i)
        } else {
            (a, i + 1)
        }
    });
    let total = active + inactive;
    (percentage(active, total), percentage(inactive, total))
}
