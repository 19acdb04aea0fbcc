//! Contact number validity.

use crate::dataset::Dataset;
use crate::mobile::is_valid_mobile;

/// Number of records carrying a valid Indian mobile number.
pub fn valid_mobile_count(dataset: &Dataset) -> usize {
    dataset
        .iter()
        .filter(|r| is_valid_mobile(r.phone_number().unwrap_or("")))
        .count()
}
