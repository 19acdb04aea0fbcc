//! Age calculation from birth timestamps.
//!
//! Birth dates arrive as UTC timestamps such as `2000-06-15T00:00:00.000000Z`.
//! Ages are whole years relative to a reference date, which defaults to today.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use crate::models::AgeGroup;

/// Expected birth timestamp layout. The fractional part is optional.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Age calculation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgeError {
    #[error("Invalid birth date {value:?}: {reason}")]
    InvalidBirthDate { value: String, reason: String },
}

pub type AgeResult<T> = Result<T, AgeError>;

/// Computes ages against a fixed reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeCalculator {
    reference_date: NaiveDate,
}

impl Default for AgeCalculator {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

impl AgeCalculator {
    /// Create a calculator that treats `reference_date` as today.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Age in whole years, or `None` when the birth date is absent or empty.
    ///
    /// A birthday falling on the reference date counts as reached.
    pub fn age(&self, birth_date: Option<&str>) -> AgeResult<Option<i32>> {
        let Some(raw) = birth_date.filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let born = parse_birth_date(raw)?;
        Ok(Some(self.age_on(born)))
    }

    /// Age bracket, or `None` when the birth date is absent or empty.
    pub fn age_group(&self, birth_date: Option<&str>) -> AgeResult<Option<AgeGroup>> {
        Ok(self.age(birth_date)?.map(AgeGroup::from_age))
    }

    fn age_on(&self, born: NaiveDate) -> i32 {
        let today = self.reference_date;
        let before_birthday = (today.month(), today.day()) < (born.month(), born.day());
        today.year() - born.year() - i32::from(before_birthday)
    }
}

/// Parse a birth timestamp into its UTC calendar date.
pub fn parse_birth_date(raw: &str) -> AgeResult<NaiveDate> {
    NaiveDateTime::parse_from_str(raw, BIRTH_DATE_FORMAT)
        .map(|dt| dt.date())
        .map_err(|e| AgeError::InvalidBirthDate {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
