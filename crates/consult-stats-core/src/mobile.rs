//! Indian mobile number validation.
//!
//! Accepts an optional `+91` or `91` country code followed by a ten-digit
//! national number in the 6000000000..=9999999999 range.

use std::ops::RangeInclusive;

/// Country code prefixes, checked in order. At most one is stripped.
const COUNTRY_PREFIXES: [&str; 2] = ["+91", "91"];

/// Valid national numbers (first digit 6-9).
const MOBILE_RANGE: RangeInclusive<u64> = 6_000_000_000..=9_999_999_999;

/// Strip the country code and return the national number if it is a valid
/// mobile number.
pub fn normalize_mobile(phone_number: &str) -> Option<&str> {
    let national = COUNTRY_PREFIXES
        .iter()
        .find_map(|prefix| phone_number.strip_prefix(prefix))
        .unwrap_or(phone_number);

    if national.len() != 10 || !national.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: u64 = national.parse().ok()?;
    MOBILE_RANGE.contains(&value).then_some(national)
}

/// Whether `phone_number` is a valid Indian mobile number.
pub fn is_valid_mobile(phone_number: &str) -> bool {
    normalize_mobile(phone_number).is_some()
}
