//! Numeric conversion of dotted app-version strings.

use std::sync::OnceLock;

use regex::Regex;

const MULTIPLICATION_FACTOR: i64 = 10;

fn numeric_segment() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^-?\d+(\.\d+)?$").expect("numeric segment pattern should be a valid regex")
    })
}

/// Converts a dotted version string to an integer usable for ">=" comparison against a configured
/// floor. For example, `"1.2.1.beta1"` is converted to `121`.
///
/// The version is split on `.`; non-numeric segments (like `"beta1"`) are discarded and the
/// remaining segments are concatenated positionally: `result = result * 10 + segment`. Empty input
/// or input with no numeric segments yields `0`.
///
/// This is a deliberate approximation, not a semver comparison. Segments are digit-shifted, not
/// zero-padded, so ordering across versions with differing segment counts or multi-digit segments
/// is not lexically correct ("1.10" → 20 collides with "2.0" → 20 and compares below
/// "1.9.9" → 199). Callers compare against a floor with a matching segment layout. Accumulation
/// wraps on overflow rather than panicking.
pub fn version_to_numeric(version: &str) -> i64 {
    version
        .split('.')
        .filter(|segment| numeric_segment().is_match(segment))
        .filter_map(|segment| segment.parse::<i64>().ok())
        .fold(0, |acc, segment| {
            acc.wrapping_mul(MULTIPLICATION_FACTOR).wrapping_add(segment)
        })
}
