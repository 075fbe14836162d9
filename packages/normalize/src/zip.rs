//! Postal code cleaning.

use crate::patterns;

/// Extracts the postal code from a raw value.
///
/// Returns the first five-digit substring in the regional range,
/// verbatim, or `None` when the value holds nothing postal-code-shaped.
#[must_use]
pub fn clean(code: &str) -> Option<String> {
    patterns::zip_candidate(code).map(str::to_string)
}
