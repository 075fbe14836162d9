//! City name validation.

use addr_lint_models::{ProblemCategory, ProblemReport};
use addr_lint_reference::cities;

/// Audits a city name for state inclusion, stray characters, and
/// non-canonical synonyms.
#[must_use]
pub fn audit_city(name: &str) -> ProblemReport {
    let mut report = ProblemReport::new();
    let lower = name.to_lowercase();

    if lower.contains(&cities::STATE_ABBREVIATION.to_lowercase())
        || lower.contains(&cities::STATE_NAME.to_lowercase())
    {
        report.record(ProblemCategory::Cities, "include state", name);
    } else if !lower.replace(' ', "").chars().all(char::is_alphabetic) {
        report.record(ProblemCategory::Cities, "non-alphabet", name);
    }

    for (abbr, canonical) in cities::CITY_SYNONYMS {
        if lower.contains(&abbr.to_lowercase()) && !name.contains(canonical) {
            report.record(ProblemCategory::Cities, "problem names", name);
        }
    }
    report
}
