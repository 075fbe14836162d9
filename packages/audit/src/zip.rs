//! Postal code validation.

use addr_lint_models::{ProblemCategory, ProblemReport};
use addr_lint_reference::postal;

/// Audits a postal code for format and region problems.
///
/// The three checks are independent and all run even when an earlier
/// one has already flagged the value.
#[must_use]
pub fn audit_zip(code: &str) -> ProblemReport {
    let mut report = ProblemReport::new();
    if !code.chars().all(|c| c.is_ascii_digit()) {
        report.record(ProblemCategory::Zipcodes, "non-digit", code);
    }
    if code.chars().count() != 5 {
        report.record(ProblemCategory::Zipcodes, "non 5-digit", code);
    }
    if !postal::in_region(code) {
        report.record(ProblemCategory::Zipcodes, "non-region", code);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zip_keys(report: &ProblemReport) -> Vec<String> {
        report
            .category(ProblemCategory::Zipcodes)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn regional_codes_pass() {
        assert!(audit_zip("76028").is_empty());
    }

    #[test]
    fn flags_out_of_region_codes() {
        assert_eq!(zip_keys(&audit_zip("12345")), vec!["non-region"]);
        assert_eq!(zip_keys(&audit_zip("75052")), vec!["non-region"]);
    }

    #[test]
    fn flags_short_codes() {
        assert_eq!(zip_keys(&audit_zip("7601")), vec!["non 5-digit"]);
    }

    #[test]
    fn flags_non_digit_characters() {
        assert_eq!(zip_keys(&audit_zip("760a8")), vec!["non-digit"]);
    }

    #[test]
    fn all_checks_run_independently() {
        let report = audit_zip("TX 760");
        let keys = zip_keys(&report);
        assert!(keys.contains(&"non-digit".to_string()));
        assert!(keys.contains(&"non 5-digit".to_string()));
        assert!(keys.contains(&"non-region".to_string()));
    }
}
