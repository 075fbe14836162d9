#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Field validators and audit runners.
//!
//! Each validator inspects one field value for problem indicators and
//! returns a delta [`ProblemReport`]; the runners merge deltas across a
//! record sequence by set union. Validators never fail: an unresolvable
//! abbreviation or unmapped highway number is a finding, not an error.

pub mod city;
pub mod street;
pub mod zip;

use addr_lint_models::{FieldKind, ProblemReport, RawField};

pub use city::audit_city;
pub use street::audit_street;
pub use zip::audit_zip;

/// Audits every record as-is and merges the findings.
pub fn audit<I>(records: I) -> ProblemReport
where
    I: IntoIterator<Item = RawField>,
{
    let mut report = ProblemReport::new();
    let mut total = 0_u64;
    for record in records {
        total += 1;
        let delta = match record.kind {
            FieldKind::StreetName => audit_street(&record.value),
            FieldKind::CityName => audit_city(&record.value),
            FieldKind::PostalCode => audit_zip(&record.value),
        };
        report.merge(delta);
    }
    log::debug!(
        "Audited {total} fields, {} distinct problem values",
        report.total_values()
    );
    report
}

/// Cleans every record, then audits the cleaned value.
///
/// Street names are decomposed and reassembled before auditing. City
/// names and postal codes run through their cleaners first; a rejected
/// value (no usable result) is skipped rather than audited.
pub fn clean_and_audit<I>(records: I) -> ProblemReport
where
    I: IntoIterator<Item = RawField>,
{
    let mut report = ProblemReport::new();
    let mut total = 0_u64;
    let mut rejected = 0_u64;
    for record in records {
        total += 1;
        let delta = match record.kind {
            FieldKind::StreetName => {
                let cleaned = addr_lint_normalize::street::clean(&record.value);
                audit_street(&cleaned)
            }
            FieldKind::CityName => match addr_lint_normalize::city::clean(&record.value) {
                Some(cleaned) => audit_city(&cleaned),
                None => {
                    rejected += 1;
                    continue;
                }
            },
            FieldKind::PostalCode => match addr_lint_normalize::zip::clean(&record.value) {
                Some(cleaned) => audit_zip(&cleaned),
                None => {
                    rejected += 1;
                    continue;
                }
            },
        };
        report.merge(delta);
    }
    log::debug!(
        "Cleaned and audited {total} fields ({rejected} rejected), {} distinct problem values",
        report.total_values()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use addr_lint_models::ProblemCategory;

    fn street(value: &str) -> RawField {
        RawField::new(FieldKind::StreetName, value)
    }

    #[test]
    fn audits_mixed_record_kinds() {
        let records = vec![
            street("Dobson St"),
            RawField::new(FieldKind::CityName, "Burleson"),
            RawField::new(FieldKind::PostalCode, "7601"),
        ];
        let report = audit(records);
        assert!(report.category(ProblemCategory::StreetTypes).is_some());
        assert!(report.category(ProblemCategory::Cities).is_some());
        assert!(report.category(ProblemCategory::Zipcodes).is_some());
    }

    #[test]
    fn duplicate_records_collapse() {
        let records = vec![street("Dobson St"), street("Dobson St")];
        let report = audit(records);
        assert_eq!(report.total_values(), 1);
    }

    #[test]
    fn cleaning_resolves_abbreviations_before_audit() {
        let records = vec![street("7604 S Dobson St")];
        let report = clean_and_audit(records);
        assert!(report.is_empty(), "unexpected findings: {report:?}");
    }

    #[test]
    fn rejected_values_are_skipped() {
        let records = vec![
            RawField::new(FieldKind::CityName, "Crowley 76036"),
            RawField::new(FieldKind::PostalCode, "unknown"),
        ];
        let report = clean_and_audit(records);
        assert!(report.is_empty());
    }

    #[test]
    fn cleaned_zip_loses_surrounding_noise() {
        let records = vec![RawField::new(FieldKind::PostalCode, "TX 76028")];
        let report = clean_and_audit(records);
        assert!(report.is_empty());
    }
}
