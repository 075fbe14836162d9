//! Street name validation.

use addr_lint_models::{ProblemCategory, ProblemReport};
use addr_lint_normalize::patterns;
use addr_lint_reference::{highways, streets};

/// Audits a street name for problem indicators.
///
/// The five checks are independent; a single name may trip several of
/// them. Returns the findings as a delta report.
#[must_use]
pub fn audit_street(name: &str) -> ProblemReport {
    let mut report = ProblemReport::new();
    check_characters(name, &mut report);
    check_building_number(name, &mut report);
    check_point(name, &mut report);
    check_street_type(name, &mut report);
    check_highway(name, &mut report);
    report
}

/// Flags possessive `'S`, commas, semicolons, and ordinal numbers with
/// upper-case letters.
fn check_characters(name: &str, report: &mut ProblemReport) {
    if name.contains("'S") {
        report.record(ProblemCategory::Characters, "'S", name);
    }
    if name.contains(',') {
        report.record(ProblemCategory::Characters, ",", name);
    }
    if name.contains(';') {
        report.record(ProblemCategory::Characters, ";", name);
    }
    if let Some(ordinal) = patterns::ordinal_token(name) {
        if ordinal.chars().any(char::is_uppercase) {
            report.record(ProblemCategory::Characters, ordinal, name);
        }
    }
}

/// Flags building/suite keywords outside the expected designator set.
fn check_building_number(name: &str, report: &mut ProblemReport) {
    if let Some(keyword) = patterns::building_keyword(name) {
        let keyword = keyword.trim_matches('.');
        if !streets::EXPECTED_BUILDING_NUMBER_TYPES.contains(&keyword) {
            report.record(ProblemCategory::BuildingNumbers, keyword, name);
        }
    }
}

/// Flags abbreviated directional tokens left in the name.
fn check_point(name: &str, report: &mut ProblemReport) {
    if let Some(point) = patterns::point_token(name) {
        report.record(ProblemCategory::Points, point, name);
    }
}

/// Flags names whose trailing segment matches no expected street type.
fn check_street_type(name: &str, report: &mut ProblemReport) {
    if streets::has_expected_street_type(name) {
        return;
    }
    let segment = name.rfind(' ').map_or(name, |pos| &name[pos + 1..]);
    report.record(ProblemCategory::StreetTypes, segment, name);
}

/// Flags numeric tokens with no or inconsistent highway mapping.
///
/// Names containing the literal `Suite` are exempt: business suite
/// numbers double as false highway matches. The exemption deliberately
/// stays this narrow (`Ste`, `Building`, and `#` designators are NOT
/// exempt).
fn check_highway(name: &str, report: &mut ProblemReport) {
    if let Some(token) = patterns::highway_token(name) {
        let number = token.trim_matches('.');
        let consistent =
            highways::highway_class(number).is_some_and(|class| name.contains(class));
        if !consistent && !name.contains("Suite") {
            report.record(ProblemCategory::Highways, number, name);
        }
    }
}
