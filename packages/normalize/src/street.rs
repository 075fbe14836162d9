//! Street name decomposition, component normalization, and cleaning.
//!
//! A raw street name is threaded through an ordered list of extraction
//! stages, each peeling one semantic component off the residue and
//! normalizing it against the reference tables. The surviving residue is
//! the core name; [`DecomposedStreet::reassemble`] recombines everything
//! into the canonical form.

use addr_lint_models::DecomposedStreet;
use addr_lint_reference::{highways, points, streets};

use crate::patterns;
use crate::resolve::resolve_expected;

/// Intermediate state threaded through the extraction stages.
#[derive(Debug, Default)]
struct Decomposition {
    rest: String,
    building: Option<String>,
    number: Option<String>,
    leading_point: Option<String>,
    trailing_point: Option<String>,
}

type Stage = fn(Decomposition) -> Decomposition;

/// The extraction stages in their load-bearing order. Each stage
/// operates on the residue left by the previous one: the building
/// phrase goes before the street number so the phrase identifier is
/// never read as a number, the number goes before the leading point,
/// and both points go before the highway and street-type rewrites.
const STAGES: &[Stage] = &[
    normalize_characters,
    extract_building,
    extract_number,
    extract_leading_point,
    extract_trailing_point,
    rewrite_highway,
    rewrite_street_type,
];

/// Decomposes a raw street name into its semantic components.
#[must_use]
pub fn decompose(raw: &str) -> DecomposedStreet {
    let mut state = Decomposition {
        rest: raw.to_string(),
        ..Decomposition::default()
    };
    for stage in STAGES {
        state = stage(state);
    }
    DecomposedStreet {
        core: state.rest,
        building: state.building,
        number: state.number,
        leading_point: state.leading_point,
        trailing_point: state.trailing_point,
    }
}

/// Cleans a raw street name into its canonical form.
#[must_use]
pub fn clean(raw: &str) -> String {
    decompose(raw).reassemble()
}

/// Title-cases the name, repairs possessive and ordinal casing, strips
/// commas, and truncates at the first semicolon.
fn normalize_characters(mut d: Decomposition) -> Decomposition {
    let mut name = patterns::title_case(&d.rest);
    name = name.replace("'S ", "'s ");
    if let Some(ordinal) = patterns::ordinal_raw(&name).map(str::to_string) {
        name = name.replace(&ordinal, &ordinal.to_lowercase());
    }
    name = name.replace(',', "");
    if let Some(pos) = name.find(';') {
        name.truncate(pos);
    }
    d.rest = name.trim().to_string();
    d
}

/// Extracts the building/suite phrase and normalizes its spelling.
///
/// The name is truncated at the phrase, matching the source data where
/// a suite designator is always the last component.
fn extract_building(mut d: Decomposition) -> Decomposition {
    let Some(phrase) = patterns::building_phrase(&d.rest).map(str::to_string) else {
        return d;
    };
    let Some(pos) = d.rest.find(&phrase) else {
        return d;
    };
    d.rest.truncate(pos);
    d.rest = d.rest.trim().to_string();

    let mut designator = phrase.replace('.', "");
    designator = designator.replace("Ste", "Suite");
    designator = designator.replace("# ", "#");
    designator = designator.replace('#', "No.");
    d.building = Some(designator);
    d
}

/// Extracts the leading street number.
fn extract_number(mut d: Decomposition) -> Decomposition {
    let Some(number) = patterns::leading_number(&d.rest).map(str::to_string) else {
        return d;
    };
    d.rest = d.rest[number.len()..].trim_start().to_string();
    d.number = Some(number);
    d
}

/// Extracts a canonical directional point from the front of the name.
fn extract_leading_point(mut d: Decomposition) -> Decomposition {
    let Some(word) = patterns::first_word(&d.rest).map(str::to_string) else {
        return d;
    };
    if let Some(point) = resolve_expected(&word, points::EXPECTED_POINTS, points::point_expansion) {
        d.rest = d.rest[word.len()..].trim_start().to_string();
        d.leading_point = Some(point.to_string());
    }
    d
}

/// Extracts a canonical directional point from the end of the name.
///
/// A point following the literal word "Avenue" is part of the avenue's
/// name ("Avenue N"), not a directional suffix, and stays in place.
fn extract_trailing_point(mut d: Decomposition) -> Decomposition {
    let Some(word) = patterns::final_word(&d.rest).map(str::to_string) else {
        return d;
    };
    if d.rest.contains(&format!("Avenue {word}")) {
        return d;
    }
    if let Some(point) = resolve_expected(&word, points::EXPECTED_POINTS, points::point_expansion) {
        let cut = d.rest.len() - word.len();
        d.rest.truncate(cut);
        d.rest = d.rest.trim_end().to_string();
        d.trailing_point = Some(point.to_string());
    }
    d
}

/// Rewrites a highway designator in the core to its canonical road
/// class.
fn rewrite_highway(mut d: Decomposition) -> Decomposition {
    let Some(token) = patterns::highway_token(&d.rest).map(str::to_string) else {
        return reclaim_leading_number(d);
    };
    let mut number = token.replace('-', "");
    if number == "35" && d.rest.contains("35 W") {
        d.rest = d.rest.replace("35 W", "35 West");
    }
    if number == "35W" {
        number = "35".to_string();
        d.rest = d.rest.replace("35W", "35 West");
    }
    let Some(class) = highways::highway_class(&number) else {
        return d;
    };
    if let Some(pos) = d.rest.find(&number) {
        // Relocate a "Business" qualifier from before the number to the
        // end of the rewritten core.
        let business = if d.rest[..pos].contains("Business") {
            " Business"
        } else {
            ""
        };
        d.rest = format!("{class} {}{business}", &d.rest[pos..]);
    }
    d
}

/// Reclaims a leading street number that is really a highway designator.
///
/// Fires only when the number resolves in the highway table and the
/// residual core re-states the road class in some wrong form ("1187
/// Farm Road") or is a bare "Business" qualifier ("287 Business").
/// Ordinary addresses that happen to start with a route number ("35 Oak
/// Lane") share no class word and are left alone.
fn reclaim_leading_number(mut d: Decomposition) -> Decomposition {
    let Some(number) = d.number.as_ref().map(|n| n.replace('-', "")) else {
        return d;
    };
    let Some(class) = highways::highway_class(&number) else {
        return d;
    };
    let class_words: Vec<String> = class.split_whitespace().map(str::to_lowercase).collect();
    let business = d.rest.split_whitespace().any(|w| w == "Business");
    let shares_class_word = d
        .rest
        .split_whitespace()
        .any(|w| class_words.contains(&w.to_lowercase()));
    if !shares_class_word && !business {
        return d;
    }
    let suffix = if business { " Business" } else { "" };
    d.rest = format!("{class} {number}{suffix}");
    d.number = None;
    d
}

/// Replaces the trailing token with its canonical street type.
fn rewrite_street_type(mut d: Decomposition) -> Decomposition {
    let Some(word) = patterns::final_word(&d.rest).map(str::to_string) else {
        return d;
    };
    if let Some(canonical) = resolve_expected(
        &word,
        streets::EXPECTED_STREET_TYPES,
        streets::street_type_expansion,
    ) {
        let cut = d.rest.len() - word.len();
        d.rest.truncate(cut);
        d.rest.push_str(canonical);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_full_street_name() {
        let street = decompose("7604 South Dobson Street Suite 201");
        assert_eq!(street.number.as_deref(), Some("7604"));
        assert_eq!(street.leading_point.as_deref(), Some("South"));
        assert_eq!(street.core, "Dobson Street");
        assert_eq!(street.trailing_point, None);
        assert_eq!(street.building.as_deref(), Some("Suite 201"));
        assert_eq!(street.reassemble(), "7604 South Dobson Street Suite 201");
    }

    #[test]
    fn cleaning_canonical_names_is_idempotent() {
        for name in [
            "7604 South Dobson Street Suite 201",
            "Dobson Street",
            "Interstate Highway 35 West",
            "FM Road 1187",
            "1300 Avenue N",
            "Chisholm Trail Parkway",
        ] {
            assert_eq!(clean(name), name, "not idempotent: {name}");
        }
    }

    #[test]
    fn expands_abbreviated_components() {
        assert_eq!(clean("7604 S Dobson St"), "7604 South Dobson Street");
        assert_eq!(clean("123 Main Blvd"), "123 Main Boulevard");
    }

    #[test]
    fn extracts_trailing_point() {
        let street = decompose("Dobson Road SW");
        assert_eq!(street.trailing_point.as_deref(), Some("Southwest"));
        assert_eq!(street.core, "Dobson Road");
    }

    #[test]
    fn avenue_letter_is_not_a_trailing_point() {
        let street = decompose("1300 Avenue N");
        assert_eq!(street.trailing_point, None);
        assert_eq!(street.core, "Avenue N");
    }

    #[test]
    fn repairs_possessive_and_ordinal_casing() {
        assert_eq!(clean("st helen's circle"), "St Helen's Circle");
        let cleaned = clean("5Th Street");
        assert!(cleaned.contains("5th"), "bad ordinal casing: {cleaned}");
        assert!(!cleaned.contains("5Th"));
    }

    #[test]
    fn strips_commas_and_truncates_at_semicolon() {
        assert_eq!(clean("Main Street, Suite 100; Rear"), "Main Street Suite 100");
    }

    #[test]
    fn normalizes_building_designators() {
        assert_eq!(clean("123 Main St Ste 4"), "123 Main Street Suite 4");
        assert_eq!(clean("123 Main St # 5"), "123 Main Street No.5");
        assert_eq!(clean("123 Main St #5"), "123 Main Street No.5");
    }

    #[test]
    fn rewrites_highway_designators() {
        assert_eq!(clean("FM 1187"), "FM Road 1187");
        assert_eq!(clean("Hwy 377"), "US Highway 377");
    }

    #[test]
    fn reclaims_misplaced_highway_number() {
        assert_eq!(clean("1187 Farm Road"), "FM Road 1187");
    }

    #[test]
    fn keeps_ordinary_leading_route_numbers() {
        assert_eq!(clean("35 Oak Lane"), "35 Oak Lane");
    }

    #[test]
    fn relocates_business_qualifier() {
        assert_eq!(clean("Business 287"), "US Highway 287 Business");
    }

    #[test]
    fn rewrites_35w_to_35_west() {
        let cleaned = clean("I-35W");
        assert_eq!(cleaned, "Interstate Highway 35 West");
        assert!(cleaned.contains("35 West"));
    }

    #[test]
    fn rewrites_35_space_w() {
        assert_eq!(clean("Interstate 35 W"), "Interstate Highway 35 West");
    }

    #[test]
    fn unresolvable_tokens_stay_in_the_core() {
        let street = decompose("Dobson Xy");
        assert_eq!(street.core, "Dobson Xy");
        assert_eq!(street.trailing_point, None);
    }
}
