//! Token resolution against the reference vocabulary.

use crate::patterns;

/// Resolves a raw token to its canonical form.
///
/// The token is stripped of surrounding periods and title-cased; an
/// exact hit in `expected` wins. Otherwise the lower-cased form is
/// looked up through `expansion`. Returns `None` when the token maps to
/// nothing.
pub(crate) fn resolve_expected(
    token: &str,
    expected: &[&'static str],
    expansion: impl Fn(&str) -> Option<&'static str>,
) -> Option<&'static str> {
    let titled = patterns::title_case(token.trim_matches('.'));
    if let Some(hit) = expected.iter().copied().find(|e| *e == titled) {
        return Some(hit);
    }
    expansion(&titled.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use addr_lint_reference::{points, streets};

    #[test]
    fn exact_canonical_match_wins() {
        assert_eq!(
            resolve_expected("South", points::EXPECTED_POINTS, points::point_expansion),
            Some("South")
        );
    }

    #[test]
    fn falls_back_to_expansion() {
        assert_eq!(
            resolve_expected("S", points::EXPECTED_POINTS, points::point_expansion),
            Some("South")
        );
        assert_eq!(
            resolve_expected(
                "St.",
                streets::EXPECTED_STREET_TYPES,
                streets::street_type_expansion
            ),
            Some("Street")
        );
    }

    #[test]
    fn case_is_normalized_before_lookup() {
        assert_eq!(
            resolve_expected("sOuTh", points::EXPECTED_POINTS, points::point_expansion),
            Some("South")
        );
        assert_eq!(
            resolve_expected("BLVD", streets::EXPECTED_STREET_TYPES, streets::street_type_expansion),
            Some("Boulevard")
        );
    }

    #[test]
    fn unresolvable_tokens_return_none() {
        assert_eq!(
            resolve_expected("Dobson", points::EXPECTED_POINTS, points::point_expansion),
            None
        );
    }
}
