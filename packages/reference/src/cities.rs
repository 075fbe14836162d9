//! City name synonyms and state vocabulary.

/// Title-cased state abbreviation as it appears inside city values.
pub const STATE_ABBREVIATION: &str = "Tx";

/// Full state name.
pub const STATE_NAME: &str = "Texas";

/// City name fragments that must be rewritten to their canonical form.
///
/// Keys are title-cased exactly as they appear after title-casing raw
/// values; expansion is applied as a substring replacement. Keys are
/// chosen so they never overlap, making replacement order irrelevant.
pub const CITY_SYNONYMS: &[(&str, &str)] = &[
    ("Burleson", "Crowley"),
    ("Dfw", "Fort Worth"),
    ("Ft", "Fort"),
    ("Joshua", "Alvarado"),
];

/// Maps a title-cased city fragment to its canonical expansion.
///
/// Returns `None` for fragments with no configured synonym.
#[must_use]
pub fn city_expansion(fragment: &str) -> Option<&'static str> {
    CITY_SYNONYMS
        .iter()
        .find(|(abbr, _)| *abbr == fragment)
        .map(|(_, canonical)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_synonyms() {
        assert_eq!(city_expansion("Burleson"), Some("Crowley"));
        assert_eq!(city_expansion("Dfw"), Some("Fort Worth"));
        assert_eq!(city_expansion("Ft"), Some("Fort"));
        assert_eq!(city_expansion("Joshua"), Some("Alvarado"));
    }

    #[test]
    fn unknown_fragments() {
        assert_eq!(city_expansion("Crowley"), None);
        assert_eq!(city_expansion("burleson"), None);
    }

    #[test]
    fn keys_do_not_overlap() {
        for (abbr, _) in CITY_SYNONYMS {
            let occurrences = CITY_SYNONYMS
                .iter()
                .filter(|(other, expansion)| other.contains(abbr) || expansion.contains(abbr))
                .count();
            assert_eq!(occurrences, 1, "overlapping synonym key: {abbr}");
        }
    }
}
