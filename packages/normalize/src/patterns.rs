//! Text pattern recognizers for address fields.
//!
//! Each matcher locates the first substring of interest within a raw
//! value and returns it as a trimmed token, or `None` when the pattern
//! does not occur. Matchers carry no table knowledge; resolving a token
//! against the reference vocabulary happens in the callers.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a leading street number: digits, an optional single
/// trailing letter, then whitespace, anchored at the start.
static STREET_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\w?\s").expect("valid regex"));

/// Regex for the first whitespace-delimited token.
static STARTING_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+").expect("valid regex"));

/// Regex for the final whitespace-delimited token.
static ENDING_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+$").expect("valid regex"));

/// Regex for an embedded building/suite phrase with its identifier
/// (e.g., " Suite 201", " #12-B").
static BUILDING_PHRASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s(ste\s|suite\s|building\s|#\s?)\w+-?\d*").expect("valid regex"));

/// Regex for a building/suite keyword alone, used for classification.
static BUILDING_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s(ste\s|suite\s|building\s|#\s?|no\.)").expect("valid regex"));

/// Regex for an embedded numeric token that may be a highway number,
/// bounded by whitespace or a hyphen.
static HIGHWAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\s|-)\d+\w?(\s|$)").expect("valid regex"));

/// Regex for an ordinal number token (1st, 22nd, 3rd, 14th), optionally
/// period-terminated.
static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)\d+(st|nd|rd|th)\.?(\s|$)").expect("valid regex"));

/// Regex for a standalone directional token. Two-letter intercardinals
/// come first so the leftmost-first alternation prefers them.
static POINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)(SE|SW|NW|NE|[SWNE])\.?(\s|$)").expect("valid regex"));

/// Regex for a postal code candidate in the 75000-76999 range.
static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"7[56]\d{3}").expect("valid regex"));

/// Returns the leading street number token, without its trailing
/// whitespace.
#[must_use]
pub fn leading_number(s: &str) -> Option<&str> {
    STREET_NUMBER_RE.find(s).map(|m| m.as_str().trim_end())
}

/// Returns the first whitespace-delimited token.
#[must_use]
pub fn first_word(s: &str) -> Option<&str> {
    STARTING_WORD_RE.find(s).map(|m| m.as_str())
}

/// Returns the final whitespace-delimited token.
#[must_use]
pub fn final_word(s: &str) -> Option<&str> {
    ENDING_WORD_RE.find(s).map(|m| m.as_str())
}

/// Returns the first building/suite phrase including its identifier
/// (e.g., `"Suite 201"`).
#[must_use]
pub fn building_phrase(s: &str) -> Option<&str> {
    BUILDING_PHRASE_RE.find(s).map(|m| m.as_str().trim())
}

/// Returns the first building/suite keyword (e.g., `"Suite"`, `"#"`,
/// `"No."`).
#[must_use]
pub fn building_keyword(s: &str) -> Option<&str> {
    BUILDING_KEYWORD_RE.find(s).map(|m| m.as_str().trim())
}

/// Returns the first highway-candidate numeric token. A leading hyphen
/// from the boundary is retained (`"-35"` for `"I-35"`).
#[must_use]
pub fn highway_token(s: &str) -> Option<&str> {
    HIGHWAY_RE.find(s).map(|m| m.as_str().trim())
}

/// Returns the first ordinal number token, whitespace trimmed.
#[must_use]
pub fn ordinal_token(s: &str) -> Option<&str> {
    ORDINAL_RE.find(s).map(|m| m.as_str().trim())
}

/// Returns the first ordinal number match with its whitespace
/// boundaries intact, for in-place rewriting.
pub(crate) fn ordinal_raw(s: &str) -> Option<&str> {
    ORDINAL_RE.find(s).map(|m| m.as_str())
}

/// Returns the first standalone directional token, whitespace trimmed.
#[must_use]
pub fn point_token(s: &str) -> Option<&str> {
    POINT_RE.find(s).map(|m| m.as_str().trim())
}

/// Returns the first postal-code-shaped substring (five digits starting
/// with the 75/76 region prefixes).
#[must_use]
pub fn zip_candidate(s: &str) -> Option<&str> {
    ZIP_RE.find(s).map(|m| m.as_str())
}

/// Title-cases a string: a letter is uppercased when not preceded by
/// another letter and lowercased otherwise.
///
/// Letters after digits or apostrophes count as word starts, so
/// `"5th"` becomes `"5Th"` and `"o'neil"` becomes `"O'Neil"`; the
/// street pipeline repairs both patterns in a later step.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_leading_number() {
        assert_eq!(leading_number("7604 Dobson Street"), Some("7604"));
        assert_eq!(leading_number("100b Main Street"), Some("100b"));
        assert_eq!(leading_number("Main Street"), None);
    }

    #[test]
    fn leading_number_needs_following_space() {
        assert_eq!(leading_number("7604"), None);
        assert_eq!(leading_number("5th Street"), None);
    }

    #[test]
    fn finds_first_and_final_words() {
        assert_eq!(first_word("South Dobson Street"), Some("South"));
        assert_eq!(final_word("South Dobson St."), Some("St."));
        assert_eq!(first_word(""), None);
        assert_eq!(final_word("trailing space "), None);
    }

    #[test]
    fn finds_building_phrase() {
        assert_eq!(building_phrase("Dobson Street Suite 201"), Some("Suite 201"));
        assert_eq!(building_phrase("Dobson Street Ste 12-4"), Some("Ste 12-4"));
        assert_eq!(building_phrase("Dobson Street #12"), Some("#12"));
        assert_eq!(building_phrase("Dobson Street"), None);
    }

    #[test]
    fn finds_building_keyword() {
        assert_eq!(building_keyword("Dobson Street Suite 201"), Some("Suite"));
        assert_eq!(building_keyword("Dobson Street No.5"), Some("No."));
        assert_eq!(building_keyword("Dobson Street"), None);
    }

    #[test]
    fn finds_highway_token() {
        assert_eq!(highway_token("Fm 1187"), Some("1187"));
        assert_eq!(highway_token("I-35 North"), Some("-35"));
        assert_eq!(highway_token("Tx 121 Frontage"), Some("121"));
        assert_eq!(highway_token("1187 at start"), None);
    }

    #[test]
    fn finds_ordinal_token() {
        assert_eq!(ordinal_token("5Th Street"), Some("5Th"));
        assert_eq!(ordinal_token("East 22nd Street"), Some("22nd"));
        assert_eq!(ordinal_token("56 Street"), None);
    }

    #[test]
    fn finds_point_token() {
        assert_eq!(point_token("Main Street N"), Some("N"));
        assert_eq!(point_token("SW Loop 820"), Some("SW"));
        assert_eq!(point_token("Main Street N."), Some("N."));
        assert_eq!(point_token("South Dobson Street"), None);
    }

    #[test]
    fn prefers_two_letter_points() {
        assert_eq!(point_token("Dobson SW"), Some("SW"));
    }

    #[test]
    fn finds_zip_candidate() {
        assert_eq!(zip_candidate("76028"), Some("76028"));
        assert_eq!(zip_candidate("The zip is 76028 here"), Some("76028"));
        assert_eq!(zip_candidate("75052-1234"), Some("75052"));
        assert_eq!(zip_candidate("12345"), None);
    }

    #[test]
    fn title_cases_words() {
        assert_eq!(title_case("dobson street"), "Dobson Street");
        assert_eq!(title_case("FM 1187"), "Fm 1187");
    }

    #[test]
    fn title_case_treats_digits_and_apostrophes_as_word_starts() {
        assert_eq!(title_case("5th street"), "5Th Street");
        assert_eq!(title_case("smith's house"), "Smith'S House");
    }
}
