//! Directional point vocabulary.

/// Canonical cardinal and intercardinal points used as street name
/// prefixes and suffixes.
pub const EXPECTED_POINTS: &[&str] = &[
    "North",
    "Northeast",
    "East",
    "Southeast",
    "South",
    "Southwest",
    "West",
    "Northwest",
];

/// Maps a lower-cased directional abbreviation to its canonical point.
///
/// Returns `None` for unrecognized tokens.
#[must_use]
pub fn point_expansion(abbr: &str) -> Option<&'static str> {
    match abbr {
        "n" => Some("North"),
        "ne" => Some("Northeast"),
        "e" => Some("East"),
        "se" => Some("Southeast"),
        "s" => Some("South"),
        "sw" => Some("Southwest"),
        "w" => Some("West"),
        "nw" => Some("Northwest"),
        _ => None,
    }
}

/// Returns `true` if the token is a canonical point spelling.
#[must_use]
pub fn is_expected_point(token: &str) -> bool {
    EXPECTED_POINTS.contains(&token)
}
