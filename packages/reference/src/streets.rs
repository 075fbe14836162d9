//! Street type and building designator vocabulary.

/// Canonical street types observed in the target area.
pub const EXPECTED_STREET_TYPES: &[&str] = &[
    "Alley",
    "Avenue",
    "Bay",
    "Boulevard",
    "Central",
    "Circle",
    "Court",
    "Cove",
    "Crest",
    "Crossing",
    "Drive",
    "Expressway",
    "Extension",
    "Freeway",
    "Glen",
    "Highway",
    "Inlet",
    "Landing",
    "Lane",
    "Loop",
    "Mews",
    "Park",
    "Parkway",
    "Pass",
    "Path",
    "Place",
    "Plaza",
    "Point",
    "Ridge",
    "Road",
    "Row",
    "Run",
    "Street",
    "Square",
    "Terrace",
    "Tollway",
    "Trace",
    "Trail",
    "Vista",
    "Way",
    "Walk",
];

/// Canonical building/suite designator keywords.
pub const EXPECTED_BUILDING_NUMBER_TYPES: &[&str] = &["Suite", "No", "Building"];

/// Returns `true` if any expected street type occurs as a substring of
/// the given name.
#[must_use]
pub fn has_expected_street_type(name: &str) -> bool {
    EXPECTED_STREET_TYPES.iter().any(|t| name.contains(t))
}

/// Maps a lower-cased street type abbreviation (or common misspelling)
/// to its canonical form.
///
/// Returns `None` for unrecognized tokens.
#[must_use]
pub fn street_type_expansion(abbr: &str) -> Option<&'static str> {
    match abbr {
        "56th" => Some("56th Street"),
        "av" | "ave" => Some("Avenue"),
        "blvd" => Some("Boulevard"),
        "bus" => Some("Business"),
        "cir" => Some("Circle"),
        "ct" => Some("Court"),
        "dr" => Some("Drive"),
        "expy" | "expessway" | "exressway" => Some("Expressway"),
        "frontage" => Some("Frontage Road"),
        "fwy" => Some("Freeway"),
        "hwy" => Some("Highway"),
        "ln" => Some("Lane"),
        "pkwy" => Some("Parkway"),
        "rd" => Some("Road"),
        "st" => Some("Street"),
        "trl" => Some("Trail"),
        _ => None,
    }
}
