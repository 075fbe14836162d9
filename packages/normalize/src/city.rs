//! City name cleaning.

use addr_lint_reference::cities;

use crate::patterns;

/// Cleans a raw city name into its canonical form.
///
/// Title-cases the value, truncates at the first comma, strips periods
/// and the state name, and applies every configured city synonym as a
/// substring replacement. Returns `None` when a digit survives
/// cleaning: the value is unusable, not empty.
#[must_use]
pub fn clean(name: &str) -> Option<String> {
    let mut city = patterns::title_case(name);
    if let Some(pos) = city.find(',') {
        city.truncate(pos);
    }
    city = city.replace('.', "");
    city = city.replace(cities::STATE_ABBREVIATION, "");
    city = city.replace(cities::STATE_NAME, "");
    for (abbr, canonical) in cities::CITY_SYNONYMS {
        if city.contains(abbr) {
            city = city.replace(abbr, canonical);
        }
    }
    if city.chars().any(char::is_numeric) {
        return None;
    }
    Some(city.trim().to_string())
}
