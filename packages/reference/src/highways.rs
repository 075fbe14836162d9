//! Route number to road class table.
//!
//! Maps the bare route numbers found in the target area to their road
//! classification. Numbers are kept as strings because they may carry a
//! letter suffix in raw data; lookups happen after that suffix handling.

/// Road class for County Roads.
pub const COUNTY_ROAD: &str = "County Road";
/// Road class for Farm-to-Market roads.
pub const FM_ROAD: &str = "FM Road";
/// Road class for Interstate Highways.
pub const INTERSTATE: &str = "Interstate Highway";
/// Road class for Texas state highways.
pub const TX_HIGHWAY: &str = "TX Highway";
/// Road class for US Highways.
pub const US_HIGHWAY: &str = "US Highway";

/// Maps a bare route number to its canonical road class.
///
/// Returns `None` for numbers with no known route in the area.
#[must_use]
pub fn highway_class(number: &str) -> Option<&'static str> {
    match number {
        "12" | "288" | "820" => Some("TX Highway Loop"),
        "20" | "30" | "35" | "45" => Some(INTERSTATE),
        "23" | "206" | "234" | "376" | "526" | "549" | "615" | "707" | "983" | "1043" => {
            Some(COUNTY_ROAD)
        }
        "26" | "34" | "66" | "78" | "114" | "121" | "161" | "183" | "199" | "342" | "356"
        | "360" => Some(TX_HIGHWAY),
        "67" | "77" | "80" | "81" | "175" | "287" | "377" | "380" => Some(US_HIGHWAY),
        "157" | "407" | "423" | "544" | "664" | "730" | "741" | "1138" | "1187" | "1382"
        | "1565" | "1603" | "1902" | "2181" | "3040" => Some(FM_ROAD),
        "408" => Some("TX Highway Spur"),
        _ => None,
    }
}
