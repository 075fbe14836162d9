#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Value types shared across the addr-lint toolchain.
//!
//! This crate defines the field taxonomy, the structured result of street
//! name decomposition, and the categorized problem report that every audit
//! produces. All types are plain immutable values; records carry no
//! identity and reports are merged by set union.

pub mod report;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use report::{ProblemCategory, ProblemReport};

/// The kind of address field a raw value was read from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    /// A street name (`addr:street`).
    StreetName,
    /// A city name (`addr:city`).
    CityName,
    /// A postal code (`addr:postcode`).
    PostalCode,
}

/// One raw attribute value read from the dataset, tagged with its field
/// kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    /// Which address field this value was read from.
    pub kind: FieldKind,
    /// The raw, unprocessed value.
    pub value: String,
}

impl RawField {
    /// Creates a raw field from a kind and value.
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// The semantic components of a street name, produced by the
/// decomposition pipeline.
///
/// Reassembling the present components in the fixed order `number`,
/// `leading_point`, `core`, `trailing_point`, `building` reproduces a
/// canonical street name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedStreet {
    /// The residual street name once every other component has been
    /// stripped and normalized (e.g. `"Dobson Street"`).
    pub core: String,
    /// Building/suite designator (e.g. `"Suite 201"`, `"No.5"`).
    pub building: Option<String>,
    /// Leading street number (e.g. `"7604"`).
    pub number: Option<String>,
    /// Canonical directional prefix (e.g. `"South"`).
    pub leading_point: Option<String>,
    /// Canonical directional suffix (e.g. `"West"`).
    pub trailing_point: Option<String>,
}

impl DecomposedStreet {
    /// Recombines the components into a single canonical street name.
    ///
    /// Present components are joined with single spaces in the fixed
    /// order `number`, `leading_point`, `core`, `trailing_point`,
    /// `building`; absent components are omitted.
    #[must_use]
    pub fn reassemble(&self) -> String {
        let parts = [
            self.number.as_deref(),
            self.leading_point.as_deref(),
            Some(self.core.as_str()),
            self.trailing_point.as_deref(),
            self.building.as_deref(),
        ];
        parts
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Per-type element totals for a dataset extract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCounts {
    /// Number of node elements.
    pub nodes: u64,
    /// Number of way elements.
    pub ways: u64,
    /// Number of relation elements.
    pub relations: u64,
}

impl ElementCounts {
    /// Total number of elements across all types.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.nodes + self.ways + self.relations
    }
}

/// Geographic bounding box of a dataset extract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    /// Southernmost latitude.
    pub min_lat: f64,
    /// Northernmost latitude.
    pub max_lat: f64,
    /// Westernmost longitude.
    pub min_lon: f64,
    /// Easternmost longitude.
    pub max_lon: f64,
}

impl MapBounds {
    /// Expands the bounds to include the given coordinate.
    #[must_use]
    pub fn including(self, lat: f64, lon: f64) -> Self {
        Self {
            min_lat: self.min_lat.min(lat),
            max_lat: self.max_lat.max(lat),
            min_lon: self.min_lon.min(lon),
            max_lon: self.max_lon.max(lon),
        }
    }

    /// Bounds covering exactly one coordinate.
    #[must_use]
    pub const fn point(lat: f64, lon: f64) -> Self {
        Self {
            min_lat: lat,
            max_lat: lat,
            min_lon: lon,
            max_lon: lon,
        }
    }

    /// Merges two bounds into the smallest box covering both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        self.including(other.min_lat, other.min_lon)
            .including(other.max_lat, other.max_lon)
    }
}
