//! Categorized problem report accumulated over an audit run.
//!
//! Each audit call produces a small delta report; callers merge deltas by
//! per-category, per-key set union. Union is commutative and associative,
//! so reports from partitioned or parallel runs merge to the same result.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The problem categories an audit can file findings under.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProblemCategory {
    /// Disallowed punctuation or malformed ordinal casing.
    Characters,
    /// Unexpected building/suite designator keywords.
    BuildingNumbers,
    /// Standalone abbreviated directional tokens.
    Points,
    /// Trailing segments that match no expected street type.
    StreetTypes,
    /// Numeric tokens with no or inconsistent highway mapping.
    Highways,
    /// City name findings (state inclusion, stray characters, synonyms).
    Cities,
    /// Postal code findings (format and region checks).
    Zipcodes,
}

impl ProblemCategory {
    /// Human-readable heading used when rendering a report.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Characters => "Problem characters",
            Self::BuildingNumbers => "Problem building numbers",
            Self::Points => "Problem points",
            Self::StreetTypes => "Problem street types",
            Self::Highways => "Problem highway names",
            Self::Cities => "Problem city names",
            Self::Zipcodes => "Problem zip codes",
        }
    }
}

/// A mapping from problem category to problem key to the set of offending
/// field values.
///
/// Duplicate values collapse and ordering is irrelevant; `BTreeMap` /
/// `BTreeSet` are used so rendering and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemReport {
    categories: BTreeMap<ProblemCategory, BTreeMap<String, BTreeSet<String>>>,
}

impl ProblemReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `value` under the given category and key.
    pub fn record(
        &mut self,
        category: ProblemCategory,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.categories
            .entry(category)
            .or_default()
            .entry(key.into())
            .or_default()
            .insert(value.into());
    }

    /// Merges another report into this one by per-category, per-key set
    /// union.
    pub fn merge(&mut self, other: Self) {
        for (category, keys) in other.categories {
            let slot = self.categories.entry(category).or_default();
            for (key, values) in keys {
                slot.entry(key).or_default().extend(values);
            }
        }
    }

    /// Returns `true` if no findings have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of distinct offending values across all categories
    /// and keys.
    #[must_use]
    pub fn total_values(&self) -> usize {
        self.categories
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeSet::len)
            .sum()
    }

    /// The findings filed under one category, if any.
    #[must_use]
    pub fn category(
        &self,
        category: ProblemCategory,
    ) -> Option<&BTreeMap<String, BTreeSet<String>>> {
        self.categories.get(&category)
    }

    /// Iterates over every populated category with its key/value-set map.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (ProblemCategory, &BTreeMap<String, BTreeSet<String>>)> {
        self.categories.iter().map(|(c, keys)| (*c, keys))
    }
}
