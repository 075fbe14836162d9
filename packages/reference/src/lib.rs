#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static reference tables for address field auditing.
//!
//! Expected vocabulary and abbreviation-to-canonical mappings for one
//! city's road-naming conventions: street types, directional points,
//! building designators, city synonyms, a fixed highway-number table,
//! and the regional postal-code prefix. Pure data, loaded once, never
//! mutated.

pub mod cities;
pub mod highways;
pub mod points;
pub mod postal;
pub mod streets;
