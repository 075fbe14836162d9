#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Normalization pipeline for free-text address fields.
//!
//! Street names are decomposed into semantic components (building/suite
//! designator, leading street number, directional prefix/suffix, residual
//! core), each component is validated or remapped against the reference
//! tables, and the components are reassembled into a canonical string.
//! City names and postal codes get simpler cleaners that either produce a
//! usable value or reject the field outright.
//!
//! Decomposition runs as an explicitly ordered list of stages over one
//! intermediate structure; the order is a contract, not an accident of
//! call sequence — every stage operates on the residue left by the
//! previous one.

pub mod city;
pub mod patterns;
mod resolve;
pub mod street;
pub mod zip;
