//! OpenStreetMap PBF extract reader.
//!
//! Uses `osmpbf`'s parallel reader (`par_map_reduce`) for fast
//! multi-threaded decoding. Address fields are collected from the tags
//! of every element type; per-element results are appended, which is
//! safe because downstream auditing treats records as an unordered
//! multiset.

use std::path::Path;

use addr_lint_models::{ElementCounts, FieldKind, MapBounds, RawField};
use osmpbf::{Element, ElementReader};

use crate::SourceError;

/// Reads every address field record from a PBF extract.
///
/// # Errors
///
/// Returns an error if the extract cannot be read or parsed.
pub fn read_fields(path: &Path) -> Result<Vec<RawField>, SourceError> {
    if !path.exists() {
        return Err(SourceError::FileNotFound(path.display().to_string()));
    }
    let reader = ElementReader::from_path(path).map_err(|e| parse_error(path, &e))?;

    let fields = reader
        .par_map_reduce(
            |element| match element {
                Element::Node(node) => fields_from_tags(node.tags()),
                Element::DenseNode(node) => fields_from_tags(node.tags()),
                Element::Way(way) => fields_from_tags(way.tags()),
                Element::Relation(relation) => fields_from_tags(relation.tags()),
            },
            Vec::new,
            |mut a, mut b| {
                a.append(&mut b);
                a
            },
        )
        .map_err(|e| parse_error(path, &e))?;

    log::info!("Read {} address fields from {}", fields.len(), path.display());
    Ok(fields)
}

/// Counts the node, way, and relation elements in a PBF extract.
///
/// # Errors
///
/// Returns an error if the extract cannot be read or parsed.
pub fn element_counts(path: &Path) -> Result<ElementCounts, SourceError> {
    if !path.exists() {
        return Err(SourceError::FileNotFound(path.display().to_string()));
    }
    let reader = ElementReader::from_path(path).map_err(|e| parse_error(path, &e))?;

    reader
        .par_map_reduce(
            |element| match element {
                Element::Node(_) | Element::DenseNode(_) => ElementCounts {
                    nodes: 1,
                    ..ElementCounts::default()
                },
                Element::Way(_) => ElementCounts {
                    ways: 1,
                    ..ElementCounts::default()
                },
                Element::Relation(_) => ElementCounts {
                    relations: 1,
                    ..ElementCounts::default()
                },
            },
            ElementCounts::default,
            |a, b| ElementCounts {
                nodes: a.nodes + b.nodes,
                ways: a.ways + b.ways,
                relations: a.relations + b.relations,
            },
        )
        .map_err(|e| parse_error(path, &e))
}

/// Computes the geographic bounds of a PBF extract from its node
/// coordinates.
///
/// Returns `None` for an extract with no finite node coordinates.
///
/// # Errors
///
/// Returns an error if the extract cannot be read or parsed.
pub fn map_bounds(path: &Path) -> Result<Option<MapBounds>, SourceError> {
    if !path.exists() {
        return Err(SourceError::FileNotFound(path.display().to_string()));
    }
    let reader = ElementReader::from_path(path).map_err(|e| parse_error(path, &e))?;

    reader
        .par_map_reduce(
            |element| match element {
                Element::Node(node) => bounds_point(node.lat(), node.lon()),
                Element::DenseNode(node) => bounds_point(node.lat(), node.lon()),
                Element::Way(_) | Element::Relation(_) => None,
            },
            || None,
            |a, b| match (a, b) {
                (Some(a), Some(b)) => Some(a.union(b)),
                (bounds, None) | (None, bounds) => bounds,
            },
        )
        .map_err(|e| parse_error(path, &e))
}

fn parse_error(path: &Path, error: &osmpbf::Error) -> SourceError {
    SourceError::Parse {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

fn bounds_point(lat: f64, lon: f64) -> Option<MapBounds> {
    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    Some(MapBounds::point(lat, lon))
}

/// Collects address field records from an element's tags.
fn fields_from_tags<'a>(tags: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<RawField> {
    tags.filter_map(|(key, value)| {
        field_kind_for_key(key).map(|kind| RawField::new(kind, value))
    })
    .collect()
}

/// Maps an OSM tag key to the field kind it carries, if any.
fn field_kind_for_key(key: &str) -> Option<FieldKind> {
    match key {
        "addr:street" => Some(FieldKind::StreetName),
        "addr:city" => Some(FieldKind::CityName),
        "addr:postcode" => Some(FieldKind::PostalCode),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_address_fields_from_tags() {
        let tags = vec![
            ("addr:housenumber", "100"),
            ("addr:street", "S Dobson St"),
            ("addr:city", "Burleson"),
            ("addr:postcode", "76028"),
            ("name", "Some Place"),
        ];

        let fields = fields_from_tags(tags.into_iter());

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].kind, FieldKind::StreetName);
        assert_eq!(fields[0].value, "S Dobson St");
        assert_eq!(fields[1].kind, FieldKind::CityName);
        assert_eq!(fields[2].kind, FieldKind::PostalCode);
    }

    #[test]
    fn ignores_unrelated_tags() {
        let tags = vec![("highway", "residential"), ("name", "Oak Lane")];
        assert!(fields_from_tags(tags.into_iter()).is_empty());
    }

    #[test]
    fn maps_only_address_keys() {
        assert_eq!(field_kind_for_key("addr:street"), Some(FieldKind::StreetName));
        assert_eq!(field_kind_for_key("addr:housenumber"), None);
        assert_eq!(field_kind_for_key("building"), None);
    }

    #[test]
    fn skips_non_finite_coordinates() {
        assert!(bounds_point(f64::NAN, -97.3).is_none());
        assert!(bounds_point(32.5, -97.3).is_some());
    }

    #[test]
    fn missing_extract_is_reported() {
        let err = read_fields(Path::new("no-such-extract.osm.pbf")).unwrap_err();
        assert!(matches!(err, SourceError::FileNotFound(_)));
    }
}
