//! `GeoJSON` drawings to `geo` geometries

use geo::Geometry;
use geojson::{Feature, FeatureCollection};
use log::{debug, warn};
use serde_json::Value as JsonValue;

use crate::Error;

/// Converts every feature of a drawing into a `geo` geometry.
///
/// Features without a geometry, or whose geometry cannot be represented,
/// are skipped so that the rest of the drawing stays usable.
pub fn geometries_from_geojson(collection: &FeatureCollection) -> Vec<Geometry<f64>> {
    let geometries: Vec<_> = collection
        .features
        .iter()
        .enumerate()
        .filter_map(|(idx, feature)| convert_feature(idx, feature))
        .collect();

    debug!(
        "Converted {} of {} drawn features",
        geometries.len(),
        collection.features.len()
    );
    geometries
}

/// Parses a `GeoJSON` document and converts it into `geo` geometries.
///
/// Accepts a `FeatureCollection`, a single `Feature` or a bare geometry.
/// Each feature is decoded on its own, so a malformed feature is skipped
/// without losing the rest of the drawing.
///
/// # Errors
///
/// Returns an error if `json` is not JSON or not a `GeoJSON` object
pub fn geometries_from_geojson_str(json: &str) -> Result<Vec<Geometry<f64>>, Error> {
    let document: JsonValue =
        serde_json::from_str(json).map_err(|e| Error::GeoJsonError(e.to_string()))?;

    let kind = document
        .get("type")
        .and_then(JsonValue::as_str)
        .map(str::to_owned);

    let geometries = match kind.as_deref() {
        Some("FeatureCollection") => {
            let Some(features) = document.get("features").and_then(JsonValue::as_array) else {
                return Err(Error::GeoJsonError(
                    "FeatureCollection has no `features` array".to_string(),
                ));
            };
            let geometries: Vec<_> = features
                .iter()
                .enumerate()
                .filter_map(|(idx, value)| decode_feature(idx, value.clone()))
                .collect();
            debug!(
                "Converted {} of {} drawn features",
                geometries.len(),
                features.len()
            );
            geometries
        }
        Some("Feature") => decode_feature(0, document).into_iter().collect(),
        Some(
            "Point" | "MultiPoint" | "LineString" | "MultiLineString" | "Polygon"
            | "MultiPolygon" | "GeometryCollection",
        ) => match serde_json::from_value::<geojson::Geometry>(document) {
            Ok(geometry) => convert_geometry(0, &geometry).into_iter().collect(),
            Err(e) => {
                warn!("Geometry is malformed ({e}) - skipping");
                Vec::new()
            }
        },
        Some(other) => {
            return Err(Error::GeoJsonError(format!(
                "Unsupported GeoJSON type `{other}`"
            )));
        }
        None => {
            return Err(Error::GeoJsonError(
                "Document is not a GeoJSON object".to_string(),
            ));
        }
    };
    Ok(geometries)
}

fn decode_feature(idx: usize, value: JsonValue) -> Option<Geometry<f64>> {
    match serde_json::from_value::<Feature>(value) {
        Ok(feature) => convert_feature(idx, &feature),
        Err(e) => {
            warn!("Feature #{idx} is malformed ({e}) - skipping");
            None
        }
    }
}

fn convert_feature(idx: usize, feature: &Feature) -> Option<Geometry<f64>> {
    let Some(geometry) = &feature.geometry else {
        warn!("Feature #{idx} has no geometry - skipping");
        return None;
    };
    convert_geometry(idx, geometry)
}

fn convert_geometry(idx: usize, geometry: &geojson::Geometry) -> Option<Geometry<f64>> {
    // Conversion indexes both components of every position
    let well_formed = serde_json::to_value(geometry)
        .map(|json| positions_well_formed(&json))
        .unwrap_or(false);
    if !well_formed {
        warn!("Feature #{idx} has a position with fewer than 2 numbers - skipping");
        return None;
    }

    match Geometry::<f64>::try_from(geometry.clone()) {
        Ok(geometry) => Some(geometry),
        Err(e) => {
            warn!("Feature #{idx} has unsupported geometry ({e}) - skipping");
            None
        }
    }
}

/// Every position under `coordinates` (and nested `geometries`) holds at least two numbers
fn positions_well_formed(geometry: &JsonValue) -> bool {
    if let Some(members) = geometry.get("geometries").and_then(JsonValue::as_array) {
        return members.iter().all(positions_well_formed);
    }
    geometry.get("coordinates").is_none_or(coordinates_well_formed)
}

fn coordinates_well_formed(coordinates: &JsonValue) -> bool {
    let Some(items) = coordinates.as_array() else {
        return false;
    };
    match items.first() {
        Some(JsonValue::Number(_)) => items.len() >= 2 && items.iter().all(JsonValue::is_number),
        Some(_) => items.iter().all(coordinates_well_formed),
        // Empty coordinate arrays count as malformed
        None => false,
    }
}
