use geojson::{Feature, Geometry, GeometryValue};

use super::Route;
use crate::Error;

impl Route {
    /// Converts the route to a `LineString` `Feature` for display.
    ///
    /// The `cost` property is [`Route::cost`]: metres for a Haversine graph
    /// (not kilometres), coordinate units for a Euclidean one. A route whose
    /// start and end snapped to the same node is a single-coordinate line.
    pub fn to_geojson(&self) -> Feature {
        let geometry = Geometry::new(GeometryValue::from(&self.to_line_string()));

        let mut feature = Feature::from(geometry);
        feature.set_property("cost", self.cost);
        feature.set_property("node_count", self.len());
        feature
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
