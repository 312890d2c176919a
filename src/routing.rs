use anynav_core::prelude::*;
use geo::Point;
use log::debug;

use crate::Navigator;

impl Navigator {
    /// Shortest route between two clicked points.
    ///
    /// `Ok(None)` means the points snap to parts of the drawing that are not
    /// connected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`] when nothing has been drawn yet
    pub fn find_route(&self, start: Point<f64>, end: Point<f64>) -> Result<Option<Route>, Error> {
        self.path_finder().find_path(start, end)
    }

    /// Routes from one point to each of `ends`, in input order
    pub fn find_routes_one_to_many(
        &self,
        start: Point<f64>,
        ends: &[Point<f64>],
    ) -> Result<Vec<Option<Route>>, Error> {
        self.path_finder().find_paths_one_to_many(start, ends)
    }

    /// Shortest route as a serialized `GeoJSON` `Feature`, ready to draw.
    ///
    /// # Errors
    ///
    /// Fails like [`Navigator::find_route`], or if serialization fails
    pub fn route_feature_json(
        &self,
        start: Point<f64>,
        end: Point<f64>,
    ) -> Result<Option<String>, Error> {
        let Some(route) = self.find_route(start, end)? else {
            debug!("No route between {start:?} and {end:?}");
            return Ok(None);
        };
        route.to_geojson_string().map(Some)
    }
}
