use anynav_core::prelude::*;
use geo::Geometry;
use geojson::FeatureCollection;

/// Navigator
///
/// Owns the graph built from the current drawing. Every rebuild replaces
/// the graph wholesale, and route queries always run against the latest one.
///
/// Example:
///
/// ```ignore
/// let mut navigator = Navigator::new(GraphConfig::default());
/// navigator.rebuild_from_geojson_str(drawing)?;
/// let route = navigator.find_route(start, end)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    config: GraphConfig,
    graph: NavGraph,
    report: BuildReport,
}

impl Navigator {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            graph: NavGraph::new(config.metric),
            report: BuildReport::default(),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Current graph snapshot
    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    /// Summary of the most recent rebuild
    pub fn last_report(&self) -> BuildReport {
        self.report
    }

    /// Search engine armed against the current graph
    pub fn path_finder(&self) -> PathFinder<'_> {
        PathFinder::new(&self.graph)
    }

    pub fn rebuild<'a, I>(&mut self, geometries: I) -> BuildReport
    where
        I: IntoIterator<Item = &'a Geometry<f64>>,
    {
        self.report = self.graph.rebuild(geometries);
        self.report
    }

    pub fn rebuild_from_geojson(&mut self, drawing: &FeatureCollection) -> BuildReport {
        let geometries = geometries_from_geojson(drawing);
        self.rebuild(&geometries)
    }

    /// Rebuilds from a `GeoJSON` document.
    ///
    /// # Errors
    ///
    /// Returns an error if `drawing` cannot be parsed; the current graph is
    /// kept in that case.
    pub fn rebuild_from_geojson_str(&mut self, drawing: &str) -> Result<BuildReport, Error> {
        let geometries = geometries_from_geojson_str(drawing)?;
        Ok(self.rebuild(&geometries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    #[test]
    fn new_navigator_has_empty_graph() {
        let navigator = Navigator::new(GraphConfig {
            metric: DistanceMetric::Euclidean,
        });

        assert!(navigator.graph().is_empty());
        assert_eq!(navigator.graph().metric(), DistanceMetric::Euclidean);
        assert_eq!(navigator.last_report(), BuildReport::default());
    }

    #[test]
    fn rebuild_records_report() {
        let mut navigator = Navigator::default();
        let report = navigator.rebuild(&[Geometry::LineString(
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)],
        )]);

        assert_eq!(report.nodes, 2);
        assert_eq!(navigator.last_report(), report);
    }

    #[test]
    fn malformed_features_do_not_lose_the_drawing() {
        let mut navigator = Navigator::default();
        let report = navigator
            .rebuild_from_geojson_str(
                r#"{
                    "type": "FeatureCollection",
                    "features": [
                        { "type": "Feature", "properties": {},
                          "geometry": { "type": "LineString", "coordinates": [[0, 0], [1, 0]] } },
                        { "type": "Feature", "properties": {},
                          "geometry": { "type": "LineString", "coordinates": [[0, 0], [1]] } },
                        { "type": "Feature", "properties": {},
                          "geometry": { "type": "LineString" } }
                    ]
                }"#,
            )
            .unwrap();

        assert_eq!(report.chains, 1);
        assert_eq!(navigator.graph().node_count(), 2);
    }

    #[test]
    fn unparsable_drawing_keeps_current_graph() {
        let mut navigator = Navigator::default();
        navigator.rebuild(&[Geometry::LineString(
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)],
        )]);

        assert!(navigator.rebuild_from_geojson_str("not geojson").is_err());
        assert_eq!(navigator.graph().node_count(), 2);
    }
}
