use geo::Geometry;
use log::info;

use super::config::GraphConfig;
use crate::NavGraph;

/// Creates a navigable graph from drawn geometries using the provided configuration
pub fn create_nav_graph<'a, I>(config: &GraphConfig, geometries: I) -> NavGraph
where
    I: IntoIterator<Item = &'a Geometry<f64>>,
{
    info!("Building navigable graph with {:?} distances", config.metric);

    let mut graph = NavGraph::new(config.metric);
    graph.rebuild(geometries);
    graph
}
