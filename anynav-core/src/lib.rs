//! Navigable graph and shortest-path engine for networks of paths drawn
//! over arbitrary images (floor plans, campus maps, ...).
//!
//! Drawn chains are turned into a weighted bidirectional graph, query
//! coordinates are snapped to their nearest node, and routes are found with A*.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{
    GraphConfig, create_nav_graph, geometries_from_geojson, geometries_from_geojson_str,
};
pub use model::{BuildReport, DistanceMetric, NavGraph, NodeKey};
pub use routing::{PathFinder, Route, astar};

/// Index of a node in the navigable graph
pub type GraphNodeId = petgraph::graph::NodeIndex;
/// Path cost, expressed in the units of the graph's [`DistanceMetric`]
pub type Cost = f64;
