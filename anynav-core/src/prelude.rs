// Re-export key components
pub use crate::loading::{
    GraphConfig, create_nav_graph, geometries_from_geojson, geometries_from_geojson_str,
};
pub use crate::model::{BuildReport, DistanceMetric, NavGraph, NodeKey};
pub use crate::routing::{PathFinder, Route};

// Core types
pub use crate::Cost;
pub use crate::Error;
pub use crate::GraphNodeId;
