//! Data model for the navigable graph
//!
//! Contains coordinate identity, distance conventions and the graph itself.

pub mod coordinate;
pub mod graph;

pub use coordinate::{DistanceMetric, NodeKey};
pub use graph::{BuildReport, GraphEdge, GraphNode, NavGraph};
