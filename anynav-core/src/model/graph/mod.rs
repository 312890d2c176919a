//! Graph built from drawn path chains

pub mod components;
pub mod network;

pub use components::{GraphEdge, GraphNode};
pub use network::{BuildReport, NavGraph};
