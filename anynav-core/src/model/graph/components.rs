//! Graph components - nodes and edges

use geo::Point;

use crate::model::NodeKey;
use crate::Cost;

/// Graph node: one distinct drawn coordinate
#[derive(Debug, Clone)]
pub struct GraphNode {
    /// Exact identity of the coordinate
    pub key: NodeKey,
    /// Node coordinates
    pub geometry: Point<f64>,
}

/// One direction of a drawn segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphEdge {
    /// Segment length in the graph's metric
    pub weight: Cost,
}

impl GraphEdge {
    pub fn length(&self) -> Cost {
        self.weight
    }
}
