//! Computed routes

mod to_geojson;

use geo::{Coord, LineString};
use petgraph::graph::NodeIndex;

use crate::{Cost, NavGraph};

/// Ordered route from start to destination, both inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    nodes: Vec<NodeIndex>,
    coordinates: Vec<Coord<f64>>,
    cost: Cost,
}

impl Route {
    pub(crate) fn from_nodes(graph: &NavGraph, nodes: Vec<NodeIndex>, cost: Cost) -> Self {
        let coordinates = nodes.iter().map(|&idx| graph.point(idx).into()).collect();
        Self {
            nodes,
            coordinates,
            cost,
        }
    }

    pub fn coordinates(&self) -> &[Coord<f64>] {
        &self.coordinates
    }

    pub fn into_coordinates(self) -> Vec<Coord<f64>> {
        self.coordinates
    }

    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    /// Total length in the graph's metric: metres for
    /// [`DistanceMetric::Haversine`](crate::DistanceMetric::Haversine),
    /// coordinate units for `Euclidean`
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of coordinates; a route never has fewer than one
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn start(&self) -> Option<Coord<f64>> {
        self.coordinates.first().copied()
    }

    pub fn end(&self) -> Option<Coord<f64>> {
        self.coordinates.last().copied()
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::new(self.coordinates.clone())
    }
}
