use geo::Point;
use log::debug;
use petgraph::graph::NodeIndex;
use rayon::prelude::*;

use super::{Route, astar};
use crate::{Error, NavGraph};

/// Route search armed against one graph snapshot.
///
/// The finder borrows the graph, so the graph cannot be rebuilt while a
/// finder for it is alive; create a new one after every rebuild.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g NavGraph,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g NavGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g NavGraph {
        self.graph
    }

    /// Finds the shortest route between two arbitrary points.
    ///
    /// Both points are snapped to their nearest graph node first. Returns
    /// `Ok(None)` when the snapped nodes are not connected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`] if the graph has no nodes (including a
    /// graph that was never built) and [`Error::InvalidCoordinate`] for
    /// non-finite input.
    pub fn find_path(&self, start: Point<f64>, end: Point<f64>) -> Result<Option<Route>, Error> {
        let start_node = self.snap(start)?;
        let end_node = self.snap(end)?;
        Ok(self.find_path_between(start_node, end_node))
    }

    /// Shortest route between two nodes of the graph
    pub fn find_path_between(&self, start: NodeIndex, end: NodeIndex) -> Option<Route> {
        let result = astar(self.graph, start, end);
        match &result {
            Some((cost, nodes)) => debug!(
                "Route {start:?} -> {end:?}: {} nodes, cost {cost:.3}",
                nodes.len()
            ),
            None => debug!("No route {start:?} -> {end:?}"),
        }
        result.map(|(cost, nodes)| Route::from_nodes(self.graph, nodes, cost))
    }

    /// Finds routes from one point to many, searching in parallel.
    ///
    /// The result has one entry per end point, in input order.
    ///
    /// # Errors
    ///
    /// Fails like [`PathFinder::find_path`] if any point cannot be snapped
    pub fn find_paths_one_to_many(
        &self,
        start: Point<f64>,
        ends: &[Point<f64>],
    ) -> Result<Vec<Option<Route>>, Error> {
        let start_node = self.snap(start)?;

        ends.par_iter()
            .map(|&end| -> Result<Option<Route>, Error> {
                let end_node = self.snap(end)?;
                Ok(self.find_path_between(start_node, end_node))
            })
            .collect()
    }

    /// Resolves an arbitrary point to the nearest graph node
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`] if there is nothing to snap to and
    /// [`Error::InvalidCoordinate`] for non-finite input
    pub fn snap(&self, point: Point<f64>) -> Result<NodeIndex, Error> {
        if !point.x().is_finite() || !point.y().is_finite() {
            return Err(Error::InvalidCoordinate(point.x(), point.y()));
        }
        self.graph
            .nearest_node(&point)
            .map(|(node, _)| node)
            .ok_or(Error::EmptyGraph)
    }
}
