//! Navigable graph built from drawn path chains

use geo::{Coord, Geometry, LineString, Point};
use hashbrown::HashMap;
use log::{info, trace, warn};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::{GraphEdge, GraphNode};
use crate::model::{DistanceMetric, NodeKey};
use crate::Cost;

/// Summary of a single rebuild
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Chains that contributed nodes and edges
    pub chains: usize,
    /// Chains dropped as malformed
    pub skipped_chains: usize,
    /// Geometries that are not path chains
    pub ignored_geometries: usize,
    pub nodes: usize,
    pub edges: usize,
}

/// Weighted graph of drawn paths.
///
/// Every drawn segment is stored as two directed edges of equal weight.
/// Nodes are deduplicated by [`NodeKey`], so chains that share a coordinate
/// are connected through it.
#[derive(Debug, Clone, Default)]
pub struct NavGraph {
    graph: DiGraph<GraphNode, GraphEdge>,
    node_lookup: HashMap<NodeKey, NodeIndex>,
    metric: DistanceMetric,
}

impl NavGraph {
    pub fn new(metric: DistanceMetric) -> Self {
        Self {
            graph: DiGraph::new(),
            node_lookup: HashMap::new(),
            metric,
        }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Read-only view of the underlying petgraph graph
    pub fn graph(&self) -> &DiGraph<GraphNode, GraphEdge> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Discards the current graph and builds a new one from `geometries`.
    ///
    /// Only `LineString` geometries are path chains; every other kind is
    /// ignored. Chains with fewer than two coordinates or with non-finite
    /// components are skipped whole without affecting the rest.
    pub fn rebuild<'a, I>(&mut self, geometries: I) -> BuildReport
    where
        I: IntoIterator<Item = &'a Geometry<f64>>,
    {
        self.graph.clear();
        self.node_lookup.clear();

        let mut report = BuildReport::default();
        for (idx, geometry) in geometries.into_iter().enumerate() {
            match geometry {
                Geometry::LineString(chain) => {
                    if self.add_chain(idx, chain) {
                        report.chains += 1;
                    } else {
                        report.skipped_chains += 1;
                    }
                }
                _ => {
                    trace!("Geometry #{idx} is not a path chain - ignoring");
                    report.ignored_geometries += 1;
                }
            }
        }

        report.nodes = self.node_count();
        report.edges = self.edge_count();
        debug_assert!(self.is_bidirectional(), "rebuild left a one-way edge");

        info!(
            "Graph built: {} nodes, {} links from {} chains ({} skipped, {} ignored)",
            report.nodes,
            report.edges,
            report.chains,
            report.skipped_chains,
            report.ignored_geometries
        );
        report
    }

    fn add_chain(&mut self, idx: usize, chain: &LineString<f64>) -> bool {
        if chain.0.len() < 2 {
            warn!(
                "Chain #{idx} has {} coordinate(s), at least 2 required - skipping",
                chain.0.len()
            );
            return false;
        }

        let Some(keys) = chain
            .coords()
            .map(|coord| NodeKey::from_coord(*coord))
            .collect::<Option<Vec<_>>>()
        else {
            warn!("Chain #{idx} contains a non-finite coordinate - skipping");
            return false;
        };

        for pair in keys.windows(2) {
            self.insert_segment(pair[0], pair[1]);
        }
        true
    }

    fn insert_node(&mut self, key: NodeKey) -> NodeIndex {
        *self.node_lookup.entry(key).or_insert_with(|| {
            self.graph.add_node(GraphNode {
                key,
                geometry: key.coord().into(),
            })
        })
    }

    fn insert_segment(&mut self, from: NodeKey, to: NodeKey) {
        let from_idx = self.insert_node(from);
        let to_idx = self.insert_node(to);

        // Zero-length segment, nothing to traverse
        if from_idx == to_idx {
            return;
        }
        // Edges are always inserted in pairs, one direction is enough to detect a redraw
        if self.graph.find_edge(from_idx, to_idx).is_some() {
            return;
        }

        let weight = self
            .metric
            .distance(from.coord().into(), to.coord().into());
        self.graph.add_edge(from_idx, to_idx, GraphEdge { weight });
        self.graph.add_edge(to_idx, from_idx, GraphEdge { weight });
    }

    /// Finds the node closest to `point` by linear scan.
    ///
    /// On equal distances the node inserted first wins. Returns `None` when
    /// the graph is empty or `point` is not finite.
    pub fn nearest_node(&self, point: &Point<f64>) -> Option<(NodeIndex, Cost)> {
        if !point.x().is_finite() || !point.y().is_finite() {
            return None;
        }

        let mut nearest: Option<(NodeIndex, Cost)> = None;
        for idx in self.graph.node_indices() {
            let distance = self.metric.distance(*point, self.graph[idx].geometry);
            match nearest {
                Some((_, best)) if best <= distance => {}
                _ => nearest = Some((idx, distance)),
            }
        }
        nearest
    }

    /// Looks up the node drawn exactly at `coord`
    pub fn node_index(&self, coord: Coord<f64>) -> Option<NodeIndex> {
        NodeKey::from_coord(coord).and_then(|key| self.node_lookup.get(&key).copied())
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&GraphNode> {
        self.graph.node_weight(idx)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &GraphNode)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Outgoing edges of `node` as `(target, weight)`
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, Cost)> + '_ {
        self.graph
            .edges(node)
            .map(|edge| (edge.target(), edge.weight().weight))
    }

    pub fn edge_weight(&self, from: NodeIndex, to: NodeIndex) -> Option<Cost> {
        self.graph
            .find_edge(from, to)
            .and_then(|edge| self.graph.edge_weight(edge))
            .map(GraphEdge::length)
    }

    /// All directed edges as `(source, target, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, Cost)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), edge.weight().weight))
    }

    /// Every edge has a reverse twin of identical weight
    pub fn is_bidirectional(&self) -> bool {
        self.edges().all(|(source, target, weight)| {
            self.edge_weight(target, source)
                .is_some_and(|reverse| reverse == weight)
        })
    }

    /// Node coordinates; the index must come from this graph.
    pub(crate) fn point(&self, idx: NodeIndex) -> Point<f64> {
        self.graph[idx].geometry
    }
}
