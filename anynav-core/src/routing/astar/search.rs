use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use super::state::State;
use crate::{Cost, NavGraph};

/// A* search between two nodes of the graph.
///
/// Edge cost is the stored segment length and the heuristic is the straight
/// distance to the goal in the graph's own metric, which never overestimates
/// the remaining cost. Returns the total cost and the nodes in start to goal
/// order, or `None` if the goal is unreachable or either index is unknown.
pub fn astar(
    graph: &NavGraph,
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<(Cost, Vec<NodeIndex>)> {
    graph.node(start)?;
    let goal_point = graph.node(goal)?.geometry;
    let metric = graph.metric();
    let heuristic = |node: NodeIndex| metric.distance(graph.point(node), goal_point);

    let estimated_nodes = graph.node_count().min(1000);
    let mut closed = FixedBitSet::with_capacity(graph.node_count());
    let mut costs: HashMap<NodeIndex, Cost> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> =
        HashMap::with_capacity(estimated_nodes);
    let mut open = BinaryHeap::with_capacity(estimated_nodes / 4);

    costs.insert(start, 0.0);
    open.push(State {
        estimate: heuristic(start),
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node, .. }) = open.pop() {
        if node == goal {
            log::trace!(
                "A* reached goal at cost {cost} after closing {} nodes",
                closed.count_ones(..)
            );
            return Some((cost, unwind_path(&predecessors, start, goal)));
        }

        // Stale heap entry, the node was already finalized with a lower cost
        if closed.put(node.index()) {
            continue;
        }

        for (next, weight) in graph.neighbors(node) {
            if closed.contains(next.index()) {
                continue;
            }
            let next_cost = cost + weight;

            match costs.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost >= *entry.get() {
                        continue;
                    }
                    *entry.get_mut() = next_cost;
                }
            }
            predecessors.insert(next, node);
            open.push(State {
                estimate: next_cost + heuristic(next),
                cost: next_cost,
                node: next,
            });
        }
    }

    None
}

/// Follows predecessors back from `goal` and returns the path from `start`
fn unwind_path(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DistanceMetric;
    use geo::{Coord, Geometry, line_string};

    fn graph_from(chains: Vec<geo::LineString<f64>>) -> NavGraph {
        let geometries: Vec<_> = chains.into_iter().map(Geometry::LineString).collect();
        let mut graph = NavGraph::new(DistanceMetric::Euclidean);
        graph.rebuild(&geometries);
        graph
    }

    fn node(graph: &NavGraph, x: f64, y: f64) -> NodeIndex {
        graph.node_index(Coord { x, y }).unwrap()
    }

    #[test]
    fn takes_shorter_of_two_branches() {
        // Long detour through (0,5) versus direct line through (2,0)
        let graph = graph_from(vec![
            line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 5.0), (x: 4.0, y: 0.0)],
            line_string![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 4.0, y: 0.0)],
        ]);
        let (cost, path) = astar(&graph, node(&graph, 0.0, 0.0), node(&graph, 4.0, 0.0)).unwrap();

        assert_eq!(cost, 4.0);
        assert_eq!(
            path,
            vec![node(&graph, 0.0, 0.0), node(&graph, 2.0, 0.0), node(&graph, 4.0, 0.0)]
        );
    }

    #[test]
    fn start_equals_goal() {
        let graph = graph_from(vec![line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)]]);
        let start = node(&graph, 1.0, 0.0);

        assert_eq!(astar(&graph, start, start), Some((0.0, vec![start])));
    }

    #[test]
    fn disconnected_goal_is_unreachable() {
        let graph = graph_from(vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)],
            line_string![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0)],
        ]);

        assert!(astar(&graph, node(&graph, 0.0, 0.0), node(&graph, 6.0, 5.0)).is_none());
    }

    #[test]
    fn unknown_index_is_unreachable() {
        let graph = graph_from(vec![line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)]]);

        assert!(astar(&graph, node(&graph, 0.0, 0.0), NodeIndex::new(42)).is_none());
    }

    #[test]
    fn ignores_zig_zag_into_shared_node() {
        // (3,0) is reachable both directly and through (1,3)
        let graph = graph_from(vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 3.0), (x: 3.0, y: 0.0)],
            line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 0.0), (x: 6.0, y: 0.0)],
        ]);
        let (cost, path) = astar(&graph, node(&graph, 0.0, 0.0), node(&graph, 6.0, 0.0)).unwrap();

        assert_eq!(cost, 6.0);
        assert_eq!(path.len(), 3);
    }
}
