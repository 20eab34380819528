//! The route graph snapshot.

use std::collections::HashMap;

use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use super::RouteError;
use crate::domain::{LineTopology, StationId};

/// An immutable weighted multigraph over every station in the network.
///
/// Stations are vertices; every section contributes one directed edge
/// weighted by its distance. Parallel edges are kept when several lines
/// connect the same pair of stations. A snapshot is never mutated after
/// `build` returns.
#[derive(Debug, Default)]
pub struct RouteGraph {
    graph: Graph<StationId, u32>,
    nodes: HashMap<StationId, NodeIndex>,
}

impl RouteGraph {
    /// Build a snapshot from the current state of the given lines.
    pub fn build<T: LineTopology>(lines: &[T]) -> Self {
        let mut graph = Graph::new();
        let mut nodes: HashMap<StationId, NodeIndex> = HashMap::new();

        for line in lines {
            for station in line.stations() {
                nodes
                    .entry(station)
                    .or_insert_with(|| graph.add_node(station));
            }
        }

        for line in lines {
            for section in line.sections() {
                // Every station a section mentions appears in its line's
                // station walk, so both endpoints are already vertices.
                let (Some(&up), Some(&down)) =
                    (nodes.get(&section.up()), nodes.get(&section.down()))
                else {
                    continue;
                };
                graph.add_edge(up, down, section.distance().get());
            }
        }

        debug!(
            stations = graph.node_count(),
            sections = graph.edge_count(),
            "route graph snapshot built"
        );
        RouteGraph { graph, nodes }
    }

    /// Minimum-weight path between two stations: the ordered station
    /// sequence and its total weight.
    ///
    /// Dijkstra over non-negative integer weights; when several paths tie
    /// on weight, any one of them may be returned, but the weight is the
    /// same for all of them.
    pub fn shortest_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<(Vec<StationId>, u32), RouteError> {
        let not_connected = || RouteError::NotConnected(source, target);
        let &src = self.nodes.get(&source).ok_or_else(not_connected)?;
        let &dst = self.nodes.get(&target).ok_or_else(not_connected)?;

        // astar with a zero heuristic is plain Dijkstra.
        let (weight, path) = petgraph::algo::astar(
            &self.graph,
            src,
            |node| node == dst,
            |edge| *edge.weight(),
            |_| 0,
        )
        .ok_or_else(not_connected)?;

        let stations = path.into_iter().map(|ix| self.graph[ix]).collect();
        Ok((stations, weight))
    }

    /// True when the station appears in the snapshot.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.nodes.contains_key(&station)
    }

    /// Number of distinct stations in the snapshot.
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of section edges in the snapshot, counting parallel edges.
    pub fn section_count(&self) -> usize {
        self.graph.edge_count()
    }
}
