//! Route finding across the subway network.
//!
//! Assembles one weighted directed multigraph from every line's sections
//! and answers shortest-path queries with Dijkstra's algorithm. The graph
//! is an immutable snapshot: topology changes are published by building a
//! fresh snapshot, never by mutating the one readers hold.

mod finder;
mod graph;

pub use finder::PathFinder;
pub use graph::RouteGraph;

use crate::domain::StationId;

/// Errors raised by route queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No path exists between the two stations in the current snapshot.
    /// Also raised when either station is absent from the snapshot.
    #[error("stations {0} and {1} are not connected")]
    NotConnected(StationId, StationId),
}
