//! Shortest-path queries over the current snapshot.

use std::sync::Arc;

use super::{RouteError, RouteGraph};
use crate::domain::{LineTopology, StationId};

/// Route query engine.
///
/// Holds the current [`RouteGraph`] snapshot behind an `Arc`. `init` builds
/// the replacement graph off to the side and publishes it with a pointer
/// swap, so a query never observes a half-built graph and readers holding
/// the previous snapshot are undisturbed.
#[derive(Debug, Default)]
pub struct PathFinder {
    snapshot: Arc<RouteGraph>,
}

impl PathFinder {
    /// Create a finder over the empty snapshot. Every query reports
    /// [`RouteError::NotConnected`] until [`init`](Self::init) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the snapshot from the current state of the given lines,
    /// discarding the previous one.
    pub fn init<T: LineTopology>(&mut self, lines: &[T]) {
        self.snapshot = Arc::new(RouteGraph::build(lines));
    }

    /// The current snapshot. Callers may hold it and keep querying it
    /// across a later `init`.
    pub fn snapshot(&self) -> Arc<RouteGraph> {
        Arc::clone(&self.snapshot)
    }

    /// Ordered station sequence of the minimum-weight path.
    pub fn find_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<Vec<StationId>, RouteError> {
        self.snapshot
            .shortest_path(source, target)
            .map(|(stations, _)| stations)
    }

    /// Total weight of the minimum-weight path.
    ///
    /// Always equals the sum of section distances along the path
    /// [`find_path`](Self::find_path) returns for the same snapshot; both
    /// are derived from one search.
    pub fn find_path_weight(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<u32, RouteError> {
        self.snapshot
            .shortest_path(source, target)
            .map(|(_, weight)| weight)
    }
}
