//! Identity tokens for stations and lines.

use std::fmt;

/// Identity of a station in the network.
///
/// Stations are compared by identity only: two `StationId` values refer to
/// the same station iff they are equal. Sections hold station ids rather
/// than references, so a station shared between lines never creates a
/// reference cycle.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(u64);

impl StationId {
    /// Wrap a raw station id.
    pub fn new(id: u64) -> Self {
        StationId(id)
    }

    /// Returns the raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a line; every section records the line that owns it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(u64);

impl LineId {
    /// Wrap a raw line id.
    pub fn new(id: u64) -> Self {
        LineId(id)
    }

    /// Returns the raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
