//! Lines and the topology seam consumed by route finding.

use super::{LineId, LineSections, Section, StationId};

/// A subway line: a name plus its section chain.
///
/// Stations are shared across lines, but every section belongs to exactly
/// one line and is reachable only through that line's [`LineSections`].
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    sections: LineSections,
}

impl Line {
    /// Create an empty line.
    pub fn new(id: LineId, name: impl Into<String>) -> Self {
        Line {
            id,
            name: name.into(),
            sections: LineSections::new(),
        }
    }

    /// The line's identity.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// The line's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line's section chain.
    pub fn topology(&self) -> &LineSections {
        &self.sections
    }

    /// Mutable access to the section chain.
    pub fn topology_mut(&mut self) -> &mut LineSections {
        &mut self.sections
    }
}

/// Access to a line's current topology, as needed to assemble the route
/// graph.
///
/// Implemented by [`Line`] and [`LineSections`]; the route finder accepts
/// any slice of `LineTopology` values, so tests and callers that manage
/// sections without full `Line` records can query them directly.
pub trait LineTopology {
    /// Current sections, in no particular order.
    fn sections(&self) -> &[Section];

    /// Ordered head-to-tail station sequence.
    fn stations(&self) -> Vec<StationId>;
}

impl LineTopology for LineSections {
    fn sections(&self) -> &[Section] {
        LineSections::sections(self)
    }

    fn stations(&self) -> Vec<StationId> {
        LineSections::stations(self)
    }
}

impl LineTopology for Line {
    fn sections(&self) -> &[Section] {
        LineSections::sections(&self.sections)
    }

    fn stations(&self) -> Vec<StationId> {
        self.sections.stations()
    }
}
