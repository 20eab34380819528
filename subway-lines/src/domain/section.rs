//! Sections: directed, weighted edges between stations.

use std::fmt;

use super::{LineId, StationId};

/// Error returned when constructing a zero-length distance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("section distance must be positive")]
pub struct InvalidDistance;

/// A positive section length.
///
/// Any `Distance` value is `> 0` by construction, which is what keeps every
/// edge weight in the route graph non-negative.
///
/// # Examples
///
/// ```
/// use subway_lines::domain::Distance;
///
/// let d = Distance::new(10).unwrap();
/// assert_eq!(d.get(), 10);
///
/// // Zero is rejected
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u32);

impl Distance {
    /// Validate and wrap a section length; rejects zero.
    pub fn new(value: u32) -> Result<Self, InvalidDistance> {
        if value == 0 {
            return Err(InvalidDistance);
        }
        Ok(Distance(value))
    }

    /// Returns the length as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Remainder left when `taken` is carved off the front of a section of
    /// this length.
    ///
    /// Returns `None` when `taken` is as long as or longer than the whole,
    /// which is exactly the case a section split must reject.
    pub fn split_remainder(self, taken: Distance) -> Option<Distance> {
        if taken.0 >= self.0 {
            return None;
        }
        Some(Distance(self.0 - taken.0))
    }

    /// Combined length of two adjacent sections.
    pub fn merged(self, other: Distance) -> Distance {
        Distance(self.0 + other.0)
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge of a line: up station → down station, with a length.
///
/// Immutable once constructed. Every section is owned by exactly one line's
/// [`LineSections`](super::LineSections); the owning line is recorded by id.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Section {
    line: LineId,
    up: StationId,
    down: StationId,
    distance: Distance,
}

impl Section {
    /// Create a section of the given line between two stations.
    pub fn new(line: LineId, up: StationId, down: StationId, distance: Distance) -> Self {
        Section {
            line,
            up,
            down,
            distance,
        }
    }

    /// The line this section belongs to.
    pub fn line(&self) -> LineId {
        self.line
    }

    /// Upstream station of the edge.
    pub fn up(&self) -> StationId {
        self.up
    }

    /// Downstream station of the edge.
    pub fn down(&self) -> StationId {
        self.down
    }

    /// Length of the edge.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// True when `other` covers the same up/down station pair.
    pub fn same_span(&self, other: &Section) -> bool {
        self.up == other.up && self.down == other.down
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section({} -> {}, {})",
            self.up, self.down, self.distance
        )
    }
}
