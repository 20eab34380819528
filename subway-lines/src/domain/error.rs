//! Topology error types.
//!
//! These errors represent rejected line mutations. A failed call leaves the
//! line exactly as it was; nothing is partially applied or silently fixed up.

use super::{Distance, StationId};

/// Errors raised by line topology mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// The candidate's up/down station pair is already registered.
    #[error("section {up} -> {down} is already registered on this line")]
    DuplicateSection { up: StationId, down: StationId },

    /// The candidate attaches at neither the head, the tail, nor an
    /// existing section's up station.
    #[error("section {up} -> {down} does not attach to the line")]
    InvalidSection { up: StationId, down: StationId },

    /// A splitting section must be strictly shorter than the section it
    /// splits.
    #[error("split distance {candidate} must be shorter than the existing section length {existing}")]
    SplitDistanceInvalid {
        candidate: Distance,
        existing: Distance,
    },

    /// A line with a single section keeps it; neither of its stations can
    /// be removed.
    #[error("cannot remove a station from a line with a single section")]
    SingleSectionRemovalForbidden,

    /// The station to remove is not an endpoint of any section on the line.
    #[error("station {0} is not registered on this line")]
    StationNotOnLine(StationId),
}
