//! Domain types for subway line topology.
//!
//! This module contains the core model: identity tokens for stations and
//! lines, validated section lengths, and the per-line section collection
//! that enforces the single-simple-path shape. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod error;
mod line;
mod section;
mod sections;
mod station;

pub use error::SectionError;
pub use line::{Line, LineTopology};
pub use section::{Distance, InvalidDistance, Section};
pub use sections::LineSections;
pub use station::{LineId, StationId};
