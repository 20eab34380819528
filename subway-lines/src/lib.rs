//! Subway line topology and route finding.
//!
//! Each line is an ordered chain of directed, weighted sections between
//! stations. This crate keeps every line a single simple path as sections
//! are inserted, split, merged, and removed, and answers shortest-path
//! queries across the union of all lines.

pub mod domain;
pub mod routing;
