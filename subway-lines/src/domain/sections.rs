//! Per-line section collection.
//!
//! [`LineSections`] owns every section of one line and keeps the collection
//! a single simple path: no branches, no cycles, one head and one tail.
//! Every mutation either preserves that shape or fails without touching the
//! line. The section set is searched linearly; lines are short and the set
//! carries no meaningful order.

use tracing::debug;

use super::{Section, SectionError, StationId};

/// The chain of sections making up one line.
///
/// The upstream-most (head) and downstream-most (tail) stations are cached
/// so boundary checks are O(1). Both caches are `None` only in the empty
/// state, before the first section is added.
#[derive(Debug, Clone, Default)]
pub struct LineSections {
    sections: Vec<Section>,
    head_station: Option<StationId>,
    tail_station: Option<StationId>,
}

impl LineSections {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, keeping the line a single simple path.
    ///
    /// The first section initializes the line; after that a candidate must
    /// attach in one of three ways:
    /// - **split**: its up station matches an existing section's up station,
    ///   and it carves that section in two (the candidate must be strictly
    ///   shorter than the section it splits);
    /// - **prepend**: its down station is the current head;
    /// - **append**: its up station is the current tail.
    ///
    /// The split case is tried first. Anything else is rejected, as is a
    /// candidate spanning the current head and tail exactly.
    pub fn add_section(&mut self, candidate: Section) -> Result<(), SectionError> {
        if self.sections.is_empty() {
            self.head_station = Some(candidate.up());
            self.tail_station = Some(candidate.down());
            self.sections.push(candidate);
            debug!(up = %candidate.up(), down = %candidate.down(), "line initialized with first section");
            return Ok(());
        }

        let (Some(head), Some(tail)) = (self.head_station, self.tail_station) else {
            // Caches are populated whenever sections exist.
            return Err(SectionError::InvalidSection {
                up: candidate.up(),
                down: candidate.down(),
            });
        };

        if candidate.up() == head && candidate.down() == tail {
            return Err(SectionError::DuplicateSection {
                up: candidate.up(),
                down: candidate.down(),
            });
        }

        let split_target = self
            .sections
            .iter()
            .position(|s| s.up() == candidate.up());

        let attaches =
            split_target.is_some() || head == candidate.down() || tail == candidate.up();
        if !attaches {
            return Err(SectionError::InvalidSection {
                up: candidate.up(),
                down: candidate.down(),
            });
        }

        if let Some(pos) = split_target {
            return self.split_at(pos, candidate);
        }

        if head == candidate.down() {
            self.head_station = Some(candidate.up());
            debug!(head = %candidate.up(), "section prepended at head");
        } else {
            self.tail_station = Some(candidate.down());
            debug!(tail = %candidate.down(), "section appended at tail");
        }
        self.sections.push(candidate);
        Ok(())
    }

    /// Replace the section at `pos` with the candidate plus the remainder
    /// edge `candidate.down -> existing.down`.
    fn split_at(&mut self, pos: usize, candidate: Section) -> Result<(), SectionError> {
        let existing = self.sections[pos];

        let Some(remainder) = existing.distance().split_remainder(candidate.distance()) else {
            return Err(SectionError::SplitDistanceInvalid {
                candidate: candidate.distance(),
                existing: existing.distance(),
            });
        };
        if candidate.same_span(&existing) {
            return Err(SectionError::DuplicateSection {
                up: candidate.up(),
                down: candidate.down(),
            });
        }

        let rear = Section::new(existing.line(), candidate.down(), existing.down(), remainder);
        self.sections.remove(pos);
        self.sections.push(candidate);
        self.sections.push(rear);
        debug!(
            up = %candidate.up(),
            mid = %candidate.down(),
            down = %rear.down(),
            "section split in two"
        );
        Ok(())
    }

    /// Remove a station from the line.
    ///
    /// Removing the head or tail drops its boundary section and moves the
    /// cache inward. Removing an interior station merges its two adjacent
    /// sections into one whose length is their sum.
    pub fn remove_station(&mut self, target: StationId) -> Result<(), SectionError> {
        if self.sections.len() == 1 {
            return Err(SectionError::SingleSectionRemovalForbidden);
        }

        let front = self.sections.iter().position(|s| s.down() == target);
        let rear = self.sections.iter().position(|s| s.up() == target);

        match (front, rear) {
            (None, None) => Err(SectionError::StationNotOnLine(target)),
            (Some(pos), None) => {
                // Nothing departs from the target: it is the tail.
                let removed = self.sections.remove(pos);
                self.tail_station = Some(removed.up());
                debug!(station = %target, tail = %removed.up(), "tail station removed");
                Ok(())
            }
            (None, Some(pos)) => {
                // Nothing arrives at the target: it is the head.
                let removed = self.sections.remove(pos);
                self.head_station = Some(removed.down());
                debug!(station = %target, head = %removed.down(), "head station removed");
                Ok(())
            }
            (Some(front_pos), Some(rear_pos)) => {
                let front = self.sections[front_pos];
                let rear = self.sections[rear_pos];
                let merged = Section::new(
                    front.line(),
                    front.up(),
                    rear.down(),
                    front.distance().merged(rear.distance()),
                );
                // Remove the higher index first so the lower stays valid.
                let (first, second) = if front_pos < rear_pos {
                    (front_pos, rear_pos)
                } else {
                    (rear_pos, front_pos)
                };
                self.sections.remove(second);
                self.sections.remove(first);
                self.sections.push(merged);
                debug!(
                    station = %target,
                    up = %merged.up(),
                    down = %merged.down(),
                    "interior station removed, sections merged"
                );
                Ok(())
            }
        }
    }

    /// Drop the most recently stored section.
    ///
    /// Legacy removal shim: this pops raw storage order, not the
    /// topological tail edge, and does not refresh the head/tail caches,
    /// so it can leave them pointing past the remaining sections. Prefer
    /// [`remove_station`](Self::remove_station).
    pub fn remove_last_station(&mut self) {
        self.sections.pop();
    }

    /// Ordered head-to-tail station sequence.
    ///
    /// Walks the chain from the head section, following each section's down
    /// station to the next section's up station. Relies on the
    /// single-simple-path shape that every mutation maintains; on an empty
    /// line this returns an empty sequence.
    pub fn stations(&self) -> Vec<StationId> {
        let Some(head) = self.head_station else {
            return Vec::new();
        };
        let Some(mut current) = self.sections.iter().find(|s| s.up() == head) else {
            return Vec::new();
        };

        let mut ordered = Vec::with_capacity(self.sections.len() + 1);
        ordered.push(current.up());
        ordered.push(current.down());

        while ordered.len() <= self.sections.len() {
            match self.sections.iter().find(|s| s.up() == current.down()) {
                Some(next) => {
                    ordered.push(next.down());
                    current = next;
                }
                None => break,
            }
        }

        ordered
    }

    /// Current sections, in storage order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections on the line.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when the line has no sections yet.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Upstream-most station, if the line has any sections.
    pub fn up_station(&self) -> Option<StationId> {
        self.head_station
    }

    /// Downstream-most station, if the line has any sections.
    pub fn down_station(&self) -> Option<StationId> {
        self.tail_station
    }

    /// Sum of all section lengths.
    pub fn total_distance(&self) -> u32 {
        self.sections.iter().map(|s| s.distance().get()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Distance, LineId};

    fn station(id: u64) -> StationId {
        StationId::new(id)
    }

    fn section(up: u64, down: u64, distance: u32) -> Section {
        Section::new(
            LineId::new(1),
            station(up),
            station(down),
            Distance::new(distance).unwrap(),
        )
    }

    /// A→B(3), B→C(4), C→D(5).
    fn chain() -> LineSections {
        let mut line = LineSections::new();
        line.add_section(section(1, 2, 3)).unwrap();
        line.add_section(section(2, 3, 4)).unwrap();
        line.add_section(section(3, 4, 5)).unwrap();
        line
    }

    fn assert_single_path(line: &LineSections) {
        let stations = line.stations();
        assert_eq!(stations.len(), line.len() + 1);
        let mut seen = std::collections::HashSet::new();
        for s in &stations {
            assert!(seen.insert(*s), "station {s} repeated in {stations:?}");
        }
        assert_eq!(stations.first().copied(), line.up_station());
        assert_eq!(stations.last().copied(), line.down_station());
    }

    #[test]
    fn first_section_initializes_boundaries() {
        let mut line = LineSections::new();
        assert!(line.is_empty());
        line.add_section(section(1, 2, 3)).unwrap();
        assert_eq!(line.len(), 1);
        assert_eq!(line.up_station(), Some(station(1)));
        assert_eq!(line.down_station(), Some(station(2)));
    }

    #[test]
    fn chain_round_trip() {
        let line = chain();
        assert_eq!(
            line.stations(),
            vec![station(1), station(2), station(3), station(4)]
        );
        assert_eq!(line.total_distance(), 12);
        assert_single_path(&line);
    }

    #[test]
    fn append_extends_tail() {
        let mut line = chain();
        line.add_section(section(4, 5, 2)).unwrap();
        assert_eq!(line.down_station(), Some(station(5)));
        assert_eq!(line.stations().last(), Some(&station(5)));
        assert_single_path(&line);
    }

    #[test]
    fn prepend_extends_head() {
        let mut line = chain();
        line.add_section(section(0, 1, 2)).unwrap();
        assert_eq!(line.up_station(), Some(station(0)));
        assert_eq!(line.stations().first(), Some(&station(0)));
        assert_single_path(&line);
    }

    #[test]
    fn duplicate_boundary_section_rejected() {
        let mut line = LineSections::new();
        line.add_section(section(1, 2, 3)).unwrap();
        assert_eq!(
            line.add_section(section(1, 2, 3)),
            Err(SectionError::DuplicateSection {
                up: station(1),
                down: station(2),
            })
        );
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn unattached_section_rejected() {
        let mut line = chain();
        assert_eq!(
            line.add_section(section(10, 11, 2)),
            Err(SectionError::InvalidSection {
                up: station(10),
                down: station(11),
            })
        );
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn split_requires_strictly_shorter_distance() {
        let mut line = LineSections::new();
        line.add_section(section(1, 3, 10)).unwrap();
        line.add_section(section(3, 4, 1)).unwrap();
        assert_eq!(
            line.add_section(section(1, 2, 10)),
            Err(SectionError::SplitDistanceInvalid {
                candidate: Distance::new(10).unwrap(),
                existing: Distance::new(10).unwrap(),
            })
        );
        assert_eq!(
            line.add_section(section(1, 2, 12)),
            Err(SectionError::SplitDistanceInvalid {
                candidate: Distance::new(12).unwrap(),
                existing: Distance::new(10).unwrap(),
            })
        );
    }

    #[test]
    fn split_replaces_section_with_two() {
        let mut line = LineSections::new();
        line.add_section(section(1, 3, 10)).unwrap();
        line.add_section(section(3, 4, 1)).unwrap();
        line.add_section(section(1, 2, 4)).unwrap();

        assert_eq!(
            line.stations(),
            vec![station(1), station(2), station(3), station(4)]
        );
        assert_eq!(line.total_distance(), 11);
        let lengths: Vec<(u64, u64, u32)> = line
            .sections()
            .iter()
            .map(|s| (s.up().get(), s.down().get(), s.distance().get()))
            .collect();
        assert!(lengths.contains(&(1, 2, 4)));
        assert!(lengths.contains(&(2, 3, 6)));
        assert_single_path(&line);
    }

    #[test]
    fn split_duplicate_span_rejected() {
        // Re-adding an interior span (not the head/tail boundary) with a
        // shorter distance trips the split duplicate check.
        let mut line = chain();
        assert_eq!(
            line.add_section(section(2, 3, 2)),
            Err(SectionError::DuplicateSection {
                up: station(2),
                down: station(3),
            })
        );
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn rejected_add_leaves_line_unchanged() {
        let mut line = chain();
        let before = line.stations();
        let _ = line.add_section(section(10, 11, 2));
        let _ = line.add_section(section(1, 2, 1));
        assert_eq!(line.stations(), before);
        assert_eq!(line.total_distance(), 12);
    }

    #[test]
    fn single_section_removal_forbidden() {
        let mut line = LineSections::new();
        line.add_section(section(1, 2, 5)).unwrap();
        assert_eq!(
            line.remove_station(station(1)),
            Err(SectionError::SingleSectionRemovalForbidden)
        );
        assert_eq!(
            line.remove_station(station(2)),
            Err(SectionError::SingleSectionRemovalForbidden)
        );
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn remove_unknown_station_rejected() {
        let mut line = chain();
        assert_eq!(
            line.remove_station(station(99)),
            Err(SectionError::StationNotOnLine(station(99)))
        );
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn remove_tail_station() {
        let mut line = chain();
        line.remove_station(station(4)).unwrap();
        assert_eq!(line.down_station(), Some(station(3)));
        assert_eq!(line.stations(), vec![station(1), station(2), station(3)]);
        assert_eq!(line.total_distance(), 7);
        assert_single_path(&line);
    }

    #[test]
    fn remove_head_station() {
        let mut line = chain();
        line.remove_station(station(1)).unwrap();
        assert_eq!(line.up_station(), Some(station(2)));
        assert_eq!(line.stations(), vec![station(2), station(3), station(4)]);
        assert_eq!(line.total_distance(), 9);
        assert_single_path(&line);
    }

    #[test]
    fn remove_interior_station_merges_sections() {
        let mut line = chain();
        line.remove_station(station(3)).unwrap();
        assert_eq!(line.stations(), vec![station(1), station(2), station(4)]);
        assert_eq!(line.len(), 2);
        let lengths: Vec<(u64, u64, u32)> = line
            .sections()
            .iter()
            .map(|s| (s.up().get(), s.down().get(), s.distance().get()))
            .collect();
        assert!(lengths.contains(&(1, 2, 3)));
        assert!(lengths.contains(&(2, 4, 9)));
        assert_single_path(&line);
    }

    #[test]
    fn remove_last_station_pops_storage_order() {
        let mut line = chain();
        line.remove_last_station();
        assert_eq!(line.len(), 2);
        // The boundary caches are deliberately untouched by this legacy op.
        assert_eq!(line.up_station(), Some(station(1)));
        assert_eq!(line.down_station(), Some(station(4)));
    }

    #[test]
    fn empty_line_stations_is_empty() {
        let line = LineSections::new();
        assert!(line.stations().is_empty());
        assert_eq!(line.up_station(), None);
        assert_eq!(line.down_station(), None);
    }
}
