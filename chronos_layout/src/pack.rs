// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-fit greedy lane packing.

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Smallest duration, in years, used when deriving an overlap buffer.
///
/// Zero-length and inverted intervals are clamped to this before the buffer
/// is computed so they still get a positive (if tiny) buffer.
pub const MIN_DURATION: f64 = 1e-6;

/// A half-open interval `[start, end)` in world years, as stored in a lane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    /// Start year.
    pub start: f64,
    /// End year.
    pub end: f64,
}

impl Interval {
    /// Creates an interval.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Assigns intervals to the first lane they fit in.
///
/// The overlap test is directional: only the *candidate* is inflated, by
/// `buffer_ratio` of its own duration on each side, while intervals already
/// stored in a lane are compared as-is. A candidate overlaps a stored interval
/// when `max(start - buf, stored.start) < min(end + buf, stored.end)`.
///
/// Intervals should be fed in ascending start order for the packing to be
/// meaningful; the packer itself does not sort.
#[derive(Clone, Debug)]
pub struct LanePacker {
    lanes: Vec<SmallVec<[Interval; 4]>>,
    buffer_ratio: f64,
}

impl LanePacker {
    /// Creates an empty packer.
    #[must_use]
    pub fn new(buffer_ratio: f64) -> Self {
        Self {
            lanes: Vec::new(),
            buffer_ratio,
        }
    }

    /// Number of lanes opened so far.
    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Intervals stored in `lane`, in placement order.
    #[must_use]
    pub fn lane(&self, lane: usize) -> &[Interval] {
        self.lanes.get(lane).map_or(&[], |l| l.as_slice())
    }

    /// Places `[start, end]` in the lowest lane where it does not overlap,
    /// opening a new lane if none fits. Returns the lane index.
    pub fn place(&mut self, start: f64, end: f64) -> usize {
        let buffer = (end - start).max(MIN_DURATION) * self.buffer_ratio;
        let lo = start - buffer;
        let hi = end + buffer;

        let free = self
            .lanes
            .iter()
            .position(|stored| !stored.iter().any(|r| lo.max(r.start) < hi.min(r.end)));
        let lane = match free {
            Some(lane) => lane,
            None => {
                self.lanes.push(SmallVec::new());
                self.lanes.len() - 1
            }
        };
        self.lanes[lane].push(Interval::new(start, end));
        lane
    }

    /// Returns `true` if a candidate `[start, end]` would collide with an
    /// interval already stored in `lane`.
    #[must_use]
    pub fn overlaps(&self, lane: usize, start: f64, end: f64) -> bool {
        let buffer = (end - start).max(MIN_DURATION) * self.buffer_ratio;
        let lo = start - buffer;
        let hi = end + buffer;
        self.lane(lane)
            .iter()
            .any(|r| lo.max(r.start) < hi.min(r.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fit_reuses_lower_lanes() {
        let mut packer = LanePacker::new(0.05);
        assert_eq!(packer.place(0.0, 100.0), 0);
        assert_eq!(packer.place(50.0, 150.0), 1);
        assert_eq!(packer.place(300.0, 400.0), 0);
        assert_eq!(packer.lane_count(), 2);
        assert_eq!(packer.lane(0).len(), 2);
    }

    #[test]
    fn buffer_comes_from_the_candidate_only() {
        let mut packer = LanePacker::new(0.05);
        packer.place(0.0, 100.0);

        // A long candidate starting 40 years after the stored end gets a
        // 50-year buffer and collides.
        assert!(packer.overlaps(0, 140.0, 1140.0));
        // A short candidate at the same start gets a 0.5-year buffer and fits.
        assert!(!packer.overlaps(0, 140.0, 150.0));
    }

    #[test]
    fn touching_intervals_collide_through_the_buffer() {
        let mut packer = LanePacker::new(0.05);
        packer.place(0.0, 100.0);
        assert_eq!(packer.place(100.0, 200.0), 1);
    }

    #[test]
    fn degenerate_intervals_do_not_poison_packing() {
        let mut packer = LanePacker::new(0.05);
        assert_eq!(packer.place(10.0, 10.0), 0);
        // Inverted: the clamp keeps the buffer positive and finite.
        let lane = packer.place(30.0, 20.0);
        assert!(lane <= 1);
        assert_eq!(packer.place(1000.0, 2000.0), 0);
    }

    #[test]
    fn zero_ratio_packs_exact_touching_intervals_together() {
        let mut packer = LanePacker::new(0.0);
        packer.place(0.0, 100.0);
        assert_eq!(packer.place(100.0, 200.0), 0);
    }

    #[test]
    fn missing_lane_is_empty() {
        let packer = LanePacker::new(0.05);
        assert!(packer.lane(3).is_empty());
        assert!(!packer.overlaps(3, 0.0, 1.0));
    }
}
