// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracking: total pointer offset since press, plus click-versus-drag
//! discrimination.
//!
//! A gesture counts as a drag once the pointer has strayed more than the
//! threshold from its press position on either axis. The flag is sticky: moving
//! back to the press position does not turn a drag back into a click.
//!
//! ```
//! use chronos_interaction::DragTracker;
//! use kurbo::{Point, Vec2};
//!
//! let mut drag = DragTracker::new(3.0);
//! drag.start(Point::new(10.0, 20.0));
//!
//! assert_eq!(drag.update(Point::new(12.0, 21.0)), Some(Vec2::new(2.0, 1.0)));
//! assert!(!drag.moved());
//!
//! drag.update(Point::new(14.0, 20.0));
//! assert!(drag.moved());
//!
//! drag.update(Point::new(10.0, 20.0));
//! assert!(drag.moved());
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer gesture.
#[derive(Clone, Copy, Debug)]
pub struct DragTracker {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    threshold: f64,
    moved: bool,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(3.0)
    }
}

impl DragTracker {
    /// Creates an idle tracker with the given click threshold in pixels.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            threshold,
            moved: false,
        }
    }

    /// Starts a new gesture at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.moved = false;
    }

    /// Records a new position and returns the total offset from the press.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        self.last_pos = Some(pos);
        let offset = pos - start;
        if offset.x.abs() > self.threshold || offset.y.abs() > self.threshold {
            self.moved = true;
        }
        Some(offset)
    }

    /// Total offset of `pos` from the press position.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Last recorded position.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }

    /// Ends the gesture.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.moved = false;
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the gesture has exceeded the click threshold.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_tracker_reports_nothing() {
        let mut drag = DragTracker::default();
        assert!(!drag.is_active());
        assert_eq!(drag.update(Point::new(5.0, 5.0)), None);
        assert_eq!(drag.total_offset(Point::new(5.0, 5.0)), None);
        assert!(drag.last_pos().is_none());
    }

    #[test]
    fn threshold_is_exclusive_on_each_axis() {
        let mut drag = DragTracker::new(3.0);
        drag.start(Point::ZERO);
        drag.update(Point::new(3.0, -3.0));
        assert!(!drag.moved());
        drag.update(Point::new(0.0, -3.5));
        assert!(drag.moved());
    }

    #[test]
    fn offsets_are_relative_to_the_press() {
        let mut drag = DragTracker::new(3.0);
        drag.start(Point::new(100.0, 100.0));
        drag.update(Point::new(110.0, 95.0));
        assert_eq!(
            drag.update(Point::new(90.0, 85.0)),
            Some(Vec2::new(-10.0, -15.0))
        );
        assert_eq!(drag.last_pos(), Some(Point::new(90.0, 85.0)));
    }

    #[test]
    fn restart_clears_the_moved_flag() {
        let mut drag = DragTracker::new(3.0);
        drag.start(Point::ZERO);
        drag.update(Point::new(50.0, 0.0));
        assert!(drag.moved());

        drag.start(Point::new(50.0, 60.0));
        assert!(!drag.moved());
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );

        drag.end();
        assert!(!drag.is_active());
    }
}
