//! Drag tracking for the selection overlay.
//!
//! This module contains the pure state machine behind a capture attempt:
//! mouse-down anchors a corner, mouse-move stretches the rectangle,
//! mouse-up finalizes it.

use crate::geometry::{Point, Rect};

/// Phases of one selection attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for mouse-down.
    #[default]
    Idle,
    /// Dragging; both corners are live.
    Selecting,
    /// Mouse-up happened; the attempt is over.
    Finalized,
}

/// Tracks one mouse drag from press to release and produces the normalized
/// selection rectangle.
///
/// One tracker lives for one overlay instance and finalizes at most once.
#[derive(Debug, Default)]
pub struct DragTracker {
    phase: Phase,
    start: Point,
    current: Point,
}

impl DragTracker {
    /// The current phase of the attempt.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mouse-down: records the anchor corner and enters `Selecting`.
    /// Ignored unless the tracker is idle.
    pub fn press(&mut self, at: Point) {
        if self.phase == Phase::Idle {
            self.start = at;
            self.current = at;
            self.phase = Phase::Selecting;
        }
    }

    /// Mouse-move: updates the live corner while a drag is in progress.
    pub fn drag(&mut self, to: Point) {
        if self.phase == Phase::Selecting {
            self.current = to;
        }
    }

    /// Mouse-up: finalizes the attempt.
    ///
    /// Returns the normalized rectangle when it has positive area; a click
    /// without a drag returns `None` (the deliberate no-op cancel). `at` is
    /// the release position when the toolkit still reports one. Emits at
    /// most once per tracker.
    pub fn release(&mut self, at: Option<Point>) -> Option<Rect> {
        if self.phase != Phase::Selecting {
            return None;
        }
        if let Some(at) = at {
            self.current = at;
        }
        self.phase = Phase::Finalized;

        let rect = Rect::from_corners(self.start, self.current);
        rect.has_area().then_some(rect)
    }

    /// The rectangle currently spanned by the drag, for live painting.
    pub fn live_rect(&self) -> Option<Rect> {
        (self.phase == Phase::Selecting).then(|| Rect::from_corners(self.start, self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_produces_the_normalized_rect() {
        let mut tracker = DragTracker::default();
        tracker.press(Point::new(100, 100));
        tracker.drag(Point::new(80, 200));
        let rect = tracker.release(Some(Point::new(50, 300)));
        assert_eq!(
            rect,
            Some(Rect {
                x: 50,
                y: 100,
                width: 50,
                height: 200
            })
        );
        assert_eq!(tracker.phase(), Phase::Finalized);
    }

    #[test]
    fn click_without_movement_is_a_cancel() {
        let mut tracker = DragTracker::default();
        tracker.press(Point::new(10, 10));
        assert_eq!(tracker.release(Some(Point::new(10, 10))), None);
        assert_eq!(tracker.phase(), Phase::Finalized);
    }

    #[test]
    fn release_emits_at_most_once() {
        let mut tracker = DragTracker::default();
        tracker.press(Point::new(0, 0));
        tracker.drag(Point::new(5, 5));
        assert!(tracker.release(None).is_some());
        assert_eq!(tracker.release(None), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.release(Some(Point::new(5, 5))), None);
        assert_eq!(tracker.phase(), Phase::Idle);
    }

    #[test]
    fn second_press_keeps_the_anchor() {
        let mut tracker = DragTracker::default();
        tracker.press(Point::new(0, 0));
        tracker.press(Point::new(50, 50));
        tracker.drag(Point::new(10, 10));
        assert_eq!(
            tracker.release(None),
            Some(Rect {
                x: 0,
                y: 0,
                width: 10,
                height: 10
            })
        );
    }

    #[test]
    fn live_rect_tracks_the_drag() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.live_rect(), None);
        tracker.press(Point::new(10, 10));
        tracker.drag(Point::new(4, 20));
        assert_eq!(
            tracker.live_rect(),
            Some(Rect {
                x: 4,
                y: 10,
                width: 6,
                height: 10
            })
        );
    }

    #[test]
    fn release_falls_back_to_the_last_dragged_corner() {
        let mut tracker = DragTracker::default();
        tracker.press(Point::new(0, 0));
        tracker.drag(Point::new(30, 40));
        assert_eq!(
            tracker.release(None),
            Some(Rect {
                x: 0,
                y: 0,
                width: 30,
                height: 40
            })
        );
    }
}
