//! Scroll-direction classification from intersection records.
//!
//! [`entry_direction`] maps one intersection record plus the previous record's
//! position and ratio to one of four directional states. The element's top
//! edge moving up in client coordinates (`y` decreasing) means the user is
//! scrolling down, and vice versa; within each motion the ratio delta decides
//! whether the element is entering or leaving the viewport.
//!
//! This is a heuristic, not a guaranteed-correct classifier: only a single
//! ratio delta is consulted, so rapid multi-threshold crossings between two
//! records can produce ambiguous readings.

use serde::{Deserialize, Serialize};

use reveal_dom::{Rect, Viewport};

/// Directional state of an element crossing the viewport boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Scrolling up, element entering the viewport.
    UpEnter,
    /// Scrolling up, element leaving the viewport.
    UpLeave,
    /// Scrolling down, element entering the viewport.
    DownEnter,
    /// Scrolling down, element leaving the viewport.
    DownLeave,
}

impl Direction {
    /// True for the two entering states.
    pub fn is_entering(&self) -> bool {
        matches!(self, Self::UpEnter | Self::DownEnter)
    }

    /// True for the two leaving states.
    pub fn is_leaving(&self) -> bool {
        !self.is_entering()
    }
}

/// One observation of an element relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionRecord {
    /// Top edge of the element in client coordinates.
    pub y: f64,
    /// Visible fraction of the element's area, `0.0..=1.0`.
    pub ratio: f64,
    /// Whether any area of the element is visible.
    pub is_intersecting: bool,
}

impl IntersectionRecord {
    /// Capture a record for an element rectangle against a viewport.
    pub fn capture(viewport: &Viewport, rect: Rect) -> Self {
        Self {
            y: viewport.client_rect(rect).y,
            ratio: viewport.intersection_ratio(rect),
            is_intersecting: viewport.intersects(rect),
        }
    }
}

/// Previous-record memory consulted by [`entry_direction`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObservationState {
    /// Top edge of the element at the previous record.
    pub prev_y: f64,
    /// Intersection ratio at the previous record.
    pub prev_ratio: f64,
}

impl ObservationState {
    /// Overwrite the memory with a record's position and ratio.
    pub fn remember(&mut self, record: &IntersectionRecord) {
        self.prev_y = record.y;
        self.prev_ratio = record.ratio;
    }
}

/// Classify a record against the previous state.
///
/// Returns `None` when the element's position is unchanged, or when it moved
/// up the page without intersecting the viewport.
pub fn entry_direction(
    record: &IntersectionRecord,
    state: &ObservationState,
) -> Option<Direction> {
    if record.y < state.prev_y {
        // Element moving up on screen: user is scrolling down.
        if record.ratio > state.prev_ratio && record.is_intersecting {
            Some(Direction::DownEnter)
        } else {
            Some(Direction::DownLeave)
        }
    } else if record.y > state.prev_y && record.is_intersecting {
        // Element moving down on screen: user is scrolling up.
        if record.ratio < state.prev_ratio {
            Some(Direction::UpLeave)
        } else {
            Some(Direction::UpEnter)
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(y: f64, ratio: f64, is_intersecting: bool) -> IntersectionRecord {
        IntersectionRecord {
            y,
            ratio,
            is_intersecting,
        }
    }

    fn state(prev_y: f64, prev_ratio: f64) -> ObservationState {
        ObservationState { prev_y, prev_ratio }
    }

    #[test]
    fn test_scrolling_down_entering() {
        // y decreased, ratio increased, intersecting
        let dir = entry_direction(&record(500.0, 0.4, true), &state(600.0, 0.1));
        assert_eq!(dir, Some(Direction::DownEnter));
    }

    #[test]
    fn test_scrolling_down_leaving() {
        // y decreased but ratio fell: element sliding out the top
        let dir = entry_direction(&record(-50.0, 0.2, true), &state(0.0, 0.6));
        assert_eq!(dir, Some(Direction::DownLeave));

        // y decreased and no longer intersecting at all
        let dir = entry_direction(&record(-200.0, 0.0, false), &state(-50.0, 0.2));
        assert_eq!(dir, Some(Direction::DownLeave));

        // Ratio increase without intersection still counts as leaving
        let dir = entry_direction(&record(500.0, 0.3, false), &state(600.0, 0.1));
        assert_eq!(dir, Some(Direction::DownLeave));
    }

    #[test]
    fn test_scrolling_up_entering() {
        // y increased, ratio increased, intersecting
        let dir = entry_direction(&record(-50.0, 0.5, true), &state(-150.0, 0.2));
        assert_eq!(dir, Some(Direction::UpEnter));

        // Flat ratio while intersecting also classifies as entering
        let dir = entry_direction(&record(-50.0, 0.5, true), &state(-150.0, 0.5));
        assert_eq!(dir, Some(Direction::UpEnter));
    }

    #[test]
    fn test_scrolling_up_leaving() {
        // y increased, ratio decreased, intersecting: sliding out the bottom
        let dir = entry_direction(&record(550.0, 0.2, true), &state(450.0, 0.6));
        assert_eq!(dir, Some(Direction::UpLeave));
    }

    #[test]
    fn test_unclassifiable_records() {
        // Position unchanged
        assert_eq!(entry_direction(&record(100.0, 0.5, true), &state(100.0, 0.5)), None);

        // Moving down the page while not intersecting
        assert_eq!(entry_direction(&record(700.0, 0.0, false), &state(650.0, 0.0)), None);
    }

    #[test]
    fn test_capture_against_viewport() {
        let mut viewport = Viewport::new(800.0, 600.0);
        let rect = Rect::new(0.0, 650.0, 100.0, 100.0);

        let rec = IntersectionRecord::capture(&viewport, rect);
        assert_eq!(rec.y, 650.0);
        assert!(!rec.is_intersecting);

        viewport.scroll_to(100.0);
        let rec = IntersectionRecord::capture(&viewport, rect);
        assert_eq!(rec.y, 550.0);
        assert!(rec.is_intersecting);
        assert!((rec.ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_state_remember() {
        let mut st = ObservationState::default();
        st.remember(&record(42.0, 0.7, true));
        assert_eq!(st, state(42.0, 0.7));
    }
}
