//! Scrollable viewport and element/viewport intersection math.
//!
//! The viewport is the visible window onto the document. Element rectangles
//! live in document coordinates; [`Viewport::client_rect`] maps them into
//! viewport-relative ("client") coordinates, where `y == 0.0` is the top of
//! the visible area.

use serde::{Deserialize, Serialize};

use crate::rect::Rect;

/// A vertically scrollable viewport over a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Visible width in pixels.
    pub width: f64,
    /// Visible height in pixels.
    pub height: f64,
    /// Current vertical scroll offset in document coordinates.
    pub scroll_y: f64,
}

impl Viewport {
    /// Create a viewport at scroll offset zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    /// Set the vertical scroll offset.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// The visible region in client coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Map a document-coordinate rectangle into client coordinates.
    pub fn client_rect(&self, rect: Rect) -> Rect {
        rect.translated_y(-self.scroll_y)
    }

    /// True when the element rectangle is entirely visible vertically.
    ///
    /// Horizontal overflow is ignored: an element wider than the viewport
    /// still counts as contained when both its top and bottom edges sit
    /// inside the visible band.
    pub fn contains_vertically(&self, rect: Rect) -> bool {
        let client = self.client_rect(rect);
        client.y >= 0.0 && client.bottom() <= self.height
    }

    /// True when the element rectangle has strictly positive visible area.
    pub fn intersects(&self, rect: Rect) -> bool {
        self.rect().intersection(&self.client_rect(rect)).is_some()
    }

    /// Visible fraction of the element's area, in `0.0..=1.0`.
    ///
    /// Degenerate (zero-area) rectangles report `0.0`.
    pub fn intersection_ratio(&self, rect: Rect) -> f64 {
        let total = rect.area();
        if total <= 0.0 {
            return 0.0;
        }
        let visible = self
            .rect()
            .intersection(&self.client_rect(rect))
            .map(|r| r.area())
            .unwrap_or(0.0);
        (visible / total).clamp(0.0, 1.0)
    }
}
