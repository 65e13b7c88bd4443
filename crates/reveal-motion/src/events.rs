//! Reveal lifecycle events.
//!
//! Watchers report state changes as events pushed onto a drainable queue
//! owned by the engine. Events are purely observational; nothing in the
//! engine depends on them being consumed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use reveal_dom::ElementId;

/// Which way an element's reveal state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// Revealed styling was applied.
    Revealed,
    /// Revealed styling was removed.
    Hidden,
}

/// One reveal state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealEvent {
    /// The element whose state changed.
    pub element: ElementId,
    /// The animation name the element carries.
    pub animation: String,
    /// The classified direction, or `None` for reveals applied at
    /// construction time.
    pub direction: Option<Direction>,
    /// Which way the state changed.
    pub phase: RevealPhase,
}

/// FIFO queue of reveal events.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<RevealEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&mut self, event: RevealEvent) {
        self.events.push_back(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<RevealEvent> {
        self.events.drain(..).collect()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when no events are pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
