//! Per-element reveal watcher.
//!
//! One watcher owns one element: its previous-record memory, its resolved
//! animation descriptor, and the styles it has applied. The original page
//! script kept this state in a closure per observed element; here it is an
//! explicit struct owned by the driving engine.

use tracing::{debug, warn};

use crate::descriptor::{AnimationDescriptor, AnimationRegistry};
use crate::direction::{Direction, IntersectionRecord, ObservationState, entry_direction};
use crate::error::{Result, RevealError};
use crate::events::{RevealEvent, RevealPhase};
use crate::styler::{ANIMATED_ATTR, StyleMemory, apply_hidden, apply_reveal, remove_reveal};
use reveal_dom::{Document, ElementId, Viewport};

/// Marker attribute that makes an element a reveal candidate.
pub const ANIMATE_ATTR: &str = "data-animate";

/// Attribute naming the animation a candidate uses.
pub const ANIMATION_ATTR: &str = "data-animation";

/// Watches a single element and toggles its reveal styling as intersection
/// records arrive.
#[derive(Debug)]
pub struct ElementWatcher {
    element: ElementId,
    animation: String,
    descriptor: Option<AnimationDescriptor>,
    state: ObservationState,
    memory: StyleMemory,
    revealed: bool,
}

impl ElementWatcher {
    /// Construct a watcher for a candidate element.
    ///
    /// The element must carry the `data-animate` marker. Its `data-animation`
    /// name is resolved against the registry once; an unknown or missing name
    /// leaves the watcher toggling only the `data-animated` marker, with no
    /// style mutation.
    ///
    /// If the element is already fully visible vertically, or its top edge
    /// sits above the viewport, revealed styling is applied immediately with
    /// no transition.
    pub fn new(
        doc: &mut Document,
        viewport: &Viewport,
        registry: &AnimationRegistry,
        element: ElementId,
    ) -> Result<Self> {
        let el = doc.element(element)?;
        if !el.has_attribute(ANIMATE_ATTR) {
            return Err(RevealError::NotACandidate(element));
        }

        let animation = el.attribute(ANIMATION_ATTR).unwrap_or_default().to_string();
        let descriptor = registry.get(&animation).cloned();
        if descriptor.is_none() {
            warn!(?element, %animation, "no registered animation for element");
        }

        let rect = el.rect();
        let mut watcher = Self {
            element,
            animation,
            descriptor,
            state: ObservationState::default(),
            memory: StyleMemory::new(),
            revealed: false,
        };

        // Elements already in view, or above it when watching starts, are
        // revealed up front rather than waiting for a scroll to reach them.
        let client = viewport.client_rect(rect);
        if viewport.contains_vertically(rect) || client.y < 0.0 {
            watcher.reveal(doc, true)?;
        } else {
            watcher.hide_initial(doc)?;
        }

        Ok(watcher)
    }

    /// The watched element.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// The animation name the element carries.
    pub fn animation(&self) -> &str {
        &self.animation
    }

    /// Whether revealed styling is currently applied.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection record to the watcher.
    ///
    /// An entering direction applies revealed styling; any other record,
    /// leaving or unclassifiable, removes it. Unclassifiable records count as
    /// leaving because up-scroll exits cross the boundary only after the
    /// element has stopped intersecting, where no direction can be derived.
    /// The previous-record memory is overwritten in every case. Returns the
    /// state change, if any.
    pub fn on_record(
        &mut self,
        doc: &mut Document,
        record: IntersectionRecord,
    ) -> Result<Option<RevealEvent>> {
        let direction = entry_direction(&record, &self.state);
        self.state.remember(&record);

        let entering = direction.is_some_and(|d| d.is_entering());
        let event = if entering && !self.revealed {
            self.reveal(doc, false)?;
            Some(self.event(direction, RevealPhase::Revealed))
        } else if !entering && self.revealed {
            self.hide(doc)?;
            Some(self.event(direction, RevealPhase::Hidden))
        } else {
            None
        };

        if let Some(event) = &event {
            debug!(?event, "watcher state change");
        }
        Ok(event)
    }

    /// The event describing this watcher's construction-time reveal, if the
    /// element was revealed immediately.
    pub fn initial_event(&self) -> Option<RevealEvent> {
        self.revealed
            .then(|| self.event(None, RevealPhase::Revealed))
    }

    fn reveal(&mut self, doc: &mut Document, immediate: bool) -> Result<()> {
        match &self.descriptor {
            Some(descriptor) => {
                apply_reveal(doc, self.element, descriptor, &mut self.memory, immediate)?;
            }
            None => {
                doc.element_mut(self.element)?.set_attribute(ANIMATED_ATTR, "true");
            }
        }
        self.revealed = true;
        Ok(())
    }

    fn hide(&mut self, doc: &mut Document) -> Result<()> {
        match &self.descriptor {
            Some(_) => remove_reveal(doc, self.element, &mut self.memory)?,
            None => {
                doc.element_mut(self.element)?.set_attribute(ANIMATED_ATTR, "false");
            }
        }
        self.revealed = false;
        Ok(())
    }

    fn hide_initial(&mut self, doc: &mut Document) -> Result<()> {
        match &self.descriptor {
            Some(descriptor) => apply_hidden(doc, self.element, descriptor)?,
            None => {
                doc.element_mut(self.element)?.set_attribute(ANIMATED_ATTR, "false");
            }
        }
        Ok(())
    }

    fn event(&self, direction: Option<Direction>, phase: RevealPhase) -> RevealEvent {
        RevealEvent {
            element: self.element,
            animation: self.animation.clone(),
            direction,
            phase,
        }
    }
}
