//! Scroll-poll fallback for hosts without intersection observation.
//!
//! The fallback polls every candidate on each scroll step and applies
//! revealed styling once the element's rectangle fits vertically inside the
//! viewport, or once its top edge has passed above it. It never reverts an
//! element to hidden, an intentional asymmetry with the driver path.

use tracing::debug;

use crate::descriptor::{AnimationDescriptor, AnimationRegistry};
use crate::error::{Result, RevealError};
use crate::events::{EventQueue, RevealEvent, RevealPhase};
use crate::styler::{ANIMATED_ATTR, StyleMemory, apply_hidden, apply_reveal};
use crate::watcher::{ANIMATE_ATTR, ANIMATION_ATTR};
use reveal_dom::{Document, ElementId, Viewport};

#[derive(Debug)]
struct FallbackCandidate {
    element: ElementId,
    animation: String,
    descriptor: Option<AnimationDescriptor>,
    memory: StyleMemory,
    revealed: bool,
}

/// One-way reveal engine driven by scroll polling.
#[derive(Debug, Default)]
pub struct ScrollFallback {
    candidates: Vec<FallbackCandidate>,
    events: EventQueue,
}

impl ScrollFallback {
    /// Create an empty fallback engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate element and put it in the hidden state.
    ///
    /// The element must carry the `data-animate` marker. No containment
    /// check happens here; the next [`Self::on_scroll`] picks up elements
    /// that are already visible.
    pub fn observe(
        &mut self,
        doc: &mut Document,
        element: ElementId,
        registry: &AnimationRegistry,
    ) -> Result<()> {
        let el = doc.element(element)?;
        if !el.has_attribute(ANIMATE_ATTR) {
            return Err(RevealError::NotACandidate(element));
        }

        let animation = el.attribute(ANIMATION_ATTR).unwrap_or_default().to_string();
        let descriptor = registry.get(&animation).cloned();
        match &descriptor {
            Some(descriptor) => apply_hidden(doc, element, descriptor)?,
            None => {
                doc.element_mut(element)?.set_attribute(ANIMATED_ATTR, "false");
            }
        }

        self.candidates.push(FallbackCandidate {
            element,
            animation,
            descriptor,
            memory: StyleMemory::new(),
            revealed: false,
        });
        Ok(())
    }

    /// Scan all candidates against the current viewport position.
    ///
    /// Returns the number of elements revealed by this scan.
    pub fn on_scroll(&mut self, doc: &mut Document, viewport: &Viewport) -> Result<usize> {
        let mut revealed = 0;
        for candidate in &mut self.candidates {
            if candidate.revealed {
                continue;
            }
            let rect = doc.element(candidate.element)?.rect();
            let above = viewport.client_rect(rect).y < 0.0;
            if !above && !viewport.contains_vertically(rect) {
                continue;
            }

            // Elements that scrolled past without being seen get no transition
            match &candidate.descriptor {
                Some(descriptor) => {
                    apply_reveal(doc, candidate.element, descriptor, &mut candidate.memory, above)?;
                }
                None => {
                    doc.element_mut(candidate.element)?.set_attribute(ANIMATED_ATTR, "true");
                }
            }
            candidate.revealed = true;
            revealed += 1;

            debug!(element = ?candidate.element, above, "fallback reveal");
            self.events.push(RevealEvent {
                element: candidate.element,
                animation: candidate.animation.clone(),
                direction: None,
                phase: RevealPhase::Revealed,
            });
        }
        Ok(revealed)
    }

    /// Drain all pending reveal events.
    pub fn drain_events(&mut self) -> Vec<RevealEvent> {
        self.events.drain()
    }

    /// Number of registered candidates.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}
