//! Page-level wiring: candidate enumeration and the capability branch.
//!
//! [`init_document`] is the equivalent of the original page initializer: it
//! enumerates every element carrying the `data-animate` marker, wires a
//! watcher to each, and hands back either the intersection-driven engine or
//! the scroll-poll fallback depending on host capabilities.

use tracing::info;

use crate::descriptor::AnimationRegistry;
use crate::driver::{DriverOptions, IntersectionDriver};
use crate::error::Result;
use crate::events::RevealEvent;
use crate::fallback::ScrollFallback;
use crate::watcher::{ANIMATE_ATTR, ElementWatcher};
use reveal_dom::{Document, Selector, Viewport};

/// Host capabilities consulted when choosing an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether intersection observation is available.
    pub intersection_observer: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            intersection_observer: true,
        }
    }
}

/// A running reveal engine, either observer-driven or polling.
#[derive(Debug)]
pub enum RevealEngine {
    /// Edge-triggered intersection driving.
    Observer(IntersectionDriver),
    /// One-way scroll polling.
    Fallback(ScrollFallback),
}

impl RevealEngine {
    /// Scroll the viewport and let the engine react.
    ///
    /// Returns the number of records dispatched (observer) or elements
    /// revealed (fallback).
    pub fn scroll_to(
        &mut self,
        doc: &mut Document,
        viewport: &mut Viewport,
        y: f64,
    ) -> Result<usize> {
        match self {
            Self::Observer(driver) => driver.scroll_to(doc, viewport, y),
            Self::Fallback(fallback) => {
                viewport.scroll_to(y);
                fallback.on_scroll(doc, viewport)
            }
        }
    }

    /// Drain all pending reveal events.
    pub fn drain_events(&mut self) -> Vec<RevealEvent> {
        match self {
            Self::Observer(driver) => driver.drain_events(),
            Self::Fallback(fallback) => fallback.drain_events(),
        }
    }

    /// Number of watched candidate elements.
    pub fn watched_count(&self) -> usize {
        match self {
            Self::Observer(driver) => driver.watcher_count(),
            Self::Fallback(fallback) => fallback.candidate_count(),
        }
    }
}

/// Enumerate `[data-animate]` candidates and wire up an engine for them.
pub fn init_document(
    doc: &mut Document,
    viewport: &Viewport,
    registry: &AnimationRegistry,
    options: DriverOptions,
    capabilities: Capabilities,
) -> Result<RevealEngine> {
    let candidates = doc.query_all(&Selector::parse(&format!("[{ANIMATE_ATTR}]"))?);
    info!(
        candidates = candidates.len(),
        observer = capabilities.intersection_observer,
        "initializing reveal engine"
    );

    if capabilities.intersection_observer {
        let mut driver = IntersectionDriver::new(options);
        for element in candidates {
            let watcher = ElementWatcher::new(doc, viewport, registry, element)?;
            driver.observe(doc, viewport, watcher)?;
        }
        Ok(RevealEngine::Observer(driver))
    } else {
        let mut fallback = ScrollFallback::new();
        for element in candidates {
            fallback.observe(doc, element, registry)?;
        }
        // One immediate scan so already-visible elements reveal at startup
        fallback.on_scroll(doc, viewport)?;
        Ok(RevealEngine::Fallback(fallback))
    }
}
