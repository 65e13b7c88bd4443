//! Scroll-driven reveal engine.
//!
//! This crate watches elements of a [`reveal_dom::Document`] as a
//! [`reveal_dom::Viewport`] scrolls over it, and applies or removes reveal
//! styling when an element crosses into or out of view, based on scroll
//! direction:
//!
//! - **Direction classification**: a pure function mapping one intersection
//!   record plus the previous record to an entering/leaving direction
//! - **Per-element watchers**: own the previous-record state and the styles
//!   they applied, toggling the `data-animated` marker
//! - **Intersection driver**: edge-triggered record dispatch as the viewport
//!   scrolls, with root/margin/threshold options
//! - **Scroll-poll fallback**: one-way reveals for hosts without
//!   intersection observation
//!
//! # Architecture
//!
//! ```text
//! init_document
//!   ├── IntersectionDriver           (capability: observer available)
//!   │     └── ElementWatcher per [data-animate] element
//!   │           └── entry_direction + apply/remove styling
//!   └── ScrollFallback               (capability: observer unavailable)
//!         └── containment scan per scroll, reveal-only
//! ```

pub mod descriptor;
pub mod direction;
pub mod driver;
pub mod engine;
pub mod error;
pub mod events;
pub mod fallback;
pub mod style;
pub mod styler;
pub mod watcher;

pub use descriptor::{AnimationDescriptor, AnimationRegistry};
pub use direction::{Direction, IntersectionRecord, ObservationState, entry_direction};
pub use driver::{DriverOptions, IntersectionDriver};
pub use engine::{Capabilities, RevealEngine, init_document};
pub use error::{Result, RevealError};
pub use events::{EventQueue, RevealEvent, RevealPhase};
pub use fallback::ScrollFallback;
pub use style::{StyleDecl, parse_style_block};
pub use styler::{ANIMATED_ATTR, StyleMemory, apply_hidden, apply_reveal, remove_reveal};
pub use watcher::{ANIMATE_ATTR, ANIMATION_ATTR, ElementWatcher};
