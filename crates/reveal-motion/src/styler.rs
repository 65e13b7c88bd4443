//! Applying and removing reveal styling.
//!
//! Applying a descriptor writes its revealed-state declarations onto the
//! watched element (or its matching descendants) and records every inline
//! value it overwrites. Removing restores exactly those recorded values, so
//! an apply/remove round trip leaves the element's inline styles untouched.
//!
//! The `data-animated` marker attribute tracks the reveal state: `"true"`
//! while revealed, `"false"` while hidden.

use std::collections::HashMap;

use tracing::debug;

use crate::descriptor::AnimationDescriptor;
use crate::error::{Result, RevealError};
use reveal_dom::{Document, ElementId, Selector};

/// The state marker attribute written by the engine.
pub const ANIMATED_ATTR: &str = "data-animated";

const TRANSITION_DELAY: &str = "transition-delay";

/// Inline values recorded for one styled target: `None` means the property
/// was absent before the reveal was applied.
type TargetSnapshot = Vec<(String, Option<String>)>;

/// Recorded pre-reveal styles, keyed by watched element.
#[derive(Debug, Clone, Default)]
pub struct StyleMemory {
    applied: HashMap<ElementId, Vec<(ElementId, TargetSnapshot)>>,
}

impl StyleMemory {
    /// Create an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a reveal is currently applied to `element`.
    pub fn is_applied(&self, element: ElementId) -> bool {
        self.applied.contains_key(&element)
    }
}

/// Write the hidden-state declarations for `descriptor` onto the element's
/// styling targets and mark the element as not animated.
///
/// No original values are recorded: the hidden state is the element's
/// baseline, applied once before any watching begins.
pub fn apply_hidden(
    doc: &mut Document,
    element: ElementId,
    descriptor: &AnimationDescriptor,
) -> Result<()> {
    let targets = resolve_targets(doc, element, descriptor)?;
    for target in targets {
        let el = doc.element_mut(target)?;
        for decl in descriptor.before_decls() {
            el.set_style(&decl.property, &decl.value);
        }
    }
    doc.element_mut(element)?.set_attribute(ANIMATED_ATTR, "false");
    Ok(())
}

/// Apply revealed-state styling for `descriptor` to `element`.
///
/// Re-applying while already applied is a no-op. With `immediate` set, every
/// target's transition delay is forced to zero so no transition plays (used
/// for elements already visible when watching begins).
pub fn apply_reveal(
    doc: &mut Document,
    element: ElementId,
    descriptor: &AnimationDescriptor,
    memory: &mut StyleMemory,
    immediate: bool,
) -> Result<()> {
    if memory.is_applied(element) {
        return Ok(());
    }

    let targets = resolve_targets(doc, element, descriptor)?;
    let after = descriptor.after_decls();
    let stagger = descriptor.stagger_ms;
    let mut snapshots = Vec::with_capacity(targets.len());

    for (index, target) in targets.iter().enumerate() {
        let el = doc.element_mut(*target)?;
        let mut snapshot: TargetSnapshot = Vec::new();

        for decl in &after {
            record_original(el, &decl.property, &mut snapshot);
            el.set_style(&decl.property, &decl.value);
        }
        if stagger > 0 || immediate {
            record_original(el, TRANSITION_DELAY, &mut snapshot);
            let delay = if immediate { 0 } else { stagger * index as u64 };
            el.set_style(TRANSITION_DELAY, &format!("{delay}ms"));
        }
        snapshots.push((*target, snapshot));
    }

    doc.element_mut(element)?.set_attribute(ANIMATED_ATTR, "true");
    debug!(?element, immediate, targets = snapshots.len(), "reveal applied");
    memory.applied.insert(element, snapshots);
    Ok(())
}

/// Remove revealed-state styling from `element`, restoring every inline value
/// recorded when it was applied.
///
/// Removing a reveal that was never applied is programmer misuse and fails
/// with [`RevealError::NotApplied`].
pub fn remove_reveal(
    doc: &mut Document,
    element: ElementId,
    memory: &mut StyleMemory,
) -> Result<()> {
    let snapshots = memory
        .applied
        .remove(&element)
        .ok_or(RevealError::NotApplied(element))?;

    for (target, snapshot) in snapshots {
        let el = doc.element_mut(target)?;
        for (property, original) in snapshot {
            match original {
                Some(value) => el.set_style(&property, &value),
                None => {
                    el.remove_style(&property);
                }
            }
        }
    }

    doc.element_mut(element)?.set_attribute(ANIMATED_ATTR, "false");
    debug!(?element, "reveal removed");
    Ok(())
}

/// Record the current inline value of `property` once per target.
fn record_original(el: &reveal_dom::Element, property: &str, snapshot: &mut TargetSnapshot) {
    if !snapshot.iter().any(|(p, _)| p == property) {
        snapshot.push((property.to_string(), el.style(property).map(str::to_string)));
    }
}

/// Resolve the styling targets for a descriptor: the matching descendants
/// when a child selector is configured, otherwise the element itself.
fn resolve_targets(
    doc: &Document,
    element: ElementId,
    descriptor: &AnimationDescriptor,
) -> Result<Vec<ElementId>> {
    doc.element(element)?;
    match &descriptor.child {
        Some(selector) => {
            let selector = Selector::parse(selector)?;
            Ok(doc.query_descendants(element, &selector))
        }
        None => Ok(vec![element]),
    }
}
