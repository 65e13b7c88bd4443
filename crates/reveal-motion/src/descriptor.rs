//! Animation descriptors and the name→descriptor registry.
//!
//! A descriptor is the static configuration behind one animation name: which
//! descendants it targets, the style blocks for the hidden and revealed
//! states, and the per-child stagger delay. The registry is built once and
//! never mutated afterwards; elements reference entries by name through their
//! `data-animation` attribute.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::style::{StyleDecl, parse_style_block};
use reveal_config::RevealConfig;

/// Static configuration for one named animation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Selector for the descendants the styles apply to. `None` targets the
    /// watched element itself.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<String>,

    /// Style block applied in the hidden state.
    #[serde(default)]
    pub before: String,

    /// Style block applied in the revealed state.
    #[serde(default)]
    pub after: String,

    /// Incremental transition delay per matched child, in milliseconds.
    /// Child `i` in document order receives `i * stagger_ms`.
    #[serde(default)]
    pub stagger_ms: u64,
}

impl AnimationDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the child selector.
    pub fn with_child(mut self, selector: impl Into<String>) -> Self {
        self.child = Some(selector.into());
        self
    }

    /// Set the hidden-state style block.
    pub fn with_before(mut self, block: impl Into<String>) -> Self {
        self.before = block.into();
        self
    }

    /// Set the revealed-state style block.
    pub fn with_after(mut self, block: impl Into<String>) -> Self {
        self.after = block.into();
        self
    }

    /// Set the per-child stagger delay.
    pub fn with_stagger(mut self, stagger_ms: u64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Parsed hidden-state declarations. Malformed pairs are skipped.
    pub fn before_decls(&self) -> Vec<StyleDecl> {
        parse_style_block(&self.before)
    }

    /// Parsed revealed-state declarations. Malformed pairs are skipped.
    pub fn after_decls(&self) -> Vec<StyleDecl> {
        parse_style_block(&self.after)
    }
}

/// Immutable mapping from animation name to descriptor.
#[derive(Debug, Clone, Default)]
pub struct AnimationRegistry {
    animations: HashMap<String, AnimationDescriptor>,
}

impl AnimationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named descriptor (builder style).
    pub fn with(mut self, name: impl Into<String>, descriptor: AnimationDescriptor) -> Self {
        self.animations.insert(name.into(), descriptor);
        self
    }

    /// Build a registry from the `[animations.*]` table of a config.
    pub fn from_config(config: &RevealConfig) -> Self {
        let mut registry = Self::new();
        for (name, entry) in &config.animations {
            let descriptor = AnimationDescriptor {
                child: entry.child.clone(),
                before: entry.before.clone(),
                after: entry.after.clone(),
                stagger_ms: entry.stagger_ms,
            };
            registry.animations.insert(name.clone(), descriptor);
        }
        info!(animations = registry.len(), "animation registry loaded");
        registry
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&AnimationDescriptor> {
        self.animations.get(name)
    }

    /// Number of registered animations.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// True when no animations are registered.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Registered names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }
}
