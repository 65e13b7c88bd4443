//! Elements: tag, attributes, classes, inline styles, and layout rectangle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rect::Rect;

/// Opaque handle to an element within a [`crate::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    /// Index into the owning document's arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A single element in the document tree.
///
/// Attributes are kept sorted by name; inline styles preserve the order in
/// which properties were first set, matching how a style attribute reads.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) tag: String,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) styles: Vec<(String, String)>,
    pub(crate) classes: Vec<String>,
    pub(crate) rect: Rect,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    pub(crate) fn new(id: ElementId, tag: &str, parent: Option<ElementId>) -> Self {
        Self {
            id,
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            styles: Vec::new(),
            classes: Vec::new(),
            rect: Rect::default(),
            parent,
            children: Vec::new(),
        }
    }

    /// This element's id.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Tag name, lowercase.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Parent element, if any.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Child ids in document order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Layout rectangle in document coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Set the layout rectangle.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute. Returns the previous value, if any.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// True when the attribute is present, whatever its value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Class list in declaration order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// True when the class is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Get an inline style property value.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set an inline style property, replacing any existing value in place.
    pub fn set_style(&mut self, property: &str, value: &str) {
        match self.styles.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => *v = value.to_string(),
            None => self.styles.push((property.to_string(), value.to_string())),
        }
    }

    /// Remove an inline style property. Returns the previous value, if any.
    pub fn remove_style(&mut self, property: &str) -> Option<String> {
        let idx = self.styles.iter().position(|(p, _)| p == property)?;
        Some(self.styles.remove(idx).1)
    }

    /// All inline style declarations in declaration order.
    pub fn styles(&self) -> &[(String, String)] {
        &self.styles
    }

    /// Serialize inline styles as a `prop: value; prop: value` string.
    pub fn style_text(&self) -> String {
        self.styles
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
