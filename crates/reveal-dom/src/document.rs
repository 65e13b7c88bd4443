//! Element arena and tree operations.

use crate::element::{Element, ElementId};
use crate::error::{DomError, Result};
use crate::rect::Rect;
use crate::selector::Selector;

/// A retained element tree.
///
/// Elements are stored in an arena and addressed by [`ElementId`]; the tree
/// always has a `body` root. Ids are never reused within a document.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    root: ElementId,
}

impl Document {
    /// Create a document containing only a `body` root.
    pub fn new() -> Self {
        let root = ElementId(0);
        Self {
            elements: vec![Element::new(root, "body", None)],
            root,
        }
    }

    /// The root element id.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Number of elements, root included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the document holds only the root.
    pub fn is_empty(&self) -> bool {
        self.elements.len() == 1
    }

    /// Append a new child element under `parent`.
    pub fn create_element(&mut self, parent: ElementId, tag: &str) -> Result<ElementId> {
        self.element(parent)?;
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(id, tag, Some(parent)));
        if let Some(p) = self.elements.get_mut(parent.0) {
            p.children.push(id);
        }
        Ok(id)
    }

    /// Look up an element, if the id belongs to this document.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Mutable lookup, if the id belongs to this document.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Look up an element, failing on unknown ids.
    pub fn element(&self, id: ElementId) -> Result<&Element> {
        self.get(id).ok_or(DomError::UnknownElement(id))
    }

    /// Mutable lookup, failing on unknown ids.
    pub fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.elements
            .get_mut(id.0)
            .ok_or(DomError::UnknownElement(id))
    }

    /// Set an element's layout rectangle.
    pub fn set_rect(&mut self, id: ElementId, rect: Rect) -> Result<()> {
        self.element_mut(id)?.set_rect(rect);
        Ok(())
    }

    /// All element ids in pre-order (root first).
    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        let mut order = Vec::with_capacity(self.elements.len());
        self.collect_preorder(self.root, &mut order);
        order.into_iter()
    }

    fn collect_preorder(&self, id: ElementId, out: &mut Vec<ElementId>) {
        out.push(id);
        if let Some(el) = self.get(id) {
            for child in el.children.clone() {
                self.collect_preorder(child, out);
            }
        }
    }

    /// Descendant ids of `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        if let Some(el) = self.get(id) {
            for child in &el.children {
                self.collect_preorder(*child, &mut out);
            }
        }
        out
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<ElementId> {
        self.iter()
            .filter(|id| self.get(*id).is_some_and(|el| selector.matches(el)))
            .collect()
    }

    /// Descendants of `id` matching `selector`, in document order.
    pub fn query_descendants(&self, id: ElementId, selector: &Selector) -> Vec<ElementId> {
        self.descendants(id)
            .into_iter()
            .filter(|d| self.get(*d).is_some_and(|el| selector.matches(el)))
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, ElementId, Vec<ElementId>) {
        let mut doc = Document::new();
        let section = doc.create_element(doc.root(), "section").unwrap();
        let mut cards = Vec::new();
        for _ in 0..3 {
            let card = doc.create_element(section, "div").unwrap();
            doc.get_mut(card).unwrap().add_class("card");
            cards.push(card);
        }
        (doc, section, cards)
    }

    #[test]
    fn test_tree_construction() {
        let (doc, section, cards) = sample();
        assert_eq!(doc.len(), 5);
        assert_eq!(doc.get(section).unwrap().children(), cards.as_slice());
        assert_eq!(doc.get(cards[0]).unwrap().parent(), Some(section));
    }

    #[test]
    fn test_unknown_parent_fails() {
        let mut doc = Document::new();
        let err = doc.create_element(ElementId(99), "div").unwrap_err();
        assert!(matches!(err, DomError::UnknownElement(_)));
    }

    #[test]
    fn test_query_all_document_order() {
        let (doc, _, cards) = sample();
        let selector = Selector::parse(".card").unwrap();
        assert_eq!(doc.query_all(&selector), cards);
    }

    #[test]
    fn test_query_descendants_excludes_self() {
        let (mut doc, section, cards) = sample();
        doc.get_mut(section).unwrap().add_class("card");

        let selector = Selector::parse(".card").unwrap();
        assert_eq!(doc.query_descendants(section, &selector), cards);
    }
}
