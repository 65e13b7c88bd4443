//! Compound simple selectors.
//!
//! The engine only ever needs to match a single element against one compound
//! selector: `tag`, `.class`, `#id`, `[attr]`, `[attr="value"]`, and
//! combinations such as `div.card` or `section[data-animate]`. Combinators
//! (descendant, child, sibling) are rejected at parse time.

use crate::element::Element;
use crate::error::{DomError, Result};

/// One attribute test within a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrMatch {
    /// Attribute name.
    pub name: String,
    /// Required value; `None` matches mere presence.
    pub value: Option<String>,
}

/// A parsed compound simple selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::err(input, "empty selector");
        }
        if trimmed.chars().any(char::is_whitespace) || trimmed.contains('>') {
            return Self::err(input, "combinators are not supported");
        }

        let mut selector = Selector::default();
        let mut chars = trimmed.chars().peekable();

        // Leading tag name, if the selector does not start with a sigil
        if matches!(chars.peek(), Some(c) if *c != '.' && *c != '#' && *c != '[') {
            let tag: String = Self::take_ident(&mut chars);
            if tag.is_empty() {
                return Self::err(input, "expected tag name");
            }
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        while let Some(&c) = chars.peek() {
            match c {
                '.' => {
                    chars.next();
                    let class = Self::take_ident(&mut chars);
                    if class.is_empty() {
                        return Self::err(input, "expected class name after `.`");
                    }
                    selector.classes.push(class);
                }
                '#' => {
                    chars.next();
                    let id = Self::take_ident(&mut chars);
                    if id.is_empty() {
                        return Self::err(input, "expected id after `#`");
                    }
                    selector.id = Some(id);
                }
                '[' => {
                    chars.next();
                    let body: String = chars.by_ref().take_while(|&c| c != ']').collect();
                    if body.is_empty() {
                        return Self::err(input, "empty attribute selector");
                    }
                    selector.attrs.push(Self::parse_attr(input, &body)?);
                }
                other => {
                    return Self::err(input, &format!("unexpected character `{other}`"));
                }
            }
        }

        Ok(selector)
    }

    fn parse_attr(input: &str, body: &str) -> Result<AttrMatch> {
        match body.split_once('=') {
            None => Ok(AttrMatch {
                name: body.trim().to_string(),
                value: None,
            }),
            Some((name, value)) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(DomError::SelectorParse {
                        input: input.to_string(),
                        reason: "attribute selector missing name".to_string(),
                    });
                }
                let value = value.trim().trim_matches('"').trim_matches('\'');
                Ok(AttrMatch {
                    name: name.to_string(),
                    value: Some(value.to_string()),
                })
            }
        }
    }

    fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
        let mut ident = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                ident.push(c);
                chars.next();
            } else {
                break;
            }
        }
        ident
    }

    fn err<T>(input: &str, reason: &str) -> Result<T> {
        Err(DomError::SelectorParse {
            input: input.to_string(),
            reason: reason.to_string(),
        })
    }

    /// Test a single element against this selector.
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag() != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|attr| match &attr.value {
            None => element.has_attribute(&attr.name),
            Some(v) => element.attribute(&attr.name) == Some(v.as_str()),
        })
    }
}

impl std::str::FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementId;

    fn card() -> Element {
        let mut el = Element::new(ElementId(1), "div", None);
        el.add_class("card");
        el.add_class("hero");
        el.set_attribute("id", "main");
        el.set_attribute("data-animate", "");
        el.set_attribute("data-animation", "fade-up");
        el
    }

    #[test]
    fn test_tag_class_id() {
        let el = card();
        assert!(Selector::parse("div").unwrap().matches(&el));
        assert!(Selector::parse(".card").unwrap().matches(&el));
        assert!(Selector::parse("div.card.hero").unwrap().matches(&el));
        assert!(Selector::parse("#main").unwrap().matches(&el));
        assert!(!Selector::parse("span").unwrap().matches(&el));
        assert!(!Selector::parse(".missing").unwrap().matches(&el));
    }

    #[test]
    fn test_attribute_selectors() {
        let el = card();
        assert!(Selector::parse("[data-animate]").unwrap().matches(&el));
        assert!(
            Selector::parse("[data-animation=\"fade-up\"]")
                .unwrap()
                .matches(&el)
        );
        assert!(
            !Selector::parse("[data-animation=\"pop\"]")
                .unwrap()
                .matches(&el)
        );
        assert!(
            Selector::parse("div.card[data-animate]")
                .unwrap()
                .matches(&el)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("  ").is_err());
        assert!(Selector::parse("div .card").is_err());
        assert!(Selector::parse("div > span").is_err());
        assert!(Selector::parse(".").is_err());
        assert!(Selector::parse("[]").is_err());
        assert!(Selector::parse("[=x]").is_err());
    }
}
