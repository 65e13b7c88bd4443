//! Style block parsing.
//!
//! Descriptors carry their styles as `"prop: value; prop: value"` blocks, the
//! same shape the original pages stored in `data-animation` attributes.
//! Malformed pairs are skipped, never fatal.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One inline style declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDecl {
    /// CSS property name.
    pub property: String,
    /// Property value.
    pub value: String,
}

impl StyleDecl {
    /// Create a declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Parse a `;`-separated style block into declarations.
///
/// Pairs missing a colon, or with an empty property or value, are skipped
/// with a warning. Surrounding whitespace is trimmed everywhere.
pub fn parse_style_block(input: &str) -> Vec<StyleDecl> {
    let mut decls = Vec::new();
    for chunk in input.split(';') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        match chunk.split_once(':') {
            Some((property, value)) => {
                let property = property.trim();
                let value = value.trim();
                if property.is_empty() || value.is_empty() {
                    warn!(declaration = chunk, "skipping incomplete style declaration");
                    continue;
                }
                decls.push(StyleDecl::new(property, value));
            }
            None => {
                warn!(declaration = chunk, "skipping style declaration without `:`");
            }
        }
    }
    decls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_block() {
        let decls = parse_style_block("opacity: 0; transform: translateY(24px)");
        assert_eq!(
            decls,
            vec![
                StyleDecl::new("opacity", "0"),
                StyleDecl::new("transform", "translateY(24px)"),
            ]
        );
    }

    #[test]
    fn test_whitespace_and_trailing_semicolons() {
        let decls = parse_style_block("  opacity :  1 ;; ");
        assert_eq!(decls, vec![StyleDecl::new("opacity", "1")]);
    }

    #[test]
    fn test_malformed_pairs_are_skipped() {
        // Missing colon, empty value, empty property
        let decls = parse_style_block("opacity; transform: ; : red; color: blue");
        assert_eq!(decls, vec![StyleDecl::new("color", "blue")]);
    }

    #[test]
    fn test_value_with_colon() {
        // Only the first colon splits; the rest belongs to the value
        let decls = parse_style_block("background: url(a:b)");
        assert_eq!(decls, vec![StyleDecl::new("background", "url(a:b)")]);
    }

    #[test]
    fn test_empty_block() {
        assert!(parse_style_block("").is_empty());
        assert!(parse_style_block(" ; ; ").is_empty());
    }
}
