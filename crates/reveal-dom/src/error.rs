//! Error types for the document model.

use thiserror::Error;

use crate::element::ElementId;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DomError>;

/// Errors that can occur while manipulating a document.
#[derive(Error, Debug)]
pub enum DomError {
    /// An element id did not resolve to an element in this document.
    #[error("unknown element id {0:?}")]
    UnknownElement(ElementId),

    /// A selector string could not be parsed.
    #[error("invalid selector `{input}`: {reason}")]
    SelectorParse { input: String, reason: String },
}
