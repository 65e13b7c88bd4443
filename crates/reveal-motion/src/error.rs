//! Error types for the reveal engine.

use reveal_dom::{DomError, ElementId};
use thiserror::Error;

/// Result type for reveal operations.
pub type Result<T> = std::result::Result<T, RevealError>;

/// Errors that can occur while driving reveals.
///
/// These all indicate programmer misuse of the API; data problems (malformed
/// style blocks, unknown animation names) are skipped or ignored instead of
/// erroring.
#[derive(Error, Debug)]
pub enum RevealError {
    /// Document lookup or selector parsing failed.
    #[error(transparent)]
    Dom(#[from] DomError),

    /// A reveal was removed from an element it was never applied to.
    #[error("reveal was never applied to element {0:?}")]
    NotApplied(ElementId),

    /// A watcher was constructed for an element without the candidate marker.
    #[error("element {0:?} does not carry the `data-animate` marker")]
    NotACandidate(ElementId),
}
