//! Minimal retained document model for the reveal engine.
//!
//! This crate stands in for the browser surface the engine drives:
//! - [`Document`]: an element arena with attributes, classes, inline styles,
//!   and layout rectangles
//! - [`Viewport`]: a scrollable window with client-coordinate mapping and
//!   intersection math
//! - [`Selector`]: the compound-simple-selector subset the engine queries with
//!
//! There is no parsing of HTML or CSS here; documents are built
//! programmatically and laid out by assigning rectangles.

pub mod document;
pub mod element;
pub mod error;
pub mod rect;
pub mod selector;
pub mod viewport;

pub use document::Document;
pub use element::{Element, ElementId};
pub use error::{DomError, Result};
pub use rect::Rect;
pub use selector::{AttrMatch, Selector};
pub use viewport::Viewport;
