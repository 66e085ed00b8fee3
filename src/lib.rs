//! Renders document trees as fixed-width plain text.
//!
//! A tree of [`Node`]s (documents, paragraphs, tables, rows, text and
//! column boxes) is composed bottom-up into a [`TextArea`]: word-wrapped
//! paragraphs, column-aligned tables and stacked blocks. Layout hints travel
//! down the tree as a [`Style`]; a node's own style wins over what it
//! inherits.
//!
//! ```
//! use plaindoc::{document, paragraph, to_string, Style};
//!
//! let doc = document("notes")
//!     .with_items([paragraph("hello world foo")])
//!     .with_style(Style::new().width(5));
//! assert_eq!(to_string(&doc, None).unwrap(), "hello\nworld\nfoo");
//! ```

pub mod area;
mod compose;
mod error;
mod layout;
pub mod style;

pub use area::{LongWords, TextArea, WrapOptions};
pub use compose::{compose, to_string, Compose, HEADER_RULE};
pub use error::{LayoutError, Result};
pub use layout::{
    document, paragraph, row, table, text, vbox, Document, Node, Paragraph, Row, Table, TextNode,
    VBox,
};
pub use style::{Style, StyleValue};
