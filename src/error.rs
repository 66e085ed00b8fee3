use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// An operation that needs at least one area (or line) got none.
    #[error("{op}: expected at least one input, got none")]
    EmptyInput { op: &'static str },

    #[error("cannot measure the width of an area with no lines")]
    EmptyArea,

    /// A padding target smaller than what is already there.
    #[error("{op}: target {target} is smaller than current {actual}")]
    InvalidDimension {
        op: &'static str,
        target: usize,
        actual: usize,
    },

    #[error("malformed node tree: {0}")]
    StructuralMismatch(String),

    /// The node kind has no composition rule of its own.
    #[error("no composition rule for `{kind}` nodes")]
    UnknownVariant { kind: &'static str },

    #[error("style key `{key}` should hold {expected}")]
    StyleType {
        key: &'static str,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
