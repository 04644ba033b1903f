//! Error types for link labels.

/// Result type alias for link label operations.
pub type Result<T> = std::result::Result<T, LinkError>;

/// Errors returned by [`LinkLabel`](crate::LinkLabel) operations.
///
/// Parsing itself never fails; these only cover requests that name a link
/// the label does not have or that a disabled label cannot honor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// The link index is past the end of the link table.
    #[error("link index {index} out of range (label has {count} links)")]
    InvalidLinkIndex { index: usize, count: usize },

    /// No link currently has keyboard focus.
    #[error("no link has keyboard focus")]
    NoFocusedLink,

    /// The label is disabled and ignores activation.
    #[error("link label is disabled")]
    Disabled,
}

impl LinkError {
    /// Create an index error.
    pub fn invalid_index(index: usize, count: usize) -> Self {
        Self::InvalidLinkIndex { index, count }
    }
}
