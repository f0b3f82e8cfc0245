use crate::Side;

/// Errors raised by tree operations and the traversal work-lists.
///
/// Every mutating operation validates its inputs before touching the tree,
/// so an error always leaves the tree as it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Access to an element of an empty container
    #[error("container is empty")]
    EmptyContainer,

    /// The position's node has been removed from the tree
    #[error("position is no longer valid")]
    InvalidPosition,

    /// The position was produced by a different tree
    #[error("position does not belong to this tree")]
    MismatchedContainer,

    #[error("root already exists")]
    RootExists,

    /// Delete attempted on a node with more than one child
    #[error("position has more than one child")]
    TooManyChildren,

    #[error("position must be a leaf")]
    NotALeaf,

    /// Binary insertion into an occupied child slot
    #[error("{side} child already exists")]
    ChildExists { side: Side },
}

pub type TreeResult<T> = Result<T, TreeError>;
