use generational_arena::Index;

use crate::TreeId;

/// Handle to the location of one element within a tree.
///
/// A position is only meaningful to the tree that produced it. Element access
/// and mutation go through the owning tree, keyed by position. Two positions
/// are equal when they name the same node of the same tree, regardless of the
/// elements stored there.
///
/// Once the node is removed (by `delete`, or by moving its subtree away with
/// `attach`) the position stays comparable but every tree operation given it
/// fails with [`TreeError::InvalidPosition`](crate::TreeError::InvalidPosition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    tree: TreeId,
    index: Index,
}

impl Position {
    pub(crate) fn new(tree: TreeId, index: Index) -> Self {
        Self { tree, index }
    }

    /// Identity of the tree that produced this position
    pub fn tree_id(&self) -> TreeId {
        self.tree
    }

    pub(crate) fn index(&self) -> Index {
        self.index
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (slot, generation) = self.index.into_raw_parts();
        write!(f, "{}:{}", slot, generation)
    }
}

/// Child slot of a binary node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
