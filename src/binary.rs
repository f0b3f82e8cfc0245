use tracing::error;

use crate::{Position, Tree, TreeResult};

/// The binary tree contract: a [`Tree`] where each node has at most a left
/// and a right child.
///
/// Implementors should answer [`Tree::children`] with
/// [`BinaryTree::binary_children`] so children always come left then right.
pub trait BinaryTree: Tree {
    /// Left child of `p`, if any
    fn left(&self, p: Position) -> TreeResult<Option<Position>>;

    /// Right child of `p`, if any
    fn right(&self, p: Position) -> TreeResult<Option<Position>>;

    /// The other child of `p`'s parent, or `None` for the root or an only child
    fn sibling(&self, p: Position) -> TreeResult<Option<Position>> {
        match self.parent(p)? {
            None => Ok(None),
            Some(parent) => {
                if self.left(parent)? == Some(p) {
                    self.right(parent)
                } else {
                    self.left(parent)
                }
            }
        }
    }

    /// Left then right child, each only if present
    fn binary_children(&self, p: Position) -> TreeResult<Vec<Position>> {
        let left = self.left(p)?;
        let right = self.right(p)?;
        Ok(left.into_iter().chain(right).collect())
    }

    /// Left subtree, then `p`, then right subtree
    fn inorder(&self, p: Position) -> TreeResult<Inorder<'_, Self>> {
        self.parent(p)?;
        Ok(Inorder::new(self, Some(p)))
    }
}

/// Left subtree, node, right subtree
pub struct Inorder<'a, T: BinaryTree> {
    tree: &'a T,
    // Ancestors whose left subtree is being walked
    stack: Vec<Position>,
    current: Option<Position>,
}

impl<'a, T: BinaryTree> Inorder<'a, T> {
    pub(crate) fn new(tree: &'a T, start: Option<Position>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            current: start,
        }
    }

    fn descend(&self, p: Position, next: TreeResult<Option<Position>>) -> Option<Position> {
        next.unwrap_or_else(|err| {
            error!(position = %p, %err, "Traversal reached an unresolvable position");
            None
        })
    }
}

impl<'a, T: BinaryTree> Iterator for Inorder<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(p) = self.current {
            self.stack.push(p);
            self.current = self.descend(p, self.tree.left(p));
        }

        let p = self.stack.pop()?;
        self.current = self.descend(p, self.tree.right(p));
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        test::{binary_labels, expression_tree},
        BinaryTree, Tree, TreeError,
    };

    #[test]
    fn inorder_expression() {
        let (tree, [root, ..]) = expression_tree();

        assert_eq!(
            binary_labels(&tree, tree.inorder(root).unwrap()),
            ["3", "*", "a", "+", "b", "-", "c"]
        );
    }

    #[test]
    fn inorder_subtree() {
        let (tree, [_, times, ..]) = expression_tree();
        assert_eq!(
            binary_labels(&tree, tree.inorder(times).unwrap()),
            ["3", "*", "a"]
        );
    }

    #[test]
    fn siblings() {
        let (tree, [root, times, minus, three, a]) = expression_tree();

        assert_eq!(tree.sibling(root), Ok(None));
        assert_eq!(tree.sibling(times), Ok(Some(minus)));
        assert_eq!(tree.sibling(minus), Ok(Some(times)));
        assert_eq!(tree.sibling(three), Ok(Some(a)));
        assert_eq!(tree.sibling(a), Ok(Some(three)));
    }

    #[test]
    fn only_child_has_no_sibling() {
        let mut tree = crate::LinkedBinaryTree::new();
        let root = tree.add_root(0).unwrap();
        let right = tree.add_right(root, 1).unwrap();

        assert_eq!(tree.sibling(right), Ok(None));
        assert_eq!(tree.children(root), Ok(vec![right]));
    }

    #[test]
    fn children_left_then_right() {
        let (tree, [root, times, minus, ..]) = expression_tree();

        assert_eq!(tree.children(root), Ok(vec![times, minus]));
        assert_eq!(tree.binary_children(root), Ok(vec![times, minus]));
        assert_eq!(tree.num_children(root), Ok(2));
    }

    #[test]
    fn inorder_rejects_deleted() {
        let (mut tree, [_, _, _, three, _]) = expression_tree();
        tree.delete(three).unwrap();

        assert_eq!(tree.inorder(three).err(), Some(TreeError::InvalidPosition));
        assert_eq!(tree.sibling(three), Err(TreeError::InvalidPosition));
    }
}
