use colored::Colorize;
use generational_arena::{Arena, Index};
use tracing::{debug, debug_span};

use crate::{
    display::TreeDisplay, iterator::Traversal, node::BinaryNode, BinaryTree, Position, Side,
    Tree, TreeError, TreeId, TreeResult, TraversalOrder,
};

/// Node-linked binary tree.
///
/// Shares the arena and position model of [`GeneralTree`](crate::GeneralTree),
/// with each node holding at most a left and a right child.
#[derive(Debug)]
pub struct LinkedBinaryTree<T> {
    id: TreeId,
    arena: Arena<BinaryNode<T>>,
    root: Option<Index>,
    order: TraversalOrder,
}

impl<T> Default for LinkedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedBinaryTree<T> {
    /// Create an empty tree whose positions are produced in preorder
    pub fn new() -> Self {
        Self::with_order(TraversalOrder::Preorder)
    }

    pub fn with_order(order: TraversalOrder) -> Self {
        Self {
            id: TreeId::generate(),
            arena: Arena::new(),
            root: None,
            order,
        }
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    pub fn set_order(&mut self, order: TraversalOrder) {
        self.order = order
    }

    fn validate(&self, p: Position) -> TreeResult<&BinaryNode<T>> {
        if p.tree_id() != self.id {
            return Err(TreeError::MismatchedContainer);
        }
        self.arena.get(p.index()).ok_or(TreeError::InvalidPosition)
    }

    fn validate_mut(&mut self, p: Position) -> TreeResult<&mut BinaryNode<T>> {
        if p.tree_id() != self.id {
            return Err(TreeError::MismatchedContainer);
        }
        self.arena
            .get_mut(p.index())
            .ok_or(TreeError::InvalidPosition)
    }

    fn make_position(&self, index: Index) -> Position {
        Position::new(self.id, index)
    }

    /// Place `element` at the root of an empty tree
    pub fn add_root(&mut self, element: T) -> TreeResult<Position> {
        if self.root.is_some() {
            return Err(TreeError::RootExists);
        }

        let index = self.arena.insert(BinaryNode::new(element, None));
        self.root = Some(index);

        let position = self.make_position(index);
        debug!(tree = %self.id, "{} {}", "Add root".bright_green(), position);
        Ok(position)
    }

    /// Create a left child of `p`. Fails with [`TreeError::ChildExists`] if `p` already has one.
    pub fn add_left(&mut self, p: Position, element: T) -> TreeResult<Position> {
        self.add_child(p, Side::Left, element)
    }

    /// Create a right child of `p`. Fails with [`TreeError::ChildExists`] if `p` already has one.
    pub fn add_right(&mut self, p: Position, element: T) -> TreeResult<Position> {
        self.add_child(p, Side::Right, element)
    }

    fn add_child(&mut self, p: Position, side: Side, element: T) -> TreeResult<Position> {
        if self.validate(p)?.child(side).is_some() {
            return Err(TreeError::ChildExists { side });
        }

        let index = self.arena.insert(BinaryNode::new(element, Some(p.index())));
        if let Some(parent) = self.arena.get_mut(p.index()) {
            parent.set_child(side, Some(index));
        }

        let position = self.make_position(index);
        debug!(tree = %self.id, "{} {} {} of {}", "Add".bright_green(), side, position, p);
        Ok(position)
    }

    /// Store `element` at `p`, returning the element it replaces
    pub fn replace(&mut self, p: Position, element: T) -> TreeResult<T> {
        let node = self.validate_mut(p)?;
        let old = std::mem::replace(&mut node.element, element);

        debug!(tree = %self.id, "{} {}", "Replace".bright_yellow(), p);
        Ok(old)
    }

    /// Remove the node at `p`, replacing it with its child if it has one.
    ///
    /// The child takes `p`'s slot on the same side of `p`'s parent. Fails
    /// with [`TreeError::TooManyChildren`] if `p` has two children.
    pub fn delete(&mut self, p: Position) -> TreeResult<T> {
        let node = self.validate(p)?;
        if node.num_children() > 1 {
            return Err(TreeError::TooManyChildren);
        }

        let _span = debug_span!("delete", tree = %self.id, position = %p).entered();

        let parent = node.parent;
        let child = node.left.or(node.right);

        if let Some(child_node) = child.and_then(|child| self.arena.get_mut(child)) {
            child_node.parent = parent;
        }

        match parent {
            None => self.root = child,
            Some(parent) => {
                if let Some(parent) = self.arena.get_mut(parent) {
                    if parent.left == Some(p.index()) {
                        parent.left = child;
                    } else {
                        parent.right = child;
                    }
                }
            }
        }

        let removed = self
            .arena
            .remove(p.index())
            .ok_or(TreeError::InvalidPosition)?;

        debug!("{} {} remaining", "Deleted".bright_red(), self.arena.len());
        Ok(removed.element)
    }

    /// Attach `left` and `right` as the left and right subtrees of the leaf `p`.
    ///
    /// The donor trees are left empty.
    pub fn attach(&mut self, p: Position, left: &mut Self, right: &mut Self) -> TreeResult<()> {
        if !self.is_leaf(p)? {
            return Err(TreeError::NotALeaf);
        }

        let _span = debug_span!("attach", tree = %self.id, position = %p).entered();

        for (side, donor) in [(Side::Left, left), (Side::Right, right)] {
            if let Some(root) = donor.root.take() {
                let moved = self.transplant(donor, root, p.index(), side);
                debug!("{} {} nodes {} from {}", "Attached".bright_blue(), moved, side, donor.id);
            }
        }

        Ok(())
    }

    fn transplant(&mut self, donor: &mut Self, root: Index, parent: Index, side: Side) -> usize {
        let mut moved = 0;
        let mut work = vec![(root, parent, side)];

        while let Some((donor_index, parent, side)) = work.pop() {
            let Some(node) = donor.arena.remove(donor_index) else {
                continue;
            };

            let index = self
                .arena
                .insert(BinaryNode::new(node.element, Some(parent)));
            if let Some(parent) = self.arena.get_mut(parent) {
                parent.set_child(side, Some(index));
            }

            work.extend(node.right.map(|child| (child, index, Side::Right)));
            work.extend(node.left.map(|child| (child, index, Side::Left)));
            moved += 1;
        }

        moved
    }
}

impl<T> Tree for LinkedBinaryTree<T> {
    type Element = T;
    type Positions<'a> = Traversal<'a, Self> where Self: 'a;

    fn len(&self) -> usize {
        self.arena.len()
    }

    fn root(&self) -> Option<Position> {
        self.root.map(|index| self.make_position(index))
    }

    fn element(&self, p: Position) -> TreeResult<&T> {
        Ok(&self.validate(p)?.element)
    }

    fn parent(&self, p: Position) -> TreeResult<Option<Position>> {
        Ok(self
            .validate(p)?
            .parent
            .map(|index| self.make_position(index)))
    }

    fn num_children(&self, p: Position) -> TreeResult<usize> {
        Ok(self.validate(p)?.num_children())
    }

    fn children(&self, p: Position) -> TreeResult<Vec<Position>> {
        self.binary_children(p)
    }

    fn positions(&self) -> Self::Positions<'_> {
        Traversal::new(self, self.order, self.root())
    }
}

impl<T> BinaryTree for LinkedBinaryTree<T> {
    fn left(&self, p: Position) -> TreeResult<Option<Position>> {
        Ok(self
            .validate(p)?
            .left
            .map(|index| self.make_position(index)))
    }

    fn right(&self, p: Position) -> TreeResult<Option<Position>> {
        Ok(self
            .validate(p)?
            .right
            .map(|index| self.make_position(index)))
    }
}

impl<T> std::fmt::Display for LinkedBinaryTree<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TreeDisplay::format(self, f)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::{
        test::{binary_labels, expression_tree},
        BinaryTree, LinkedBinaryTree, Side, Tree, TraversalOrder, TreeError,
    };

    #[test]
    fn slots_fill_once() {
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root(1).unwrap();
        let left = tree.add_left(root, 2).unwrap();

        assert_eq!(
            tree.add_left(root, 3),
            Err(TreeError::ChildExists { side: Side::Left })
        );
        let right = tree.add_right(root, 3).unwrap();
        assert_eq!(
            tree.add_right(root, 4),
            Err(TreeError::ChildExists { side: Side::Right })
        );

        assert_eq!(tree.left(root), Ok(Some(left)));
        assert_eq!(tree.right(root), Ok(Some(right)));
        assert_eq!(tree.left(left), Ok(None));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.add_root(9), Err(TreeError::RootExists));
    }

    #[test]
    fn positions_default_preorder() {
        let (tree, _) = expression_tree();
        assert_eq!(tree.order(), TraversalOrder::Preorder);
        assert_eq!(
            binary_labels(&tree, tree.positions()),
            ["+", "*", "3", "a", "-", "b", "c"]
        );
    }

    #[traced_test]
    #[test]
    fn replace_element() {
        let (mut tree, [root, ..]) = expression_tree();
        assert_eq!(tree.replace(root, "/"), Ok("+"));
        assert_eq!(tree.element(root), Ok(&"/"));

        assert!(logs_contain("Replace"));
    }

    #[test]
    fn foreign_positions_rejected() {
        let (mut tree, [plus, ..]) = expression_tree();
        let (other, [x, _, _, three, _]) = expression_tree();
        let mut left = LinkedBinaryTree::new();
        let mut right = LinkedBinaryTree::new();

        assert_eq!(tree.element(x), Err(TreeError::MismatchedContainer));
        assert_eq!(tree.left(x), Err(TreeError::MismatchedContainer));
        assert_eq!(tree.sibling(x), Err(TreeError::MismatchedContainer));
        assert_eq!(tree.add_left(three, "X"), Err(TreeError::MismatchedContainer));
        assert_eq!(tree.replace(x, "X"), Err(TreeError::MismatchedContainer));
        assert_eq!(tree.delete(three), Err(TreeError::MismatchedContainer));
        assert_eq!(
            tree.attach(three, &mut left, &mut right),
            Err(TreeError::MismatchedContainer)
        );
        assert_eq!(other.num_children(plus), Err(TreeError::MismatchedContainer));
        assert_ne!(plus, x);
        assert_eq!(tree.len(), 7);
    }

    #[traced_test]
    #[test]
    fn delete_keeps_side() {
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root("root").unwrap();
        let right = tree.add_right(root, "right").unwrap();
        let grandchild = tree.add_left(right, "grandchild").unwrap();

        assert_eq!(tree.delete(right), Ok("right"));
        // grandchild moved into the right slot of root
        assert_eq!(tree.right(root), Ok(Some(grandchild)));
        assert_eq!(tree.left(root), Ok(None));
        assert_eq!(tree.parent(grandchild), Ok(Some(root)));
        assert_eq!(tree.element(right), Err(TreeError::InvalidPosition));
        assert_eq!(tree.len(), 2);

        assert!(logs_contain("Deleted"));
    }

    #[test]
    fn delete_rejects_two_children() {
        let (mut tree, [root, times, ..]) = expression_tree();

        assert_eq!(tree.delete(root), Err(TreeError::TooManyChildren));
        assert_eq!(tree.delete(times), Err(TreeError::TooManyChildren));
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn delete_root() {
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root(1).unwrap();
        let left = tree.add_left(root, 2).unwrap();

        assert_eq!(tree.delete(root), Ok(1));
        assert_eq!(tree.root(), Some(left));
        assert_eq!(tree.sibling(left), Ok(None));
        assert_eq!(tree.delete(left), Ok(2));
        assert!(tree.is_empty());
    }

    #[test]
    fn attach_left_and_right() {
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root("+").unwrap();

        let (mut left, _) = expression_tree();
        let mut right = LinkedBinaryTree::new();
        right.add_root("x").unwrap();

        tree.attach(root, &mut left, &mut right).unwrap();

        assert_eq!(tree.len(), 9);
        assert!(left.is_empty());
        assert!(right.is_empty());
        assert_eq!(tree.num_children(root), Ok(2));
        assert_eq!(
            binary_labels(&tree, tree.inorder(root).unwrap()),
            ["3", "*", "a", "+", "b", "-", "c", "+", "x"]
        );
    }

    #[test]
    fn attach_only_right() {
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root("r").unwrap();
        let mut left = LinkedBinaryTree::new();
        let mut right = LinkedBinaryTree::new();
        right.add_root("x").unwrap();

        tree.attach(root, &mut left, &mut right).unwrap();
        assert_eq!(tree.left(root), Ok(None));
        assert!(tree.right(root).unwrap().is_some());
    }

    #[test]
    fn attach_requires_leaf() {
        let (mut tree, [root, ..]) = expression_tree();
        let (mut left, _) = expression_tree();
        let (mut right, _) = expression_tree();

        assert_eq!(
            tree.attach(root, &mut left, &mut right),
            Err(TreeError::NotALeaf)
        );
        assert_eq!(left.len(), 7);
    }
}
