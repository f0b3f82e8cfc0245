use colored::Colorize;
use generational_arena::{Arena, Index};
use tracing::{debug, debug_span};

use crate::{
    display::TreeDisplay, iterator::Traversal, node::Node, Position, Tree, TreeError, TreeId,
    TreeResult, TraversalOrder,
};

/// Node-linked tree with any number of ordered children per node.
///
/// Nodes live in a generational arena owned by the tree. Removing a node
/// frees its slot and bumps the slot generation, so every [`Position`] still
/// naming that node fails validation from then on.
///
/// ```
/// use tamarack::{GeneralTree, Tree};
///
/// let mut tree = GeneralTree::new();
/// let a = tree.add_root("A")?;
/// let b = tree.add_child(a, "B")?;
/// tree.add_child(a, "C")?;
/// tree.add_child(b, "D")?;
///
/// let preorder: Vec<_> = tree
///     .preorder(a)?
///     .map(|p| *tree.element(p).unwrap())
///     .collect();
/// assert_eq!(preorder, ["A", "B", "D", "C"]);
/// # Ok::<(), tamarack::TreeError>(())
/// ```
#[derive(Debug)]
pub struct GeneralTree<T> {
    id: TreeId,
    arena: Arena<Node<T>>,
    root: Option<Index>,
    order: TraversalOrder,
}

impl<T> Default for GeneralTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GeneralTree<T> {
    /// Create an empty tree whose positions are produced by an Euler tour
    pub fn new() -> Self {
        Self::with_order(TraversalOrder::default())
    }

    /// Create an empty tree whose `positions()` use the given order
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

    fn validate(&self, p: Position) -> TreeResult<&Node<T>> {
        if p.tree_id() != self.id {
            return Err(TreeError::MismatchedContainer);
        }
        self.arena.get(p.index()).ok_or(TreeError::InvalidPosition)
    }

    fn validate_mut(&mut self, p: Position) -> TreeResult<&mut Node<T>> {
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

        let index = self.arena.insert(Node::new(element, None));
        self.root = Some(index);

        let position = self.make_position(index);
        debug!(tree = %self.id, "{} {}", "Add root".bright_green(), position);
        Ok(position)
    }

    /// Append a new child holding `element` to the children of `p`
    pub fn add_child(&mut self, p: Position, element: T) -> TreeResult<Position> {
        self.validate(p)?;

        let index = self.arena.insert(Node::new(element, Some(p.index())));
        if let Some(parent) = self.arena.get_mut(p.index()) {
            parent.children.push(index);
        }

        let position = self.make_position(index);
        debug!(tree = %self.id, "{} {} under {}", "Add child".bright_green(), position, p);
        Ok(position)
    }

    /// Store `element` at `p`, returning the element it replaces
    pub fn replace(&mut self, p: Position, element: T) -> TreeResult<T> {
        let node = self.validate_mut(p)?;
        let old = std::mem::replace(&mut node.element, element);

        debug!(tree = %self.id, "{} {}", "Replace".bright_yellow(), p);
        Ok(old)
    }

    /// Remove the node at `p` and return its element.
    ///
    /// A node with a single child is spliced out: the child is re-parented to
    /// `p`'s parent and appended to that parent's children, or becomes the new
    /// root. Fails with [`TreeError::TooManyChildren`] if `p` has more than one
    /// child.
    pub fn delete(&mut self, p: Position) -> TreeResult<T> {
        let node = self.validate(p)?;
        if node.children.len() > 1 {
            return Err(TreeError::TooManyChildren);
        }

        let _span = debug_span!("delete", tree = %self.id, position = %p).entered();

        let parent = node.parent;
        let child = node.children.first().copied();

        if let Some(child_node) = child.and_then(|child| self.arena.get_mut(child)) {
            child_node.parent = parent;
        }

        match parent {
            None => self.root = child,
            Some(parent) => {
                if let Some(parent) = self.arena.get_mut(parent) {
                    parent.children.retain(|&sibling| sibling != p.index());
                    parent.children.extend(child);
                }
            }
        }

        let removed = self
            .arena
            .remove(p.index())
            .ok_or(TreeError::InvalidPosition)?;

        debug!(
            "{} promoted child {:?}, {} remaining",
            "Deleted".bright_red(),
            child.map(|child| self.make_position(child).to_string()),
            self.arena.len()
        );

        Ok(removed.element)
    }

    /// Attach the whole of `left` and then `right` as new children of the leaf `p`.
    ///
    /// Nodes move into this tree's arena and the donor trees are left empty;
    /// positions into the donors are invalidated.
    pub fn attach(&mut self, p: Position, left: &mut Self, right: &mut Self) -> TreeResult<()> {
        if !self.is_leaf(p)? {
            return Err(TreeError::NotALeaf);
        }

        let _span = debug_span!("attach", tree = %self.id, position = %p).entered();

        for donor in [left, right] {
            if let Some(root) = donor.root.take() {
                let moved = self.transplant(donor, root, p.index());
                debug!("{} {} nodes from {}", "Attached".bright_blue(), moved, donor.id);
            }
        }

        Ok(())
    }

    /// Move the subtree rooted at `root` out of `donor`, appending it to the
    /// children of `parent`. Returns the number of nodes moved.
    fn transplant(&mut self, donor: &mut Self, root: Index, parent: Index) -> usize {
        let mut moved = 0;
        let mut work = vec![(root, parent)];

        while let Some((donor_index, parent)) = work.pop() {
            let Some(node) = donor.arena.remove(donor_index) else {
                continue;
            };

            let index = self.arena.insert(Node::new(node.element, Some(parent)));
            if let Some(parent) = self.arena.get_mut(parent) {
                parent.children.push(index);
            }

            // Reversed so siblings are re-created in declared order
            work.extend(node.children.into_iter().rev().map(|child| (child, index)));
            moved += 1;
        }

        moved
    }
}

impl<T> Tree for GeneralTree<T> {
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
        Ok(self.validate(p)?.children.len())
    }

    fn children(&self, p: Position) -> TreeResult<Vec<Position>> {
        Ok(self
            .validate(p)?
            .children
            .iter()
            .map(|&index| self.make_position(index))
            .collect())
    }

    fn positions(&self) -> Self::Positions<'_> {
        Traversal::new(self, self.order, self.root())
    }
}

impl<T> std::fmt::Display for GeneralTree<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TreeDisplay::format(self, f)
    }
}
