//! Arena-resident nodes.
//!
//! Links between nodes are arena indices rather than owning references, so a
//! node can point at its parent without shared ownership.

use generational_arena::Index;

use crate::Side;

/// Node of a [`GeneralTree`](crate::GeneralTree)
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    /// `None` for the root
    pub(crate) parent: Option<Index>,
    pub(crate) children: Vec<Index>,
}

impl<T> Node<T> {
    pub(crate) fn new(element: T, parent: Option<Index>) -> Self {
        Self {
            element,
            parent,
            children: Vec::new(),
        }
    }
}

/// Node of a [`LinkedBinaryTree`](crate::LinkedBinaryTree)
#[derive(Debug, Clone)]
pub(crate) struct BinaryNode<T> {
    pub(crate) element: T,
    pub(crate) parent: Option<Index>,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl<T> BinaryNode<T> {
    pub(crate) fn new(element: T, parent: Option<Index>) -> Self {
        Self {
            element,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Index>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn num_children(&self) -> usize {
        self.left.iter().chain(self.right.iter()).count()
    }
}
