//! Lazy traversal iterators.
//!
//! Every iterator holds its own work-list and a shared borrow of the tree, so
//! the tree cannot be mutated while a traversal is alive. Dropping an
//! iterator part way through leaves nothing behind.

use tracing::error;

use crate::{
    collections::{ArrayQueue, ArrayStack},
    Position, Tree,
};

/// Children of `p`, or none if `p` no longer resolves
pub(crate) fn children_of<T: Tree>(tree: &T, p: Position) -> Vec<Position> {
    tree.children(p).unwrap_or_else(|err| {
        error!(position = %p, %err, "Traversal reached an unresolvable position");
        Vec::new()
    })
}

/// Order in which a traversal visits positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    Preorder,
    Postorder,
    /// Each position on entry and again on exit
    #[default]
    EulerTour,
    BreadthFirst,
    /// Iterative stack walk, children visited in reverse declared order
    DepthFirst,
}

/// Node first, then each child's subtree in declared order
pub struct Preorder<'a, T: Tree> {
    tree: &'a T,
    stack: Vec<Position>,
}

impl<'a, T: Tree> Preorder<'a, T> {
    pub(crate) fn new(tree: &'a T, start: Option<Position>) -> Self {
        Self {
            tree,
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, T: Tree> Iterator for Preorder<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.stack.pop()?;
        // Reversed so the first child is on top
        self.stack
            .extend(children_of(self.tree, p).into_iter().rev());
        Some(p)
    }
}

/// Each child's subtree in declared order, then the node
pub struct Postorder<'a, T: Tree> {
    tree: &'a T,
    // (position, children already scheduled)
    stack: Vec<(Position, bool)>,
}

impl<'a, T: Tree> Postorder<'a, T> {
    pub(crate) fn new(tree: &'a T, start: Option<Position>) -> Self {
        Self {
            tree,
            stack: start.into_iter().map(|p| (p, false)).collect(),
        }
    }
}

impl<'a, T: Tree> Iterator for Postorder<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((p, expanded)) = self.stack.pop() {
            if expanded {
                return Some(p);
            }

            self.stack.push((p, true));
            self.stack.extend(
                children_of(self.tree, p)
                    .into_iter()
                    .rev()
                    .map(|child| (child, false)),
            );
        }
        None
    }
}

enum Visit {
    Enter(Position),
    Exit(Position),
}

/// Yields a node on entry, tours each child, then yields the node again on exit
pub struct EulerTour<'a, T: Tree> {
    tree: &'a T,
    stack: Vec<Visit>,
}

impl<'a, T: Tree> EulerTour<'a, T> {
    pub(crate) fn new(tree: &'a T, start: Option<Position>) -> Self {
        Self {
            tree,
            stack: start.into_iter().map(Visit::Enter).collect(),
        }
    }
}

impl<'a, T: Tree> Iterator for EulerTour<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            Visit::Enter(p) => {
                self.stack.push(Visit::Exit(p));
                self.stack.extend(
                    children_of(self.tree, p)
                        .into_iter()
                        .rev()
                        .map(Visit::Enter),
                );
                Some(p)
            }
            Visit::Exit(p) => Some(p),
        }
    }
}

/// Level by level, driven by a FIFO work-list
pub struct BreadthFirst<'a, T: Tree> {
    tree: &'a T,
    queue: ArrayQueue<Position>,
}

impl<'a, T: Tree> BreadthFirst<'a, T> {
    pub(crate) fn new(tree: &'a T, start: Option<Position>) -> Self {
        let mut queue = ArrayQueue::new();
        if let Some(p) = start {
            queue.enqueue(p);
        }
        Self { tree, queue }
    }
}

impl<'a, T: Tree> Iterator for BreadthFirst<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }

        let p = self.queue.dequeue().ok()?;
        for child in children_of(self.tree, p) {
            self.queue.enqueue(child);
        }
        Some(p)
    }
}

/// Driven by a LIFO work-list.
///
/// Children are pushed in declared order and therefore popped in reverse, so
/// siblings are visited last to first. This differs from [`Preorder`].
pub struct DepthFirst<'a, T: Tree> {
    tree: &'a T,
    stack: ArrayStack<Position>,
}

impl<'a, T: Tree> DepthFirst<'a, T> {
    pub(crate) fn new(tree: &'a T, start: Option<Position>) -> Self {
        let mut stack = ArrayStack::new();
        if let Some(p) = start {
            stack.push(p);
        }
        Self { tree, stack }
    }
}

impl<'a, T: Tree> Iterator for DepthFirst<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            return None;
        }

        let p = self.stack.pop().ok()?;
        for child in children_of(self.tree, p) {
            self.stack.push(child);
        }
        Some(p)
    }
}

/// Any of the traversals, selected at runtime by [`TraversalOrder`]
pub enum Traversal<'a, T: Tree> {
    Preorder(Preorder<'a, T>),
    Postorder(Postorder<'a, T>),
    EulerTour(EulerTour<'a, T>),
    BreadthFirst(BreadthFirst<'a, T>),
    DepthFirst(DepthFirst<'a, T>),
}

impl<'a, T: Tree> Traversal<'a, T> {
    pub(crate) fn new(tree: &'a T, order: TraversalOrder, start: Option<Position>) -> Self {
        match order {
            TraversalOrder::Preorder => Traversal::Preorder(Preorder::new(tree, start)),
            TraversalOrder::Postorder => Traversal::Postorder(Postorder::new(tree, start)),
            TraversalOrder::EulerTour => Traversal::EulerTour(EulerTour::new(tree, start)),
            TraversalOrder::BreadthFirst => {
                Traversal::BreadthFirst(BreadthFirst::new(tree, start))
            }
            TraversalOrder::DepthFirst => Traversal::DepthFirst(DepthFirst::new(tree, start)),
        }
    }
}

impl<'a, T: Tree> Iterator for Traversal<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::Preorder(iter) => iter.next(),
            Traversal::Postorder(iter) => iter.next(),
            Traversal::EulerTour(iter) => iter.next(),
            Traversal::BreadthFirst(iter) => iter.next(),
            Traversal::DepthFirst(iter) => iter.next(),
        }
    }
}

/// Elements of a tree in its `positions()` order
pub struct Elements<'a, T: Tree + 'a> {
    tree: &'a T,
    positions: T::Positions<'a>,
}

impl<'a, T: Tree + 'a> Elements<'a, T> {
    pub(crate) fn new(tree: &'a T) -> Self {
        Self {
            tree,
            positions: tree.positions(),
        }
    }
}

impl<'a, T: Tree + 'a> Iterator for Elements<'a, T> {
    type Item = &'a T::Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let p = self.positions.next()?;
            match self.tree.element(p) {
                Ok(element) => return Some(element),
                Err(err) => error!(position = %p, %err, "Skipping unresolvable position"),
            }
        }
    }
}
