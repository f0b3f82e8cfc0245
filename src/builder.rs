//! Builders for constructing a [`GeneralTree`] declaratively.
//!
//! The `NodeBuilder` and `TreeBuilder` types enable building tree structures in a composable way.

use std::marker::PhantomData;

use tracing::{debug, debug_span};

use crate::{GeneralTree, Position, TraversalOrder, Tree as _, TreeError};

/// A builder for adding children beneath one node.
///
/// Handed to the closures passed to [`TreeBuilder::root`] and
/// [`NodeBuilder::child`].
pub struct NodeBuilder<'a, T, E> {
    tree: &'a mut GeneralTree<T>,
    position: Position,
    _phantom: PhantomData<E>,
}

impl<'a, T, E> NodeBuilder<'a, T, E>
where
    E: From<TreeError>,
{
    fn new(tree: &'a mut GeneralTree<T>, position: Position) -> Self {
        Self {
            tree,
            position,
            _phantom: PhantomData,
        }
    }

    /// Adds a child to the current node.
    ///
    /// # Arguments
    ///
    /// * `data`: The element to store in the child node.
    /// * `f`: A closure that takes the child builder and adds its own children.
    pub fn child<F>(&mut self, data: T, f: F) -> Result<Position, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, T, E>) -> Result<(), E>,
    {
        let position = self.tree.add_child(self.position, data)?;

        let mut node_builder = NodeBuilder::<T, E>::new(&mut *self.tree, position);

        // Call the supplied closure with the NodeBuilder to add this node's children
        f(&mut node_builder)?;

        Ok(position)
    }

    /// Position of the node being built
    pub fn position(&self) -> Position {
        self.position
    }
}

/// A builder for constructing trees.
///
/// The `root` method adds the root node and calls the provided closure with a
/// [`NodeBuilder`] that recursively builds its children. The closures return
/// `Result<(), E>` where `E` is your error type, which must absorb
/// [`TreeError`] so tree failures propagate through the closures.
///
/// # Examples
///
/// ```
/// use tamarack::{Tree, TreeBuilder, TreeError};
///
/// let tree = TreeBuilder::<&str, TreeError>::new()
///     .root("A", |a| {
///         a.child("B", |b| {
///             b.child("D", |_| Ok(()))?;
///             Ok(())
///         })?;
///         a.child("C", |_| Ok(()))?;
///         Ok(())
///     })?
///     .done()?;
///
/// assert_eq!(tree.len(), 4);
/// # Ok::<(), TreeError>(())
/// ```
pub struct TreeBuilder<T, E> {
    tree: GeneralTree<T>,
    debug_span: tracing::Span,
    _phantom: PhantomData<E>,
}

impl<T, E> Default for TreeBuilder<T, E>
where
    E: From<TreeError>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> TreeBuilder<T, E>
where
    E: From<TreeError>,
{
    /// Creates a new `TreeBuilder` instance.
    pub fn new() -> Self {
        Self::with_order(TraversalOrder::default())
    }

    /// Creates a builder for a tree whose `positions()` use `order`
    pub fn with_order(order: TraversalOrder) -> Self {
        let debug_span = debug_span!("TreeBuilder");
        debug_span.in_scope(|| debug!("Created new TreeBuilder"));

        Self {
            tree: GeneralTree::with_order(order),
            debug_span,
            _phantom: PhantomData,
        }
    }

    /// Adds a root node to the tree and returns the updated builder.
    ///
    /// # Arguments
    ///
    /// * `data`: The element to store at the root.
    /// * `f`: A closure that takes the root builder and adds its own children.
    pub fn root<F>(mut self, data: T, f: F) -> Result<Self, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, T, E>) -> Result<(), E>,
    {
        let span = self.debug_span.clone();
        span.in_scope(|| -> Result<(), E> {
            let position = self.tree.add_root(data)?;
            debug!("Added root");

            let mut node_builder = NodeBuilder::<T, E>::new(&mut self.tree, position);

            // Call the supplied closure with the NodeBuilder to add this node's children
            f(&mut node_builder)
        })?;

        Ok(self)
    }

    /// Returns the constructed tree when finished building it.
    pub fn done(self) -> Result<GeneralTree<T>, E> {
        self.debug_span
            .in_scope(|| debug!(size = self.tree.len(), "Finished building tree"));
        Ok(self.tree)
    }
}
