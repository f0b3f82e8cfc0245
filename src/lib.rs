//! # Tamarack
//!
//! Position-based trees and their traversals.
//!
//! ## Overview
//!
//! The [`Tree`] trait captures what any tree must answer (its root, a
//! position's parent and children) and derives everything else from that:
//! depth, height, and the preorder, postorder, Euler tour, breadth-first and
//! depth-first traversals. [`BinaryTree`] adds left/right access, siblings and
//! inorder traversal.
//!
//! [`GeneralTree`] and [`LinkedBinaryTree`] are the concrete trees. Their
//! nodes live in a generational arena and are addressed by [`Position`]
//! handles, which the owning tree validates on every call: a position from
//! another tree, or one whose node has been deleted, is rejected with a
//! [`TreeError`] rather than resolving to stale data.
//!
//! Traversals are lazy iterators that borrow the tree, so a tree cannot be
//! mutated while one of its traversals is alive.

mod binary;
mod builder;
mod compare;
mod display;
mod error;
mod general;
mod hash;
mod id;
mod iterator;
mod linked_binary;
mod node;
mod position;
mod tree;

pub mod collections;


pub use binary::{BinaryTree, Inorder};
pub use builder::*;
pub use display::TreeDisplay;
pub use error::{TreeError, TreeResult};
pub use general::GeneralTree;
pub use hash::TreeHash;
pub use id::TreeId;
pub use iterator::{
    BreadthFirst, DepthFirst, Elements, EulerTour, Postorder, Preorder, Traversal, TraversalOrder,
};
pub use linked_binary::LinkedBinaryTree;
pub use position::{Position, Side};
pub use tree::Tree;
