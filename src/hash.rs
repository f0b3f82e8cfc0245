use std::hash::{Hash, Hasher as _};

use tracing::error;
use xxhash_rust::xxh64::Xxh64;

use crate::{iterator::children_of, Position, Tree, TreeResult};

/// Content and shape fingerprint of a tree.
///
/// Positions are hashed in preorder, each contributing its element and its
/// child count. The pair sequence determines an ordered tree uniquely, so two
/// trees share a fingerprint when they hold equal elements in the same shape
/// (up to hash collisions). Tree equality compares the pair sequences
/// directly and does not rely on this.
pub trait TreeHash {
    /// Fingerprint of the whole tree
    fn fingerprint(&self) -> u64;

    /// Fingerprint of the subtree rooted at `p`
    fn subtree_fingerprint(&self, p: Position) -> TreeResult<u64>;
}

impl<R> TreeHash for R
where
    R: Tree,
    R::Element: Hash,
{
    fn fingerprint(&self) -> u64 {
        match self.root() {
            Some(root) => self.subtree_fingerprint(root).unwrap_or_else(|err| {
                error!(position = %root, %err, "Root did not resolve while fingerprinting");
                0
            }),
            None => Xxh64::new(0).finish(),
        }
    }

    fn subtree_fingerprint(&self, p: Position) -> TreeResult<u64> {
        let mut hasher = Xxh64::new(0);

        for position in self.preorder(p)? {
            self.element(position)?.hash(&mut hasher);
            children_of(self, position).len().hash(&mut hasher);
        }

        Ok(hasher.finish())
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::TreeHash;
    use crate::{test::scenario_tree, GeneralTree, TreeError};

    #[test]
    fn equal_trees_share_fingerprint() {
        let (a, _) = scenario_tree();
        let (b, _) = scenario_tree();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn shape_changes_fingerprint() {
        // A(B, C) against A(B(C))
        let mut wide = GeneralTree::new();
        let root = wide.add_root("A").unwrap();
        wide.add_child(root, "B").unwrap();
        wide.add_child(root, "C").unwrap();

        let mut deep = GeneralTree::new();
        let root = deep.add_root("A").unwrap();
        let b = deep.add_child(root, "B").unwrap();
        deep.add_child(b, "C").unwrap();

        assert_ne!(wide.fingerprint(), deep.fingerprint());
    }

    #[test]
    fn subtree_fingerprints() {
        let (tree, [_, b, c, d]) = scenario_tree();

        let mut single = GeneralTree::new();
        single.add_root("C").unwrap();

        assert_eq!(tree.subtree_fingerprint(c), Ok(single.fingerprint()));
        assert_ne!(tree.subtree_fingerprint(b), tree.subtree_fingerprint(d));

        let (other, [x, ..]) = scenario_tree();
        assert_eq!(
            tree.subtree_fingerprint(x),
            Err(TreeError::MismatchedContainer)
        );
        assert!(other.subtree_fingerprint(x).is_ok());
    }

    #[traced_test]
    #[test]
    fn fingerprint_of_resolvable_root_logs_nothing() {
        let (tree, _) = scenario_tree();
        assert_ne!(tree.fingerprint(), 0);
        assert_ne!(tree.fingerprint(), GeneralTree::<&str>::new().fingerprint());
        assert!(!logs_contain("did not resolve"));
    }
}
