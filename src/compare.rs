use crate::{iterator::children_of, GeneralTree, Position, Tree};

/// Tree Comparison
///
/// Two general trees are equal when they hold equal elements in the same
/// shape: their preorder walks pair up element for element, with matching
/// child counts at every position. Tree identity and positions order are not
/// compared.
impl<T> PartialEq for GeneralTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self.root(), other.root()) {
            (None, None) => true,
            (Some(root), Some(other_root)) => {
                self.len() == other.len() && shape(self, root).eq(shape(other, other_root))
            }
            _ => false,
        }
    }
}

impl<T> Eq for GeneralTree<T> where T: Eq {}

/// Preorder (element, child count) pairs of the subtree at `root`
fn shape<T>(
    tree: &GeneralTree<T>,
    root: Position,
) -> impl Iterator<Item = (Option<&T>, usize)> + '_ {
    tree.preorder(root)
        .into_iter()
        .flatten()
        .map(move |p| (tree.element(p).ok(), children_of(tree, p).len()))
}
