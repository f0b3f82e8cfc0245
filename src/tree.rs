use crate::{
    iterator::{
        BreadthFirst, DepthFirst, Elements, EulerTour, Postorder, Preorder, Traversal,
        TraversalOrder,
    },
    Position, TreeError, TreeResult,
};

/// The general tree contract.
///
/// Implementors supply the structural accessors. Everything else, including
/// all traversal orders, is derived from them here and shared by every
/// concrete tree.
///
/// Every method taking a [`Position`] validates it first and fails with
/// [`TreeError::MismatchedContainer`] for a position from another tree, or
/// [`TreeError::InvalidPosition`] for one whose node has been removed.
pub trait Tree: Sized {
    type Element;

    /// Iterator returned by [`Tree::positions`]
    type Positions<'a>: Iterator<Item = Position>
    where
        Self: 'a;

    /// Total number of elements
    fn len(&self) -> usize;

    /// Root position, or `None` if the tree is empty
    fn root(&self) -> Option<Position>;

    /// Element stored at `p`
    fn element(&self, p: Position) -> TreeResult<&Self::Element>;

    /// Parent of `p`, or `None` if `p` is the root
    fn parent(&self, p: Position) -> TreeResult<Option<Position>>;

    fn num_children(&self, p: Position) -> TreeResult<usize>;

    /// Children of `p` in declared order
    fn children(&self, p: Position) -> TreeResult<Vec<Position>>;

    /// Every position of the tree, in an order fixed by the implementation
    fn positions(&self) -> Self::Positions<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_root(&self, p: Position) -> TreeResult<bool> {
        Ok(self.parent(p)?.is_none() && self.root() == Some(p))
    }

    fn is_leaf(&self, p: Position) -> TreeResult<bool> {
        Ok(self.num_children(p)? == 0)
    }

    /// Number of edges between `p` and the root
    fn depth(&self, p: Position) -> TreeResult<usize> {
        let mut depth = 0;
        let mut current = self.parent(p)?;

        while let Some(ancestor) = current {
            depth += 1;
            current = self.parent(ancestor)?;
        }

        Ok(depth)
    }

    /// Longest downward edge count from `p`, or from the root when `p` is `None`.
    ///
    /// Fails with [`TreeError::EmptyContainer`] when asked for the height of
    /// an empty tree.
    fn height(&self, p: Option<Position>) -> TreeResult<usize> {
        let p = match p {
            Some(p) => p,
            None => self.root().ok_or(TreeError::EmptyContainer)?,
        };

        // (position, edges below p)
        let mut stack = vec![(p, 0)];
        let mut height = 0;

        while let Some((position, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(
                self.children(position)?
                    .into_iter()
                    .map(|child| (child, level + 1)),
            );
        }

        Ok(height)
    }

    /// Elements in [`Tree::positions`] order
    fn elements(&self) -> Elements<'_, Self> {
        Elements::new(self)
    }

    fn preorder(&self, p: Position) -> TreeResult<Preorder<'_, Self>> {
        self.parent(p)?;
        Ok(Preorder::new(self, Some(p)))
    }

    fn postorder(&self, p: Position) -> TreeResult<Postorder<'_, Self>> {
        self.parent(p)?;
        Ok(Postorder::new(self, Some(p)))
    }

    fn euler_tour(&self, p: Position) -> TreeResult<EulerTour<'_, Self>> {
        self.parent(p)?;
        Ok(EulerTour::new(self, Some(p)))
    }

    fn breadth_first(&self, p: Position) -> TreeResult<BreadthFirst<'_, Self>> {
        self.parent(p)?;
        Ok(BreadthFirst::new(self, Some(p)))
    }

    fn depth_first(&self, p: Position) -> TreeResult<DepthFirst<'_, Self>> {
        self.parent(p)?;
        Ok(DepthFirst::new(self, Some(p)))
    }

    /// Traverse the subtree at `p` in the given order
    fn traverse(&self, order: TraversalOrder, p: Position) -> TreeResult<Traversal<'_, Self>> {
        self.parent(p)?;
        Ok(Traversal::new(self, order, Some(p)))
    }
}
