use std::fmt::Write;

use crate::{iterator::children_of, Tree};

pub struct TreeDisplay;

impl TreeDisplay {
    /// Render one element per line in preorder, prefixed with box-drawing
    /// glyphs indented by depth.
    ///
    /// ```text
    /// ┏A
    /// ┣B
    /// ┃ ┗D
    /// ┗C
    /// ```
    pub fn format<T>(tree: &T, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    where
        T: Tree,
        T::Element: std::fmt::Display,
    {
        // (position, depth, is the last of its siblings, rails of open ancestors)
        let mut stack = Vec::from_iter(tree.root().map(|root| (root, 0, true, String::new())));

        while let Some((p, depth, last, rails)) = stack.pop() {
            let children = children_of(tree, p);

            if depth == 0 {
                if children.is_empty() {
                    f.write_char('━')?;
                } else {
                    f.write_char('┏')?;
                }
            } else {
                f.write_str(&rails)?;
                if last {
                    f.write_char('┗')?;
                } else {
                    f.write_char('┣')?;
                }
            }

            match tree.element(p) {
                Ok(element) => write!(f, "{}", element)?,
                Err(err) => write!(f, "<{}>", err)?,
            }
            f.write_char('\n')?;

            // A closed branch leaves a blank column under it
            let child_rails = match (depth, last) {
                (0, _) => String::new(),
                (_, true) => format!("{}  ", rails),
                (_, false) => format!("{}┃ ", rails),
            };

            let count = children.len();
            stack.extend(
                children
                    .into_iter()
                    .enumerate()
                    .rev()
                    .map(|(i, child)| (child, depth + 1, i + 1 == count, child_rails.clone())),
            );
        }

        Ok(())
    }
}
