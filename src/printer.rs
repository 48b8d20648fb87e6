//! Rendering trees as indented text.
//!
//! ```rust
//! use bough::forest::Forest;
//!
//! let mut forest = Forest::new();
//! let root = forest.add(1);
//! forest.node_mut(root).push_child(2);
//! let three = forest.node_mut(root).push_child(3);
//! forest.node_mut(three).push_child(4);
//! forest.node_mut(three).push_child(5);
//!
//! assert_eq!(
//!     forest.pretty_print(root).to_string(),
//!     "\
//! 1
//! |-- 2
//! `-- 3
//!     |-- 4
//!     `-- 5",
//! );
//! ```

use core::fmt::{self, Formatter, Display, Write};
use hashbrown::HashSet;
use crate::{
    forest::{Forest, NodeId},
    util::Stack,
};

/// The set of characters used to draw the edges of the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// `|--`, `` `-- `` and `|`.
    Ascii,
    /// Box-drawing characters: `├──`, `└──` and `│`.
    Unicode,
}
impl Style {
    const fn connector(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (Self::Ascii, false) => "|-- ",
            (Self::Ascii, true) => "`-- ",
            (Self::Unicode, false) => "├── ",
            (Self::Unicode, true) => "└── ",
        }
    }
    const fn indent(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (_, true) => "    ",
            (Self::Ascii, false) => "|   ",
            (Self::Unicode, false) => "│   ",
        }
    }
}
impl Default for Style {
    #[inline]
    fn default() -> Self {
        Self::Ascii
    }
}

/// A displayable rendering of the subtree rooted at a node, one node per line.
///
/// Created by [`Forest::pretty_print`]. A node which is reached a second time is printed as `<cycle>` and not descended into.
///
/// [`Forest::pretty_print`]: ../forest/struct.Forest.html#method.pretty_print " "
#[derive(Debug)]
pub struct PrettyPrint<'a, P> {
    forest: &'a Forest<P>,
    root: NodeId,
    style: Style,
}
impl<P> Copy for PrettyPrint<'_, P> {}
impl<P> Clone for PrettyPrint<'_, P> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, P> PrettyPrint<'a, P> {
    /// Selects the characters used to draw edges.
    #[inline(always)]
    pub fn style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}
impl<P: Display> Display for PrettyPrint<'_, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.forest.value(self.root))?;
        let mut seen = HashSet::new();
        seen.insert(self.root);
        // (node, prefix, is_last)
        let mut stack = Stack::<(NodeId, String, bool)>::new();
        push_children(self.forest, self.root, "", &mut stack);
        while let Some((node, prefix, is_last)) = stack.pop() {
            f.write_char('\n')?;
            f.write_str(&prefix)?;
            f.write_str(self.style.connector(is_last))?;
            if !seen.insert(node) {
                f.write_str("<cycle>")?;
                continue;
            }
            write!(f, "{}", self.forest.value(node))?;
            let prefix = prefix + self.style.indent(is_last);
            push_children(self.forest, node, &prefix, &mut stack);
        }
        Ok(())
    }
}

fn push_children<P>(forest: &Forest<P>, node: NodeId, prefix: &str, stack: &mut Stack<(NodeId, String, bool)>) {
    let mut child = forest.node(node).last_child();
    let mut is_last = true;
    while let Some(current) = child {
        stack.push((current.id(), prefix.to_owned(), is_last));
        is_last = false;
        child = current.prev_sibling();
    }
}

impl<P> Forest<P> {
    /// Returns a value which renders the subtree rooted at the specified node when displayed.
    ///
    /// See the [`printer`] module for an example.
    ///
    /// [`printer`]: ../printer/index.html " "
    #[inline]
    pub fn pretty_print(&self, root: NodeId) -> PrettyPrint<'_, P> {
        PrettyPrint {
            forest: self,
            root,
            style: Style::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use pretty_assertions::assert_eq;

    fn sample(forest: &mut Forest<u32>) -> NodeId {
        let mut builder = Builder::new(|value: &u32, _: &mut ()| {
            Ok::<_, ()>(match value {
                1 => vec![2, 3],
                2 => vec![6],
                3 => vec![4, 5],
                _ => Vec::new(),
            })
        });
        builder.build(forest, 1, ()).unwrap().root().unwrap()
    }

    #[test]
    fn ascii() {
        let mut forest = Forest::new();
        let root = sample(&mut forest);
        assert_eq!(
            forest.pretty_print(root).to_string(),
            "\
1
|-- 2
|   `-- 6
`-- 3
    |-- 4
    `-- 5",
        );
    }

    #[test]
    fn unicode() {
        let mut forest = Forest::new();
        let root = sample(&mut forest);
        assert_eq!(
            forest.pretty_print(root).style(Style::Unicode).to_string(),
            "\
1
├── 2
│   └── 6
└── 3
    ├── 4
    └── 5",
        );
    }

    #[test]
    fn lone_node() {
        let mut forest = Forest::new();
        let root = forest.add("alone");
        assert_eq!(forest.pretty_print(root).to_string(), "alone");
    }

    #[test]
    fn subtree_only() {
        let mut forest = Forest::new();
        let root = sample(&mut forest);
        let three = forest.node(root).last_child().unwrap().id();
        assert_eq!(forest.pretty_print(three).to_string(), "3\n|-- 4\n`-- 5");
    }
}
