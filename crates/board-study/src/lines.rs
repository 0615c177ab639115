//! Opening-line prefix tree.
//!
//! Studied move sequences accumulate in a trie: shared prefixes merge into
//! one path, so "1. e4 e5" and "1. e4 c5" share a single `e4` node. Nodes
//! persist for the life of the study session; there is no removal.

use board_core::Color;

/// One node of the line trie: a move label plus its continuations.
///
/// Each parent exclusively owns its children; siblings are unique by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineNode {
    label: String,
    children: Vec<LineNode>,
}

impl LineNode {
    fn new(label: &str) -> Self {
        LineNode {
            label: label.to_string(),
            children: Vec::new(),
        }
    }

    /// Returns this node's move label (empty for the root sentinel).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the continuations of this node, in insertion order.
    pub fn children(&self) -> &[LineNode] {
        &self.children
    }

    /// Returns the child with the given label, if present.
    pub fn child(&self, label: &str) -> Option<&LineNode> {
        self.children.iter().find(|c| c.label == label)
    }

    fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(LineNode::leaf_count).sum()
        }
    }
}

/// A prefix tree of studied lines for one side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTrie {
    root: LineNode,
}

impl LineTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a move sequence into the trie.
    ///
    /// Walks the labels from the root, descending into an existing child
    /// with a matching label or creating one. Inserting the same sequence
    /// twice changes nothing.
    pub fn insert<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut node = &mut self.root;
        for label in labels {
            let label = label.as_ref();
            let index = match node.children.iter().position(|c| c.label == label) {
                Some(i) => i,
                None => {
                    node.children.push(LineNode::new(label));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }
    }

    /// Returns the unlabeled root sentinel.
    pub fn root(&self) -> &LineNode {
        &self.root
    }

    /// Returns true if no line has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Returns the number of distinct lines (leaf paths) in the trie.
    pub fn line_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.root.leaf_count()
        }
    }
}

/// Studied lines for both sides: one trie per color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBook {
    tries: [LineTrie; 2],
}

impl LineBook {
    /// Creates an empty line book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a move sequence into the trie for the given side.
    pub fn insert_line<I, S>(&mut self, side: Color, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tries[side.index()].insert(labels);
    }

    /// Returns the trie for the given side.
    pub fn trie(&self, side: Color) -> &LineTrie {
        &self.tries[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_builds_a_path() {
        let mut trie = LineTrie::new();
        trie.insert(["e4", "e5", "Nf3"]);

        let e4 = trie.root().child("e4").unwrap();
        let e5 = e4.child("e5").unwrap();
        assert!(e5.child("Nf3").is_some());
        assert_eq!(trie.line_count(), 1);
    }

    #[test]
    fn shared_prefixes_merge() {
        let mut trie = LineTrie::new();
        trie.insert(["e4", "e5"]);
        trie.insert(["e4", "c5"]);

        // One e4 child with two continuations, not two e4 branches.
        assert_eq!(trie.root().children().len(), 1);
        let e4 = trie.root().child("e4").unwrap();
        assert_eq!(e4.children().len(), 2);
        assert!(e4.child("e5").is_some());
        assert!(e4.child("c5").is_some());
        assert_eq!(trie.line_count(), 2);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = LineTrie::new();
        trie.insert(["e4", "e5"]);
        let snapshot = trie.clone();
        trie.insert(["e4", "e5"]);
        assert_eq!(trie, snapshot);
    }

    #[test]
    fn prefix_of_existing_line_adds_nothing() {
        let mut trie = LineTrie::new();
        trie.insert(["e4", "e5", "Nf3"]);
        trie.insert(["e4", "e5"]);
        assert_eq!(trie.line_count(), 1);
    }

    #[test]
    fn empty_sequence_is_a_no_op() {
        let mut trie = LineTrie::new();
        trie.insert(std::iter::empty::<&str>());
        assert!(trie.is_empty());
        assert_eq!(trie.line_count(), 0);
    }

    #[test]
    fn book_keeps_sides_separate() {
        let mut book = LineBook::new();
        book.insert_line(Color::White, ["e4", "e5"]);
        book.insert_line(Color::Black, ["d4", "Nf6"]);

        assert!(book.trie(Color::White).root().child("e4").is_some());
        assert!(book.trie(Color::White).root().child("d4").is_none());
        assert!(book.trie(Color::Black).root().child("d4").is_some());
    }
}
