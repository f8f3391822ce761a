//! Arena-backed document tree
//!
//! A changelog document is a tree of heading nodes. Each node owns the raw
//! text of its heading line and the free-text lines under it; children are
//! held by arena index, and the parent link is a non-owning index used only
//! for upward traversal while parsing.

mod line;
mod locate;
mod parse;
mod write;

pub use line::Line;
pub use locate::find_section;
pub use parse::parse;
pub use write::{render, write_to};

use generational_arena::{Arena, Index};

/// One heading plus everything textually under it until the next heading of
/// equal or higher hierarchy.
#[derive(Debug)]
pub struct Node {
    /// Raw heading line including `#` markers and line terminator; empty for
    /// the sentinel root
    pub value: String,
    /// Hierarchy depth: count of leading `#` markers, 0 for the root
    pub level: usize,
    /// Verbatim text lines (terminators preserved) before the first child
    pub contents: Vec<String>,
    /// Indices of child nodes, in insertion order
    pub children: Vec<Index>,
    /// Index of the parent node, None for the root
    pub parent: Option<Index>,
}

impl Node {
    /// Create a node from a raw heading line.
    ///
    /// The level is derived by counting leading `#` markers; no further
    /// validation is performed, so malformed heading text still yields a
    /// node.
    pub fn heading(line: impl Into<String>) -> Self {
        let value = line.into();
        let level = line::heading_level(&value);
        Self {
            value,
            level,
            contents: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    fn sentinel() -> Self {
        Self {
            value: String::new(),
            level: 0,
            contents: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

/// A parsed changelog document.
///
/// The root is a synthetic sentinel: it is never serialized itself, but its
/// contents (free text appearing before any heading) still are.
#[derive(Debug)]
pub struct Document {
    arena: Arena<Node>,
    root: Index,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document holding only the sentinel root
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(Node::sentinel());
        Self { arena, root }
    }

    /// Parse a document from text, preserving it byte-for-byte
    pub fn parse(text: &str) -> Self {
        parse::parse(text)
    }

    /// Index of the sentinel root
    pub fn root(&self) -> Index {
        self.root
    }

    /// Shared access to a node
    pub fn get(&self, idx: Index) -> Option<&Node> {
        self.arena.get(idx)
    }

    /// Mutable access to a node
    pub fn get_mut(&mut self, idx: Index) -> Option<&mut Node> {
        self.arena.get_mut(idx)
    }

    /// Attach a node as the last child of `parent`
    pub fn append_child(&mut self, parent: Index, node: Node) -> Index {
        self.insert_child(parent, node, false)
    }

    /// Attach a node as the first child of `parent`
    pub fn prepend_child(&mut self, parent: Index, node: Node) -> Index {
        self.insert_child(parent, node, true)
    }

    fn insert_child(&mut self, parent: Index, mut node: Node, front: bool) -> Index {
        node.parent = Some(parent);
        let idx = self.arena.insert(node);
        if let Some(parent_node) = self.arena.get_mut(parent) {
            if front {
                parent_node.children.insert(0, idx);
            } else {
                parent_node.children.push(idx);
            }
        }
        idx
    }

    /// Append a verbatim content line to a node
    pub fn append_content(&mut self, idx: Index, content: impl Into<String>) {
        if let Some(node) = self.arena.get_mut(idx) {
            node.contents.push(content.into());
        }
    }

    /// Serialize the whole document back to text
    pub fn render(&self) -> String {
        write::render(self)
    }

    /// Serialize the whole document to a writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write::write_to(self, writer)
    }

    /// Walk upward from `start` to the node a new heading of `level` should
    /// attach under: the nearest ancestor with a strictly smaller level.
    ///
    /// The sentinel root (level 0) bounds the walk, so it terminates for any
    /// input level.
    pub(crate) fn insertion_anchor(&self, start: Index, level: usize) -> Index {
        let mut anchor = start;
        while anchor != self.root {
            match self.get(anchor) {
                Some(node) if node.level >= level => {
                    anchor = node.parent.unwrap_or(self.root);
                }
                _ => break,
            }
        }
        anchor
    }

    /// Preorder iterator over all nodes, root first
    pub fn iter(&self) -> DocumentIter<'_> {
        DocumentIter::new(self)
    }
}

/// Depth-first preorder iterator over a document
pub struct DocumentIter<'a> {
    doc: &'a Document,
    stack: Vec<Index>,
}

impl<'a> DocumentIter<'a> {
    fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            stack: vec![doc.root],
        }
    }
}

impl<'a> Iterator for DocumentIter<'a> {
    type Item = (Index, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.doc.get(idx)?;
        // Push children in reverse order for left-to-right traversal
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some((idx, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_from_markers() {
        assert_eq!(Node::heading("# Changelog\n").level, 1);
        assert_eq!(Node::heading("### [Fixed]\n").level, 3);
        assert_eq!(Node::heading("######garbage\n").level, 6);
    }

    #[test]
    fn test_append_and_prepend_children() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.append_child(root, Node::heading("# A\n"));
        let b = doc.append_child(root, Node::heading("# B\n"));
        let c = doc.prepend_child(root, Node::heading("# C\n"));

        assert_eq!(doc.get(root).unwrap().children, vec![c, a, b]);
        assert_eq!(doc.get(a).unwrap().parent, Some(root));
        assert_eq!(doc.get(c).unwrap().parent, Some(root));
    }

    #[test]
    fn test_insertion_anchor_stops_at_root() {
        let mut doc = Document::new();
        let root = doc.root();
        let h1 = doc.append_child(root, Node::heading("# A\n"));
        let h2 = doc.append_child(h1, Node::heading("## B\n"));
        let h3 = doc.append_child(h2, Node::heading("### C\n"));

        // A level-2 heading after "### C" belongs under "# A"
        assert_eq!(doc.insertion_anchor(h3, 2), h1);
        // A level-9 heading nests under the current node
        assert_eq!(doc.insertion_anchor(h3, 9), h3);
        // Nothing is shallower than level 1 except the root
        assert_eq!(doc.insertion_anchor(h3, 1), root);
    }

    #[test]
    fn test_preorder_iteration() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.append_child(root, Node::heading("# A\n"));
        doc.append_child(a, Node::heading("## A1\n"));
        doc.append_child(root, Node::heading("# B\n"));

        let values: Vec<&str> = doc.iter().map(|(_, n)| n.value.as_str()).collect();
        assert_eq!(values, ["", "# A\n", "## A1\n", "# B\n"]);
    }
}
