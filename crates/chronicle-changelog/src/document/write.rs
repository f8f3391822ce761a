//! Document serialization

use std::io;

use generational_arena::Index;

use super::Document;

/// Render the document back to text.
///
/// Depth-first preorder: heading line (skipped for the sentinel root), then
/// contents, then children in stored order. An unmodified parsed tree
/// renders byte-identical to its input.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    render_node(doc, doc.root(), &mut out);
    out
}

fn render_node(doc: &Document, idx: Index, out: &mut String) {
    if let Some(node) = doc.get(idx) {
        if idx != doc.root() {
            out.push_str(&node.value);
        }
        for line in &node.contents {
            out.push_str(line);
        }
        for &child in &node.children {
            render_node(doc, child, out);
        }
    }
}

/// Serialize the document to a writer.
///
/// Callers replacing a file on disk truncate and rewrite the whole document;
/// the tree is never patched in place.
pub fn write_to<W: io::Write>(doc: &Document, writer: &mut W) -> io::Result<()> {
    writer.write_all(render(doc).as_bytes())
}
