//! Document parsing

use tracing::debug;

use super::line::{split_lines, Line};
use super::{Document, Node};

/// Parse document text into a tree, preserving every line verbatim.
///
/// Top-level headings always attach directly under the root. Deeper headings
/// attach under the nearest ancestor of the current node whose level is
/// strictly smaller; the sentinel root bounds that walk. Non-heading lines,
/// blank lines included, land in the contents of the current node; free
/// text before any heading lands in the root's own contents.
pub fn parse(text: &str) -> Document {
    let mut doc = Document::new();
    let mut current = doc.root();

    for raw in split_lines(text) {
        match Line::classify(raw) {
            Line::Heading { raw, level } => {
                let node = Node::heading(raw);
                current = if level == 1 {
                    doc.append_child(doc.root(), node)
                } else {
                    let anchor = doc.insertion_anchor(current, level);
                    doc.append_child(anchor, node)
                };
            }
            Line::Text(raw) => doc.append_content(current, raw),
        }
    }

    debug!(bytes = text.len(), "parsed changelog document");
    doc
}
