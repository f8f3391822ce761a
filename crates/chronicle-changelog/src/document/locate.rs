//! Section lookup

use generational_arena::Index;
use regex::Regex;
use tracing::trace;

use super::Document;

/// Find a named section among the *direct* children of `parent`.
///
/// A child matches when its heading line has exactly `level` leading
/// markers, a space, then the name (case-insensitive, with optional
/// surrounding bracket decoration) and arbitrary trailing text. Returns the
/// first match in child order. Used to reuse existing sections instead of
/// creating duplicates.
pub fn find_section(doc: &Document, parent: Index, name: &str, level: usize) -> Option<Index> {
    let pattern = format!(
        r"(?i)^{} \[?{}\]?",
        "#".repeat(level),
        regex::escape(name)
    );
    let re = Regex::new(&pattern).expect("escaped section pattern is valid");

    let found = doc
        .get(parent)?
        .children
        .iter()
        .copied()
        .find(|&child| doc.get(child).is_some_and(|node| re.is_match(&node.value)));

    trace!(name, level, found = found.is_some(), "section lookup");
    found
}
