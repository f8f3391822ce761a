//! Locate-or-create merging of changes into the document tree

use tracing::debug;

use crate::document::{find_section, Document, Node};

/// Name of the top-level section all changes live under
pub const CHANGELOG_SECTION: &str = "Changelog";

/// Merge one classified change into the tree.
///
/// Locates or creates the chain changelog (level 1) → release (level 2) →
/// category (level 3) and appends the entry line to the category's
/// contents. A created changelog section is appended after existing
/// top-level sections; created release and category sections are prepended,
/// so the newest release and the newest category surface first. Entries
/// within a category stay in arrival order and are never deduplicated.
pub fn add_change(doc: &mut Document, category: &str, message: &str, release: &str) {
    let entry = format!("- {message}\n");

    let root = doc.root();
    let changelog = find_section(doc, root, CHANGELOG_SECTION, 1)
        .unwrap_or_else(|| doc.append_child(root, Node::heading("# [Changelog]\n")));

    let release_node = find_section(doc, changelog, release, 2).unwrap_or_else(|| {
        doc.prepend_child(changelog, Node::heading(format!("## [{release}]\n")))
    });

    let category_node = find_section(doc, release_node, category, 3).unwrap_or_else(|| {
        doc.prepend_child(release_node, Node::heading(format!("### [{category}]\n")))
    });

    doc.append_content(category_node, entry);
    debug!(category = %category, release = %release, "merged change entry");
}
