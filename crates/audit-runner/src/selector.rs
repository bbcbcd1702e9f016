//! Deterministic CSS-style element locators.

use std::sync::Arc;

use a11ycheck_core_types::{DomNode, NodeRef};

/// Build a CSS path locating `element` within its document.
///
/// Segments run ancestor-to-descendant joined by `" > "`, collected
/// bottom-up with an explicit loop. An id segment short-circuits the climb:
/// `#id` is assumed unique and sufficient on its own, so ancestors of an
/// id-bearing element never appear. For a fixed tree the result is
/// identical across repeated calls.
pub fn css_selector(element: &NodeRef) -> String {
    let mut segments = Vec::new();
    let mut current = Some(Arc::clone(element));
    while let Some(node) = current {
        if !node.is_element() {
            break;
        }
        let has_id = element_id(node.as_ref()).is_some();
        segments.push(identifier(node.as_ref()));
        if has_id {
            break;
        }
        current = node.parent();
    }
    segments.reverse();
    segments.join(" > ")
}

fn element_id(node: &dyn DomNode) -> Option<String> {
    node.id().filter(|id| !id.is_empty())
}

/// Single-segment identifier for one element.
///
/// `#id` when present; otherwise the lowercased tag name, suffixed with
/// `:nth-child(N)` when more than one element sibling shares the tag. N is
/// the 1-based position among *all* element siblings, not just same-tag
/// ones.
fn identifier(node: &dyn DomNode) -> String {
    if let Some(id) = element_id(node) {
        return format!("#{id}");
    }
    let mut segment = node.tag_name().unwrap_or_default().to_lowercase();
    let Some(parent) = node.parent() else {
        return segment;
    };
    let siblings = parent.element_children();
    let same_tag = siblings
        .iter()
        .filter(|sibling| sibling.tag_name() == node.tag_name())
        .count();
    if same_tag > 1 {
        if let Some(position) = siblings
            .iter()
            .position(|sibling| sibling.node_key() == node.node_key())
        {
            segment.push_str(&format!(":nth-child({})", position + 1));
        }
    }
    segment
}
