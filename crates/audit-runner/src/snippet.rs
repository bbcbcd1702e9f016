//! Bounded display snippets of offending elements.

use a11ycheck_core_types::NodeRef;

/// Inner markup longer than this is shortened before substitution.
const INNER_LIMIT: usize = 31;

/// Hard cap on the final snippet, before the ellipsis.
const OUTER_LIMIT: usize = 250;

const ELLIPSIS: &str = "...";

/// Truncated outer markup of `element`, or `None` when the element exposes
/// no serializable markup.
///
/// Inner markup beyond 31 characters is replaced inside the outer markup by
/// its first 31 characters plus an ellipsis; the substitution targets the
/// first occurrence only (for a well-formed element the inner markup appears
/// exactly once). The result is then hard-capped at 250 characters plus an
/// ellipsis. Limits count characters, never bytes, so multibyte content is
/// never split mid code point.
pub fn context_snippet(element: &NodeRef) -> Option<String> {
    let mut outer = element.outer_markup().filter(|markup| !markup.is_empty())?;
    if let Some(inner) = element.inner_markup() {
        if inner.chars().count() > INNER_LIMIT {
            let shortened: String = inner.chars().take(INNER_LIMIT).collect();
            outer = outer.replacen(&inner, &format!("{shortened}{ELLIPSIS}"), 1);
        }
    }
    if outer.chars().count() > OUTER_LIMIT {
        outer = outer.chars().take(OUTER_LIMIT).collect();
        outer.push_str(ELLIPSIS);
    }
    Some(outer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11ycheck_core_types::TreeNode;

    fn div_with_text(text: &str) -> NodeRef {
        let div = TreeNode::element("div");
        div.set_text(text);
        div
    }

    #[test]
    fn short_inner_markup_passes_through() {
        let node = div_with_text("short text");
        assert_eq!(context_snippet(&node).unwrap(), "<div>short text</div>");
    }

    #[test]
    fn long_inner_markup_is_shortened() {
        let node = div_with_text("abcdefghijklmnopqrstuvwxyz0123456789");
        assert_eq!(
            context_snippet(&node).unwrap(),
            "<div>abcdefghijklmnopqrstuvwxyz01234...</div>"
        );
    }

    #[test]
    fn inner_markup_of_exactly_31_chars_is_kept() {
        let text = "a".repeat(31);
        let node = div_with_text(&text);
        assert_eq!(context_snippet(&node).unwrap(), format!("<div>{text}</div>"));
    }

    #[test]
    fn outer_markup_is_hard_capped() {
        // Inner shortening cannot help when the open tag itself is huge.
        let long_id = "a".repeat(300);
        let div = TreeNode::element_with_id("div", long_id.as_str());
        div.set_text("content");
        let node: NodeRef = div;

        let snippet = context_snippet(&node).unwrap();
        assert_eq!(snippet.chars().count(), 250 + 3);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn snippet_never_exceeds_cap_plus_ellipsis() {
        let long_id = "b".repeat(1000);
        let div = TreeNode::element_with_id("div", long_id.as_str());
        div.set_text(&"y".repeat(1000));
        let node: NodeRef = div;
        let snippet = context_snippet(&node).unwrap();
        assert!(snippet.chars().count() <= 253);
    }

    #[test]
    fn multibyte_content_is_not_split_mid_char() {
        let node = div_with_text(&"é".repeat(40));
        let snippet = context_snippet(&node).unwrap();
        assert!(snippet.starts_with(&format!("<div>{}...", "é".repeat(31))));
    }

    #[test]
    fn opaque_element_has_no_snippet() {
        let node: NodeRef = TreeNode::opaque("object");
        assert!(context_snippet(&node).is_none());
    }
}
