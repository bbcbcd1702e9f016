//! Document-model capability interface.
//!
//! The audit pipeline reads the document through [`DomNode`] only, so the
//! selector builder and snippet truncator carry no assumptions about the
//! host's document binding. [`TreeNode`] is the in-memory binding used by
//! the stub engine and tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

/// Shared handle to a document node.
pub type NodeRef = Arc<dyn DomNode>;

/// Read-only view of one node in the audited document.
pub trait DomNode: Send + Sync {
    /// Element nodes participate in selector chains; the document root and
    /// other node kinds do not.
    fn is_element(&self) -> bool;

    /// Stable identity within one document. Used to find an element's
    /// position among its siblings; never exposed to callers.
    fn node_key(&self) -> u64;

    /// Explicit id attribute, if any.
    fn id(&self) -> Option<String>;

    /// Tag name for element nodes.
    fn tag_name(&self) -> Option<String>;

    /// Parent node, element or not. `None` for detached nodes.
    fn parent(&self) -> Option<NodeRef>;

    /// Element-node children in document order.
    fn element_children(&self) -> Vec<NodeRef>;

    /// Full outer markup, when the node can serialize itself.
    fn outer_markup(&self) -> Option<String>;

    /// Full inner markup, when the node can serialize its contents.
    fn inner_markup(&self) -> Option<String>;
}

static NODE_COUNTER: AtomicU64 = AtomicU64::new(1);

enum NodeKind {
    Document,
    Element {
        tag: String,
        id: Option<String>,
        /// Elements that cannot serialize themselves (host-opaque widgets).
        opaque: bool,
    },
}

/// HTML tags that never take content or a closing tag.
const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.iter().any(|void| tag.eq_ignore_ascii_case(void))
}

/// In-memory [`DomNode`] implementation.
///
/// Nodes synthesize their markup from the tree, so inner markup always
/// appears verbatim inside outer markup. Text content is held directly on
/// the element and precedes child markup. Void elements (`img`, `br`, ...)
/// serialize without a closing tag, like real DOM output.
pub struct TreeNode {
    key: u64,
    kind: NodeKind,
    text: RwLock<String>,
    parent: RwLock<Weak<TreeNode>>,
    children: RwLock<Vec<Arc<TreeNode>>>,
}

impl TreeNode {
    fn new(kind: NodeKind) -> Arc<Self> {
        Arc::new(Self {
            key: NODE_COUNTER.fetch_add(1, Ordering::Relaxed),
            kind,
            text: RwLock::new(String::new()),
            parent: RwLock::new(Weak::new()),
            children: RwLock::new(Vec::new()),
        })
    }

    /// Document root node.
    pub fn document() -> Arc<Self> {
        Self::new(NodeKind::Document)
    }

    /// Element node without an id attribute.
    pub fn element(tag: impl Into<String>) -> Arc<Self> {
        Self::new(NodeKind::Element {
            tag: tag.into(),
            id: None,
            opaque: false,
        })
    }

    /// Element node with an explicit id attribute.
    pub fn element_with_id(tag: impl Into<String>, id: impl Into<String>) -> Arc<Self> {
        Self::new(NodeKind::Element {
            tag: tag.into(),
            id: Some(id.into()),
            opaque: false,
        })
    }

    /// Element node that exposes no serializable markup.
    pub fn opaque(tag: impl Into<String>) -> Arc<Self> {
        Self::new(NodeKind::Element {
            tag: tag.into(),
            id: None,
            opaque: true,
        })
    }

    /// Set the element's direct text content.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.write() = text.into();
    }

    /// Attach `child` as the last child of this node.
    pub fn append_child(self: &Arc<Self>, child: Arc<TreeNode>) {
        *child.parent.write() = Arc::downgrade(self);
        self.children.write().push(child);
    }

    fn synthesized_inner(&self) -> String {
        let mut markup = self.text.read().clone();
        for child in self.children.read().iter() {
            if let Some(outer) = child.synthesized_outer() {
                markup.push_str(&outer);
            }
        }
        markup
    }

    fn synthesized_outer(&self) -> Option<String> {
        let NodeKind::Element { tag, id, opaque } = &self.kind else {
            return None;
        };
        if *opaque {
            return None;
        }
        let mut open = format!("<{tag}");
        if let Some(id) = id {
            open.push_str(&format!(" id=\"{id}\""));
        }
        open.push('>');
        if is_void_tag(tag) {
            return Some(open);
        }
        Some(format!("{open}{}</{tag}>", self.synthesized_inner()))
    }
}

impl DomNode for TreeNode {
    fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }

    fn node_key(&self) -> u64 {
        self.key
    }

    fn id(&self) -> Option<String> {
        match &self.kind {
            NodeKind::Element { id, .. } => id.clone(),
            NodeKind::Document => None,
        }
    }

    fn tag_name(&self) -> Option<String> {
        match &self.kind {
            NodeKind::Element { tag, .. } => Some(tag.clone()),
            NodeKind::Document => None,
        }
    }

    fn parent(&self) -> Option<NodeRef> {
        self.parent.read().upgrade().map(|node| node as NodeRef)
    }

    fn element_children(&self) -> Vec<NodeRef> {
        self.children
            .read()
            .iter()
            .filter(|child| child.is_element())
            .map(|child| Arc::clone(child) as NodeRef)
            .collect()
    }

    fn outer_markup(&self) -> Option<String> {
        self.synthesized_outer()
    }

    fn inner_markup(&self) -> Option<String> {
        match &self.kind {
            NodeKind::Element { opaque: false, .. } => Some(self.synthesized_inner()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_links_parents_and_children() {
        let document = TreeNode::document();
        let html = TreeNode::element("html");
        let body = TreeNode::element("body");
        document.append_child(Arc::clone(&html));
        html.append_child(Arc::clone(&body));

        assert!(!document.is_element());
        assert!(body.is_element());
        assert_eq!(
            body.parent().unwrap().node_key(),
            html.node_key()
        );
        assert_eq!(html.element_children().len(), 1);
    }

    #[test]
    fn markup_is_synthesized_from_tree() {
        let div = TreeNode::element_with_id("div", "x");
        div.set_text("hello");
        let span = TreeNode::element("span");
        span.set_text("world");
        div.append_child(span);

        assert_eq!(
            div.outer_markup().unwrap(),
            "<div id=\"x\">hello<span>world</span></div>"
        );
        assert_eq!(div.inner_markup().unwrap(), "hello<span>world</span>");
    }

    #[test]
    fn void_elements_serialize_without_closing_tag() {
        let img = TreeNode::element_with_id("img", "hero");
        assert_eq!(img.outer_markup().unwrap(), "<img id=\"hero\">");
        assert_eq!(img.inner_markup().unwrap(), "");

        let br = TreeNode::element("BR");
        assert_eq!(br.outer_markup().unwrap(), "<BR>");
    }

    #[test]
    fn opaque_elements_expose_no_markup() {
        let widget = TreeNode::opaque("object");
        assert!(widget.is_element());
        assert!(widget.outer_markup().is_none());
        assert!(widget.inner_markup().is_none());
    }

    #[test]
    fn document_exposes_no_markup() {
        let document = TreeNode::document();
        assert!(document.outer_markup().is_none());
        assert!(document.inner_markup().is_none());
        assert!(document.tag_name().is_none());
    }
}
