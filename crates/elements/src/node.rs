// ABOUTME: Node values stored in the document arena: elements, text and the rest.
// ABOUTME: Attributes are kept as an ordered, non-deduplicated list of key/value pairs.

use serde::Serialize;

/// A single `key="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Attribute {
    fn from((key, value): (K, V)) -> Self {
        Attribute::new(key, value)
    }
}

/// An element: tag name plus attributes in the order they were declared.
///
/// Keys compare case-sensitively and may repeat; nothing here merges them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attrs<I, A>(name: impl Into<String>, attrs: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        Self {
            name: name.into(),
            attrs: attrs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Coarse node classification used by the traversal predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Other,
}

/// A vertex of the document tree.
///
/// Children and siblings are not stored here; the `ego_tree` arena owning
/// the node links them by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Document,
    Element(Element),
    Text(String),
    Comment(String),
    Doctype(String),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) => NodeKind::Text,
            Node::Document | Node::Comment(_) | Node::Doctype(_) => NodeKind::Other,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Tag name for elements, `None` for every other kind.
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|el| el.name.as_str())
    }

    /// Attribute list; empty for nodes that cannot carry attributes.
    pub fn attrs(&self) -> &[Attribute] {
        match self {
            Node::Element(el) => &el.attrs,
            _ => &[],
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Node::Element(Element::new("p")).kind(), NodeKind::Element);
        assert_eq!(Node::Text("hi".into()).kind(), NodeKind::Text);
        assert_eq!(Node::Comment("c".into()).kind(), NodeKind::Other);
        assert_eq!(Node::Doctype("html".into()).kind(), NodeKind::Other);
        assert_eq!(Node::Document.kind(), NodeKind::Other);
    }

    #[test]
    fn test_text_node_has_no_attrs() {
        let node = Node::Text("plain".into());
        assert!(node.attrs().is_empty());
        assert_eq!(node.tag_name(), None);
        assert_eq!(node.as_text(), Some("plain"));
    }

    #[test]
    fn test_with_attrs_keeps_order_and_duplicates() {
        let el = Element::with_attrs("div", [("b", "2"), ("a", "1"), ("b", "3")]);
        let keys: Vec<&str> = el.attrs.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "b"]);
    }
}
