// ABOUTME: NodeSummary, a JSON-friendly description of a matched node.
// ABOUTME: Carries tag, attributes and inner text; it is not an HTML serializer.

use serde::Serialize;

use crate::node::{Attribute, Node};
use crate::query::inner_text;
use crate::traverse::NodeRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    /// Tag name, or `#text` / `#comment` / `#doctype` / `#document`.
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub text: String,
    pub children: usize,
}

impl NodeSummary {
    pub fn from_node(node: NodeRef<'_>) -> Self {
        let tag = match node.value() {
            Node::Element(el) => el.name.clone(),
            Node::Text(_) => "#text".to_string(),
            Node::Comment(_) => "#comment".to_string(),
            Node::Doctype(_) => "#doctype".to_string(),
            Node::Document => "#document".to_string(),
        };
        Self {
            tag,
            attributes: node.value().attrs().to_vec(),
            text: inner_text(node),
            children: node.children().count(),
        }
    }

    /// Serialize as a JSON value.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl<'a> From<NodeRef<'a>> for NodeSummary {
    fn from(node: NodeRef<'a>) -> Self {
        NodeSummary::from_node(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;
    use ego_tree::tree;
    use serde_json::json;

    #[test]
    fn test_summary_json_shape() {
        let tree = tree!(Node::Element(Element::with_attrs("p", [("class", "para")])) => {
            Node::Text("Hello ".into()),
            Node::Element(Element::new("b")) => { Node::Text("world".into()) },
        });
        let summary = NodeSummary::from_node(tree.root());
        assert_eq!(
            summary.to_json().unwrap(),
            json!({
                "tag": "p",
                "attributes": [{"key": "class", "value": "para"}],
                "text": "Hello world",
                "children": 2
            })
        );
    }

    #[test]
    fn test_summary_of_text_node() {
        let tree = tree!(Node::Text("just text".into()));
        let summary = NodeSummary::from(tree.root());
        assert_eq!(summary.tag, "#text");
        assert!(summary.attributes.is_empty());
        assert_eq!(summary.text, "just text");
    }
}
