// ABOUTME: Browser-style lookups: getAttribute, getElementsByClassName/TagName, getElementById, innerText.
// ABOUTME: Also defines Query, the `#id` / `.class` / `tag` shorthand used by Document::select and the CLI.

use std::fmt;
use std::str::FromStr;

use crate::error::ElementsError;
use crate::node::Node;
use crate::traverse::{self, NodeRef};

const ID_ATTR: &str = "id";
const CLASS_ATTR: &str = "class";

/// Value of the first attribute named `name`, or `""` when there is none.
///
/// An attribute explicitly set to `""` looks the same as a missing one;
/// use [`attribute`] to tell them apart.
pub fn get_attribute<'a>(node: &'a Node, name: &str) -> &'a str {
    attribute(node, name).unwrap_or("")
}

/// Value of the first attribute named `name`, if present.
pub fn attribute<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    node.attrs()
        .iter()
        .find(|a| a.key == name)
        .map(|a| a.value.as_str())
}

/// True if the node's `class` attribute, split on single spaces, contains
/// `class_name` as an exact token.
pub fn has_class(node: &Node, class_name: &str) -> bool {
    get_attribute(node, CLASS_ATTR)
        .split(' ')
        .any(|token| token == class_name)
}

/// All elements under `root` (inclusive) carrying the class token, in pre-order.
pub fn get_elements_by_class_name<'a>(root: NodeRef<'a>, class_name: &str) -> Vec<NodeRef<'a>> {
    traverse::collect(root, |n| n.is_element() && has_class(n, class_name))
}

/// All elements under `root` (inclusive) whose tag equals `tag_name`, in pre-order.
/// Comparison is exact and case-sensitive.
pub fn get_elements_by_tag_name<'a>(root: NodeRef<'a>, tag_name: &str) -> Vec<NodeRef<'a>> {
    traverse::collect(root, |n| n.tag_name() == Some(tag_name))
}

/// First element in pre-order whose `id` attribute equals `id`.
pub fn get_element_by_id<'a>(root: NodeRef<'a>, id: &str) -> Option<NodeRef<'a>> {
    traverse::find_first(root, |n| n.is_element() && get_attribute(n, ID_ATTR) == id)
}

/// Concatenation of every text node under `node`, with no separator.
pub fn inner_text(node: NodeRef<'_>) -> String {
    traverse::text_fragments(node).concat()
}

/// A single simple selector: `#id`, `.class` or a bare tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Id(String),
    Class(String),
    Tag(String),
}

impl Query {
    /// Run the query from `root`. `Id` yields at most one node.
    pub fn select<'a>(&self, root: NodeRef<'a>) -> Vec<NodeRef<'a>> {
        match self {
            Query::Id(id) => get_element_by_id(root, id).into_iter().collect(),
            Query::Class(class) => get_elements_by_class_name(root, class),
            Query::Tag(tag) => get_elements_by_tag_name(root, tag),
        }
    }
}

impl FromStr for Query {
    type Err = ElementsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ElementsError::invalid_query("empty query"));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(ElementsError::invalid_query(format!(
                "{:?}: only a single #id, .class or tag is supported",
                s
            )));
        }

        let (ctor, name): (fn(String) -> Query, &str) = match s.as_bytes()[0] {
            b'#' => (Query::Id, &s[1..]),
            b'.' => (Query::Class, &s[1..]),
            _ => (Query::Tag, s),
        };
        if name.is_empty() {
            return Err(ElementsError::invalid_query(format!("{:?}: missing name", s)));
        }
        if name.contains(['#', '.']) {
            return Err(ElementsError::invalid_query(format!(
                "{:?}: compound selectors are not supported",
                s
            )));
        }
        Ok(ctor(name.to_string()))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Id(id) => write!(f, "#{}", id),
            Query::Class(class) => write!(f, ".{}", class),
            Query::Tag(tag) => write!(f, "{}", tag),
        }
    }
}
