// ABOUTME: Pre-order depth-first walks over the document arena.
// ABOUTME: collect/find_first take a match predicate; text_fragments gathers text leaves.

use crate::node::Node;

/// Borrowed handle to a node in a document arena.
pub type NodeRef<'a> = ego_tree::NodeRef<'a, Node>;

/// Collects every node under `root` (inclusive) for which `predicate` holds,
/// in pre-order. A match does not stop the walk from entering its subtree.
pub fn collect<'a, P>(root: NodeRef<'a>, mut predicate: P) -> Vec<NodeRef<'a>>
where
    P: FnMut(&Node) -> bool,
{
    let mut matches = Vec::new();
    collect_into(root, &mut predicate, &mut matches);
    matches
}

fn collect_into<'a, P>(node: NodeRef<'a>, predicate: &mut P, matches: &mut Vec<NodeRef<'a>>)
where
    P: FnMut(&Node) -> bool,
{
    if predicate(node.value()) {
        matches.push(node);
    }
    for child in node.children() {
        collect_into(child, predicate, matches);
    }
}

/// Returns the first node in pre-order for which `predicate` holds.
/// Nothing after the match is visited.
pub fn find_first<'a, P>(root: NodeRef<'a>, mut predicate: P) -> Option<NodeRef<'a>>
where
    P: FnMut(&Node) -> bool,
{
    find_in(root, &mut predicate)
}

fn find_in<'a, P>(node: NodeRef<'a>, predicate: &mut P) -> Option<NodeRef<'a>>
where
    P: FnMut(&Node) -> bool,
{
    if predicate(node.value()) {
        return Some(node);
    }
    node.children().find_map(|child| find_in(child, predicate))
}

/// Text node contents under `root`, in pre-order.
///
/// Text nodes are treated as leaves: anything hanging below one is skipped.
pub fn text_fragments(root: NodeRef<'_>) -> Vec<&str> {
    let mut fragments = Vec::new();
    gather_text(root, &mut fragments);
    fragments
}

fn gather_text<'a>(node: NodeRef<'a>, fragments: &mut Vec<&'a str>) {
    if let Node::Text(text) = node.value() {
        fragments.push(text.as_str());
        return;
    }
    for child in node.children() {
        gather_text(child, fragments);
    }
}
