// ABOUTME: In-place attribute edits: removeAttribute and a space-joining addAttribute.
// ABOUTME: Only the attribute list is touched; the tree shape never changes.

use tracing::debug;

use crate::node::{Attribute, Node};

/// Remove every attribute named `name`. Remaining attributes keep their order.
///
/// No-op for absent keys and for nodes that are not elements.
pub fn remove_attribute(node: &mut Node, name: &str) {
    let Some(el) = node.as_element_mut() else {
        return;
    };
    let before = el.attrs.len();
    el.attrs.retain(|a| a.key != name);
    let removed = before - el.attrs.len();
    if removed > 0 {
        debug!(tag = %el.name, attr = name, removed, "removed attribute");
    }
}

/// Add `name=value`, or append `" " + value` to the first existing `name`.
///
/// Duplicate keys already present are left alone. No-op for non-elements.
pub fn add_attribute(node: &mut Node, name: &str, value: &str) {
    let Some(el) = node.as_element_mut() else {
        debug!(attr = name, "ignoring add_attribute on non-element node");
        return;
    };
    if let Some(existing) = el.attrs.iter_mut().find(|a| a.key == name) {
        existing.value.push(' ');
        existing.value.push_str(value);
        return;
    }
    el.attrs.push(Attribute::new(name, value));
}
