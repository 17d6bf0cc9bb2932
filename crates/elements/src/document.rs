// ABOUTME: Document, the ego_tree arena of Nodes that every query runs against.
// ABOUTME: Built from scraper's parse output or by hand through the append_* builder methods.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use ego_tree::{NodeId, NodeMut, Tree};
use scraper::Html;
use tracing::debug;

use crate::decode::decode_html;
use crate::error::{ElementsError, Result};
use crate::mutate;
use crate::node::{Attribute, Element, Node};
use crate::options::{ParseMode, ParseOptions};
use crate::query::{self, Query};
use crate::traverse::NodeRef;

static NEXT_DOCUMENT: AtomicU64 = AtomicU64::new(0);

fn next_token() -> u64 {
    NEXT_DOCUMENT.fetch_add(1, Ordering::Relaxed)
}

/// A node id tagged with the document that issued it.
///
/// Bare `NodeId`s are arena indices and resolve in any tree large enough;
/// the tag lets `Document` refuse ids it did not hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocNodeId {
    doc: u64,
    id: NodeId,
}

impl DocNodeId {
    /// The underlying arena id.
    pub fn node_id(&self) -> NodeId {
        self.id
    }
}

/// A parsed HTML tree.
///
/// The arena owns every node; parent and sibling links are ids, so there is
/// no shared ownership to untangle when the document is dropped.
#[derive(Debug)]
pub struct Document {
    token: u64,
    tree: Tree<Node>,
}

// A clone is a separate document: ids issued by the original do not resolve in it.
impl Clone for Document {
    fn clone(&self) -> Self {
        Self {
            token: next_token(),
            tree: self.tree.clone(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document holding only the root node.
    pub fn new() -> Self {
        Self {
            token: next_token(),
            tree: Tree::new(Node::Document),
        }
    }

    /// Parse a full HTML document with default options.
    pub fn parse(html: &str) -> Self {
        Self::parse_with(html, &ParseOptions::default())
    }

    /// Parse a body fragment with default options otherwise.
    pub fn parse_fragment(html: &str) -> Self {
        Self::parse_with(html, &ParseOptions::builder().fragment().build())
    }

    pub fn parse_with(html: &str, opts: &ParseOptions) -> Self {
        let parsed = match opts.mode {
            ParseMode::Document => Html::parse_document(html),
            ParseMode::Fragment => Html::parse_fragment(html),
        };
        let doc = Self::from_html(&parsed, opts);
        debug!(
            mode = %opts.mode,
            nodes = doc.len(),
            parse_errors = parsed.errors.len(),
            "parsed html"
        );
        doc
    }

    /// Copy an already-parsed scraper tree.
    ///
    /// In fragment mode the `<html>` wrapper html5ever adds around fragments
    /// is skipped, so the fragment's own nodes sit directly under the root.
    pub fn from_html(html: &Html, opts: &ParseOptions) -> Self {
        let mut doc = Self::new();
        let source = match opts.mode {
            ParseMode::Document => html.tree.root(),
            ParseMode::Fragment => *html.root_element(),
        };
        copy_children(source, &mut doc.tree.root_mut(), opts);
        doc
    }

    /// Decode bytes (see [`decode_html`]) and parse them.
    pub fn from_bytes(bytes: &[u8], charset: Option<&str>, opts: &ParseOptions) -> Self {
        let html = decode_html(bytes, charset);
        Self::parse_with(&html, opts)
    }

    /// Read and parse an HTML file, detecting its encoding.
    pub fn from_path(path: impl AsRef<Path>, opts: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| ElementsError::read(path, e))?;
        Ok(Self::from_bytes(&bytes, None, opts))
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.tree.root()
    }

    pub fn root_id(&self) -> DocNodeId {
        self.tag(self.tree.root().id())
    }

    /// Id for a node borrowed from this document.
    ///
    /// Fails with `UnknownNode` when `node` belongs to another tree.
    pub fn handle(&self, node: NodeRef<'_>) -> Result<DocNodeId> {
        let id = node.id();
        if self.tree.get(id) == Some(node) {
            Ok(self.tag(id))
        } else {
            Err(ElementsError::UnknownNode)
        }
    }

    pub fn get(&self, id: DocNodeId) -> Option<NodeRef<'_>> {
        if id.doc != self.token {
            return None;
        }
        self.tree.get(id.id)
    }

    pub fn get_mut(&mut self, id: DocNodeId) -> Option<NodeMut<'_, Node>> {
        if id.doc != self.token {
            return None;
        }
        self.tree.get_mut(id.id)
    }

    fn tag(&self, id: NodeId) -> DocNodeId {
        DocNodeId {
            doc: self.token,
            id,
        }
    }

    /// Number of nodes reachable from the root, root included.
    pub fn len(&self) -> usize {
        self.root().descendants().count()
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        !self.root().has_children()
    }

    /// Append `node` as the last child of `parent`.
    pub fn append(&mut self, parent: DocNodeId, node: Node) -> Result<DocNodeId> {
        let mut parent = self.get_mut(parent).ok_or(ElementsError::UnknownNode)?;
        let id = parent.append(node).id();
        Ok(self.tag(id))
    }

    pub fn append_element<I, A>(
        &mut self,
        parent: DocNodeId,
        name: &str,
        attrs: I,
    ) -> Result<DocNodeId>
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        self.append(parent, Node::Element(Element::with_attrs(name, attrs)))
    }

    pub fn append_text(&mut self, parent: DocNodeId, text: &str) -> Result<DocNodeId> {
        self.append(parent, Node::Text(text.to_string()))
    }

    pub fn append_comment(&mut self, parent: DocNodeId, text: &str) -> Result<DocNodeId> {
        self.append(parent, Node::Comment(text.to_string()))
    }

    /// Run a simple query from the document root.
    pub fn select(&self, query: &Query) -> Vec<NodeRef<'_>> {
        query.select(self.root())
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeRef<'_>> {
        query::get_element_by_id(self.root(), id)
    }

    pub fn get_elements_by_class_name(&self, class_name: &str) -> Vec<NodeRef<'_>> {
        query::get_elements_by_class_name(self.root(), class_name)
    }

    pub fn get_elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeRef<'_>> {
        query::get_elements_by_tag_name(self.root(), tag_name)
    }

    /// Text of the whole document.
    pub fn inner_text(&self) -> String {
        query::inner_text(self.root())
    }

    pub fn get_attribute(&self, id: DocNodeId, name: &str) -> Result<&str> {
        let node = self.get(id).ok_or(ElementsError::UnknownNode)?;
        Ok(query::get_attribute(node.value(), name))
    }

    pub fn add_attribute(&mut self, id: DocNodeId, name: &str, value: &str) -> Result<()> {
        let mut node = self.get_mut(id).ok_or(ElementsError::UnknownNode)?;
        mutate::add_attribute(node.value(), name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: DocNodeId, name: &str) -> Result<()> {
        let mut node = self.get_mut(id).ok_or(ElementsError::UnknownNode)?;
        mutate::remove_attribute(node.value(), name);
        Ok(())
    }
}

fn copy_children(
    source: ego_tree::NodeRef<'_, scraper::Node>,
    target: &mut NodeMut<'_, Node>,
    opts: &ParseOptions,
) {
    for child in source.children() {
        if let Some(value) = convert(child.value(), opts) {
            let mut copied = target.append(value);
            copy_children(child, &mut copied, opts);
        }
    }
}

fn convert(node: &scraper::Node, opts: &ParseOptions) -> Option<Node> {
    match node {
        scraper::Node::Element(el) => Some(Node::Element(Element {
            name: el.name().to_string(),
            attrs: el.attrs().map(|(k, v)| Attribute::new(k, v)).collect(),
        })),
        scraper::Node::Text(text) => {
            let text: &str = text;
            if opts.drop_whitespace_text && text.trim().is_empty() {
                None
            } else {
                Some(Node::Text(text.to_string()))
            }
        }
        scraper::Node::Comment(comment) if opts.keep_comments => {
            let comment: &str = comment;
            Some(Node::Comment(comment.to_string()))
        }
        scraper::Node::Doctype(doctype) => Some(Node::Doctype(doctype.name().to_string())),
        _ => None,
    }
}
