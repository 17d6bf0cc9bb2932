// ABOUTME: Library entry point for htmlelements, browser-style queries over parsed HTML trees.
// ABOUTME: Re-exports Document, the query/mutation functions, Query, ParseOptions and ElementsError.

//! htmlelements - `getElementById` and friends for Rust.
//!
//! HTML is parsed by `scraper` (html5ever) and copied into an arena-backed
//! [`Document`]. The functions in [`query`] and [`mutate`] mirror the DOM
//! calls browser scripts use: attribute lookup, class/tag/id search, text
//! extraction, and attribute add/remove.
//!
//! # Example
//!
//! ```
//! use htmlelements::{get_attribute, get_element_by_id, get_elements_by_tag_name, Document};
//!
//! let doc = Document::parse(r#"<div id="content"><p lang="en">one</p><p>two</p></div>"#);
//! let content = get_element_by_id(doc.root(), "content").expect("content div");
//! let paras = get_elements_by_tag_name(content, "p");
//! assert_eq!(paras.len(), 2);
//! assert_eq!(get_attribute(paras[0].value(), "lang"), "en");
//! ```

pub mod decode;
pub mod document;
pub mod error;
pub mod mutate;
pub mod node;
pub mod options;
pub mod query;
pub mod summary;
pub mod traverse;

pub use ego_tree::NodeId;

pub use crate::decode::decode_html;
pub use crate::document::{DocNodeId, Document};
pub use crate::error::{ElementsError, Result};
pub use crate::mutate::{add_attribute, remove_attribute};
pub use crate::node::{Attribute, Element, Node, NodeKind};
pub use crate::options::{ParseMode, ParseOptions, ParseOptionsBuilder};
pub use crate::query::{
    attribute, get_attribute, get_element_by_id, get_elements_by_class_name,
    get_elements_by_tag_name, has_class, inner_text, Query,
};
pub use crate::summary::NodeSummary;
pub use crate::traverse::NodeRef;
