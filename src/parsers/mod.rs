//! # Parser module
//!
//! Markup parsing and serialization for the conversion pipeline:
//!
//! - HTML document parsing into a mutable DOM
//! - DOM attribute access and rewriting
//! - Serialization of the rewritten tree
//!
//! # Module organization
//!
//! - `html` - HTML parsing, DOM operations, metadata, reference attributes

pub mod html;

// Re-export commonly used items for convenience
pub use html::{
    create_metadata_tag, find_nodes, get_base_url, get_node_attr, html_to_dom,
    reference_attributes, serialize_document, set_node_attr,
};
