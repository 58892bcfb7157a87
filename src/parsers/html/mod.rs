//! HTML parsing and processing
//!
//! Split into focused submodules:
//!
//! - `dom`: parsing and basic DOM operations
//! - `metadata`: document metadata (base URL, provenance comment)
//! - `refs`: which attributes on which elements may hold cross-references
//! - `serializer`: serialization back to bytes

pub mod dom;
pub mod metadata;
pub mod refs;
pub mod serializer;

// Re-export the main public API
pub use dom::{find_nodes, get_node_attr, html_to_dom, set_node_attr};
pub use metadata::{create_metadata_tag, get_base_url};
pub use refs::reference_attributes;
pub use serializer::serialize_document;
