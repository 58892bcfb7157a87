//! # MIME module
//!
//! This module contains everything related to reading the MHTML container:
//!
//! - Parsing the multipart message into a flat, document-ordered part list
//! - Derived per-part views (effective media type, extension, digest)
//! - Cross-reference lookup tables and entry-point selection
//!
//! # Module organization
//!
//! - `archive` - the parsed container and its parts
//! - `descriptor` - derived part views and extension resolution
//! - `index` - content-location / content-ID lookup tables

pub mod archive;
pub mod descriptor;
pub mod index;

// Re-export commonly used items for convenience
pub use archive::{MhtmlArchive, Part};
pub use descriptor::{ExtensionCache, PartDescriptor};
pub use index::ReferenceIndex;
