//! # Storage module
//!
//! Interchangeable strategies for representing rendered resource parts:
//!
//! - `inline` - embed the rendered bytes directly as a data URL
//! - `directory` - write the rendered bytes to a content-addressed file
//!   and hand back its relative path

pub mod directory;
pub mod inline;

use crate::core::UnmhtError;
use crate::mime::Part;
use crate::renderer::{CycleGuard, Renderer};

// Re-export commonly used items for convenience
pub use directory::BlobDirectoryStore;
pub use inline::InlineStore;

/// Strategy for turning a referenced part into a substitute URI
///
/// Implementations render the part through the renderer and decide how its
/// bytes are represented. `Ok(None)` means the reference must stay as it is
/// (the part is already being rendered further up the recursion, or the
/// depth limit was hit); errors abort the whole conversion.
///
/// Implementations must add the part's digest to the guard before recursing
/// into it, so that even a part referencing itself cannot loop.
pub trait AssetStore {
    fn store_part(
        &self,
        renderer: &Renderer,
        part: &Part,
        guard: &CycleGuard,
    ) -> Result<Option<String>, UnmhtError>;
}
