//! # Utility module
//!
//! URL handling helpers shared across the crate:
//!
//! - Best-effort URL joining with the tolerance reference resolution needs
//! - Data URL creation
//!
//! # Module organization
//!
//! - `url` - URL joining and data URL helpers

pub mod url;

// Re-export commonly used items for convenience
pub use self::url::{create_data_url, join_url, Url};
