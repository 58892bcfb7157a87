use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::core::UnmhtError;
use crate::mime::Part;
use crate::renderer::{CycleGuard, Renderer, MAX_RENDER_DEPTH};
use crate::storage::AssetStore;

/// Represents rendered parts as content-addressed files in a directory
///
/// Files are named `blob=<digest><extension>`, so identical content shares
/// one file, within and across conversions into the same directory.
pub struct BlobDirectoryStore {
    directory: PathBuf,
}

impl BlobDirectoryStore {
    pub fn new(directory: impl Into<PathBuf>) -> BlobDirectoryStore {
        BlobDirectoryStore {
            directory: directory.into(),
        }
    }
}

impl AssetStore for BlobDirectoryStore {
    fn store_part(
        &self,
        renderer: &Renderer,
        part: &Part,
        guard: &CycleGuard,
    ) -> Result<Option<String>, UnmhtError> {
        let descriptor = renderer.describe(part);
        let file_name = format!("blob={}{}", descriptor.digest, descriptor.extension);

        if guard.contains(&descriptor.digest) {
            // Already rendered (or being rendered) somewhere up the path;
            // the name is deterministic, so just reuse it
            return Ok(Some(file_name));
        }
        if guard.depth() >= MAX_RENDER_DEPTH {
            return Ok(None);
        }

        let path = self.directory.join(&file_name);
        if !path.exists() {
            let (data, _media_type) = renderer.render(part, &guard.with(&descriptor.digest))?;

            // Write to a temporary sibling first so a half-written blob is
            // never observable under the final name
            let mut temp_file = NamedTempFile::new_in(&self.directory)
                .map_err(|e| UnmhtError::new(&format!("unable to create blob file: {e}")))?;
            temp_file
                .write_all(&data)
                .map_err(|e| UnmhtError::new(&format!("unable to write blob file: {e}")))?;
            temp_file
                .persist(&path)
                .map_err(|e| UnmhtError::new(&format!("unable to persist blob file: {e}")))?;
        }

        Ok(Some(file_name))
    }
}
