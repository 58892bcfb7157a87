use std::collections::HashMap;

use crate::mime::archive::MhtmlArchive;
use crate::utils::url::join_url;

/// Lookup tables from cross-reference identifiers to part positions
///
/// Built once per conversion in a single pass over the archive, read-only
/// afterwards. When several parts claim the same location or content-ID,
/// the later one wins.
pub struct ReferenceIndex {
    by_location: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
    /// Content-ID tokens named by "start" parameters, in document order
    entry_candidates: Vec<String>,
}

impl ReferenceIndex {
    /// Indexes every part of the archive, containers included
    pub fn build(archive: &MhtmlArchive) -> ReferenceIndex {
        let mut by_location: HashMap<String, usize> = HashMap::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();
        let mut entry_candidates: Vec<String> = Vec::new();

        for (position, part) in archive.parts().iter().enumerate() {
            if let Some(start) = &part.start_param {
                if !entry_candidates.contains(start) {
                    entry_candidates.push(start.clone());
                }
            }

            if let Some(location) = &part.content_location {
                let base = part.content_base.as_deref().unwrap_or("");
                by_location.insert(join_url(base, location), position);
            }

            if let Some(content_id) = &part.content_id {
                by_id.insert(content_id.clone(), position);
                by_id.insert(content_id.trim_matches(['<', '>']).to_string(), position);
            }
        }

        ReferenceIndex {
            by_location,
            by_id,
            entry_candidates,
        }
    }

    /// Looks up a part by its resolved content-location key
    pub fn part_by_location(&self, key: &str) -> Option<usize> {
        self.by_location.get(key).copied()
    }

    /// Looks up a part by content-ID token (raw or bracket-stripped form)
    pub fn part_by_id(&self, key: &str) -> Option<usize> {
        self.by_id.get(key).copied()
    }

    /// Content-ID tokens declared as entry points via "start" parameters
    pub fn entry_candidates(&self) -> &[String] {
        &self.entry_candidates
    }

    /// Selects the part to render as the document root
    ///
    /// Prefers the first start-designated part that resolves by content-ID,
    /// then falls back to the first non-container part in document order.
    pub fn select_root(&self, archive: &MhtmlArchive) -> Option<usize> {
        for candidate in &self.entry_candidates {
            if let Some(position) = self.part_by_id(candidate) {
                return Some(position);
            }
        }

        archive.parts().iter().position(|part| !part.is_container)
    }
}
