use crate::core::UnmhtError;
use crate::mime::Part;
use crate::renderer::{CycleGuard, Renderer, MAX_RENDER_DEPTH};
use crate::storage::AssetStore;
use crate::utils::url::create_data_url;

/// Represents rendered parts as self-contained data URLs
///
/// No external state; the returned URIs can get arbitrarily large.
pub struct InlineStore;

impl AssetStore for InlineStore {
    fn store_part(
        &self,
        renderer: &Renderer,
        part: &Part,
        guard: &CycleGuard,
    ) -> Result<Option<String>, UnmhtError> {
        let descriptor = renderer.describe(part);

        if guard.contains(&descriptor.digest) || guard.depth() >= MAX_RENDER_DEPTH {
            return Ok(None);
        }

        let (data, media_type) = renderer.render(part, &guard.with(&descriptor.digest))?;

        Ok(Some(create_data_url(&media_type, &data)))
    }
}
