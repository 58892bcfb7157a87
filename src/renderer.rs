use std::collections::HashSet;

use encoding_rs::Encoding;
use markup5ever_rcdom::{Handle, NodeData};
use percent_encoding::percent_decode_str;
use url::Url;

use crate::core::{is_plaintext_media_type, print_info_message, UnmhtError, UnmhtOptions};
use crate::mime::{ExtensionCache, MhtmlArchive, Part, PartDescriptor, ReferenceIndex};
use crate::parsers::html::{
    get_base_url, html_to_dom, reference_attributes, serialize_document,
};
use crate::parsers::html::dom::{get_node_attr, set_node_attr};
use crate::storage::AssetStore;
use crate::utils::url::join_url;

/// Hard ceiling on reference-graph recursion depth
///
/// Cycle detection already breaks loops; this bounds pathological acyclic
/// chains as well. A reference past the limit is left unresolved.
pub const MAX_RENDER_DEPTH: usize = 128;

/// The set of parts currently being rendered on the active recursion path
///
/// Keyed by content digest. Extending returns a new value, so sibling
/// branches of the recursion never observe each other's guard state.
#[derive(Clone, Debug, Default)]
pub struct CycleGuard {
    digests: HashSet<String>,
}

impl CycleGuard {
    pub fn new() -> CycleGuard {
        CycleGuard {
            digests: HashSet::new(),
        }
    }

    /// Whether the part with this digest is already on the active path
    pub fn contains(&self, digest: &str) -> bool {
        self.digests.contains(digest)
    }

    /// Returns a copy of this guard with the given digest added
    pub fn with(&self, digest: &str) -> CycleGuard {
        let mut extended = self.clone();
        extended.digests.insert(digest.to_string());
        extended
    }

    /// Number of parts on the active path
    pub fn depth(&self) -> usize {
        self.digests.len()
    }
}

/// Recursively renders parts into their final byte representation
///
/// HTML parts get their reference-bearing attributes resolved against the
/// index and rewritten to whatever URI the storage strategy hands back;
/// other parts pass through (textual ones re-encoded as UTF-8).
pub struct Renderer<'a> {
    archive: &'a MhtmlArchive,
    index: &'a ReferenceIndex,
    store: &'a dyn AssetStore,
    options: &'a UnmhtOptions,
    extensions: ExtensionCache,
}

impl<'a> Renderer<'a> {
    pub fn new(
        archive: &'a MhtmlArchive,
        index: &'a ReferenceIndex,
        store: &'a dyn AssetStore,
        options: &'a UnmhtOptions,
    ) -> Renderer<'a> {
        Renderer {
            archive,
            index,
            store,
            options,
            extensions: ExtensionCache::new(),
        }
    }

    /// Computes the derived view of a part
    pub fn describe<'p>(&self, part: &'p Part) -> PartDescriptor<'p> {
        PartDescriptor::new(part, &self.extensions)
    }

    /// Renders a part into its final bytes and effective media type
    ///
    /// The guard holds the digests of every part on the active recursion
    /// path; references back into it are left unresolved.
    pub fn render(
        &self,
        part: &Part,
        guard: &CycleGuard,
    ) -> Result<(Vec<u8>, String), UnmhtError> {
        let descriptor = self.describe(part);

        if is_html_media_type(&descriptor.content_type) {
            return self.render_html(part, &descriptor, guard);
        }

        if is_plaintext_media_type(&descriptor.content_type) {
            let text = match Encoding::for_label(part.charset.as_bytes()) {
                Some(encoding) => encoding.decode(descriptor.payload).0.into_owned(),
                None => String::from_utf8_lossy(descriptor.payload).into_owned(),
            };
            let media_type = format!("{};charset=utf-8", descriptor.content_type);
            return Ok((text.into_bytes(), media_type));
        }

        Ok((descriptor.payload.to_vec(), descriptor.content_type.clone()))
    }

    fn render_html(
        &self,
        part: &Part,
        descriptor: &PartDescriptor,
        guard: &CycleGuard,
    ) -> Result<(Vec<u8>, String), UnmhtError> {
        let dom = html_to_dom(descriptor.payload, part.charset.clone());

        // The document's own BASE element wins over the Content-Base header;
        // either is resolved against the part's location
        let location = part.content_location.clone().unwrap_or_default();
        let base_target = get_base_url(&dom.document)
            .or_else(|| part.content_base.clone())
            .unwrap_or_default();
        let base = join_url(&location, &base_target);

        // Protect this part against re-entry from anywhere below it
        let guard = guard.with(&descriptor.digest);
        self.rewrite_references(&dom.document, &base, &guard)?;

        Ok((
            serialize_document(dom),
            "text/html;charset=utf-8".to_string(),
        ))
    }

    fn rewrite_references(
        &self,
        node: &Handle,
        base: &str,
        guard: &CycleGuard,
    ) -> Result<(), UnmhtError> {
        if let NodeData::Element { ref name, .. } = node.data {
            let element_name = name.local.as_ref();

            for attr_name in reference_attributes(element_name) {
                let attr_value = match get_node_attr(node, attr_name) {
                    Some(value) => value,
                    None => continue,
                };
                let href = attr_value.trim();
                if href.is_empty() {
                    continue;
                }

                let target = self.resolve_reference(href, base);
                if !self.options.silent {
                    print_info_message(&format!(
                        "{}.{}={}; {}",
                        element_name,
                        attr_name,
                        href,
                        target.is_some()
                    ));
                }

                if let Some(target_part) = target {
                    if let Some(substitute) = self.store.store_part(self, target_part, guard)? {
                        set_node_attr(node, attr_name, Some(substitute));
                    }
                }
            }
        }

        for child_node in node.children.borrow().iter() {
            self.rewrite_references(child_node, base, guard)?;
        }

        Ok(())
    }

    /// Resolves a reference value to a sibling part, if the archive has one
    ///
    /// cid: URLs always go through the content-ID table; every other
    /// spelling is joined against the effective base and looked up by
    /// location.
    fn resolve_reference(&self, href: &str, base: &str) -> Option<&'a Part> {
        if let Ok(href_url) = Url::parse(href) {
            if href_url.scheme() == "cid" {
                let id = percent_decode_str(href_url.path()).decode_utf8_lossy();
                return self
                    .index
                    .part_by_id(&id)
                    .map(|position| self.archive.part(position));
            }
        }

        self.index
            .part_by_location(&join_url(base, href))
            .map(|position| self.archive.part(position))
    }
}

fn is_html_media_type(media_type: &str) -> bool {
    media_type == "text/html" || media_type == "application/xhtml+xml"
}
