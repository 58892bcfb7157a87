use chrono::{SecondsFormat, Utc};
use markup5ever_rcdom::Handle;

use super::dom::{find_nodes, get_node_attr};

/// Returns the document's base URL target, if it declares one
pub fn get_base_url(handle: &Handle) -> Option<String> {
    if let Some(base_node) = find_nodes(handle, vec!["html", "head", "base"]).first() {
        // Only the first base tag matters (the rest are ignored, if any)
        get_node_attr(base_node, "href")
    } else {
        None
    }
}

/// Builds the provenance comment prepended to converted documents
pub fn create_metadata_tag(source: &str) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    format!(
        "<!-- Unpacked from {} at {} using {} v{} -->",
        source,
        timestamp,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}
