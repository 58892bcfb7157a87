use std::collections::HashMap;
use std::sync::Mutex;

use base64::{prelude::BASE64_URL_SAFE_NO_PAD, Engine};
use sha2::{Digest, Sha256};

use crate::core::{detect_media_type, print_info_message};
use crate::mime::archive::Part;

// Looked up before the registry, for readability and predictability
const COMMON_EXTENSIONS: [[&str; 2]; 4] = [
    ["text/html", ".html"],
    ["text/plain", ".txt"],
    ["application/octet-stream", ".data"],
    ["image/jpeg", ".jpg"],
];

// Known media types and their candidate file extensions
const MEDIA_TYPE_EXTENSIONS: &[(&str, &[&str])] = &[
    ("application/javascript", &[".js", ".mjs"]),
    ("application/json", &[".json"]),
    ("application/pdf", &[".pdf"]),
    ("application/xhtml+xml", &[".xhtml"]),
    ("application/xml", &[".xml", ".xsl"]),
    ("application/zip", &[".zip"]),
    ("audio/mpeg", &[".mp3", ".mpga"]),
    ("audio/ogg", &[".ogg", ".oga"]),
    ("audio/wav", &[".wav"]),
    ("audio/x-flac", &[".flac"]),
    ("font/woff", &[".woff"]),
    ("font/woff2", &[".woff2"]),
    ("image/gif", &[".gif"]),
    ("image/png", &[".png"]),
    ("image/svg+xml", &[".svg"]),
    ("image/webp", &[".webp"]),
    ("image/x-icon", &[".ico", ".cur"]),
    ("text/css", &[".css"]),
    ("text/csv", &[".csv"]),
    ("text/javascript", &[".js"]),
    ("video/avi", &[".avi"]),
    ("video/mp4", &[".mp4"]),
    ("video/mpeg", &[".mpeg", ".mpg"]),
    ("video/quicktime", &[".mov", ".qt"]),
    ("video/webm", &[".webm"]),
];

/// Resolved (media type -> extension) mappings
///
/// The mapping is pure, so resolved entries are cached. The cache is explicit
/// state injected where descriptors are computed; the mutex keeps it safe if
/// conversions ever run in parallel.
#[derive(Default)]
pub struct ExtensionCache {
    resolved: Mutex<HashMap<String, String>>,
}

impl ExtensionCache {
    pub fn new() -> ExtensionCache {
        ExtensionCache {
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// Determines a file extension for the given media type
    ///
    /// Common types come from a small hard-coded table; everything else is
    /// looked up in the built-in registry, picking the lexicographically
    /// smallest candidate. Unknown types get no extension. Each newly
    /// resolved mapping is logged once.
    pub fn resolve(&self, media_type: &str) -> String {
        let media_type = media_type.to_lowercase();

        for [known_type, extension] in &COMMON_EXTENSIONS {
            if *known_type == media_type {
                return extension.to_string();
            }
        }

        let mut resolved = self.resolved.lock().unwrap();
        if let Some(extension) = resolved.get(&media_type) {
            return extension.clone();
        }

        let extension: String = MEDIA_TYPE_EXTENSIONS
            .iter()
            .find(|(known_type, _)| *known_type == media_type)
            .and_then(|(_, candidates)| candidates.iter().min())
            .map(|extension| extension.to_string())
            .unwrap_or_default();

        print_info_message(&format!("  {} -> '{}'", media_type, extension));
        resolved.insert(media_type, extension.clone());

        extension
    }
}

/// Derived, per-render view of a Part
///
/// Computed each time a part is rendered; the digest is stable for a given
/// payload and doubles as the cycle-detection token.
pub struct PartDescriptor<'a> {
    /// Effective media type: declared, or sniffed from the payload when the
    /// declaration was absent or the generic octet-stream placeholder
    pub content_type: String,
    pub payload: &'a [u8],
    pub extension: String,
    /// SHA-256 of the payload, URL-safe base64 without padding
    pub digest: String,
}

impl<'a> PartDescriptor<'a> {
    pub fn new(part: &'a Part, extensions: &ExtensionCache) -> PartDescriptor<'a> {
        let mut content_type = part.content_type.clone();
        if content_type.is_empty() || content_type.contains("octet-stream") {
            if let Some(sniffed_type) = detect_media_type(&part.body) {
                content_type = sniffed_type;
            }
        }

        let extension = extensions.resolve(&content_type);

        let mut hasher = Sha256::new();
        hasher.update(&part.body);
        let digest = BASE64_URL_SAFE_NO_PAD.encode(hasher.finalize());

        PartDescriptor {
            content_type,
            payload: &part.body,
            extension,
            digest,
        }
    }
}
