use std::error::Error;
use std::fmt;

use chrono::{SecondsFormat, Utc};

use crate::mime::{MhtmlArchive, ReferenceIndex};
use crate::renderer::{CycleGuard, Renderer};
use crate::storage::AssetStore;

/// Represents errors that can occur while converting an archive
///
/// This error type encapsulates all possible errors that can occur
/// when processing a document with the unmht library.
#[derive(Debug)]
pub struct UnmhtError {
    details: String,
}

impl UnmhtError {
    /// Creates a new UnmhtError with the given message
    pub fn new(msg: &str) -> UnmhtError {
        UnmhtError {
            details: msg.to_string(),
        }
    }
}

impl fmt::Display for UnmhtError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for UnmhtError {
    fn description(&self) -> &str {
        &self.details
    }
}

/// Configuration options for archive conversion
///
/// This struct contains the configuration options that control
/// how an archive is converted and what gets written alongside it.
#[derive(Default, Clone)]
pub struct UnmhtOptions {
    pub no_metadata: bool,
    pub silent: bool,
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";
const FILE_SIGNATURES: [[&[u8]; 2]; 18] = [
    // Image
    [b"GIF87a", b"image/gif"],
    [b"GIF89a", b"image/gif"],
    [b"\xFF\xD8\xFF", b"image/jpeg"],
    [b"\x89PNG\x0D\x0A\x1A\x0A", b"image/png"],
    [b"<svg ", b"image/svg+xml"],
    [b"RIFF....WEBPVP8 ", b"image/webp"],
    [b"\x00\x00\x01\x00", b"image/x-icon"],
    // Audio
    [b"ID3", b"audio/mpeg"],
    [b"\xFF\x0E", b"audio/mpeg"],
    [b"\xFF\x0F", b"audio/mpeg"],
    [b"OggS", b"audio/ogg"],
    [b"RIFF....WAVEfmt ", b"audio/wav"],
    [b"fLaC", b"audio/x-flac"],
    // Video
    [b"RIFF....AVI LIST", b"video/avi"],
    [b"....ftyp", b"video/mp4"],
    [b"\x00\x00\x01\x0B", b"video/mpeg"],
    [b"....moov", b"video/quicktime"],
    [b"\x1A\x45\xDF\xA3", b"video/webm"],
];
// All known non-"text/..." plaintext media types
const PLAINTEXT_MEDIA_TYPES: &[&str] = &[
    "application/javascript",          // .js
    "application/json",                // .json
    "application/ld+json",             // .jsonld
    "application/x-sh",                // .sh
    "application/xhtml+xml",           // .xhtml
    "application/xml",                 // .xml
    "application/vnd.mozilla.xul+xml", // .xul
    "image/svg+xml",                   // .svg
];

/// Converts one MHTML archive into a single document
///
/// Parses the MIME container, indexes the parts, selects the entry point and
/// renders it with the given storage strategy.
///
/// # Arguments
///
/// * `options` - Conversion options
/// * `store` - Strategy used to represent rendered resource parts
/// * `input` - Raw MHTML archive bytes
///
/// # Returns
///
/// Returns the bytes of the converted top-level document, or an error if the
/// container is malformed, no entry point exists, or the storage strategy
/// fails to persist a resource.
///
/// # Examples
///
/// ```no_run
/// use unmht::core::{convert_mhtml_document, UnmhtOptions};
/// use unmht::storage::InlineStore;
///
/// let options = UnmhtOptions::default();
/// let input = std::fs::read("snapshot.mht").unwrap();
///
/// let result = convert_mhtml_document(&options, &InlineStore, &input);
/// ```
pub fn convert_mhtml_document(
    options: &UnmhtOptions,
    store: &dyn AssetStore,
    input: &[u8],
) -> Result<Vec<u8>, UnmhtError> {
    let archive = MhtmlArchive::parse(input)?;
    let index = ReferenceIndex::build(&archive);
    let root = index
        .select_root(&archive)
        .ok_or_else(|| UnmhtError::new("no root part found in archive"))?;

    let renderer = Renderer::new(&archive, &index, store, options);
    let (data, _media_type) = renderer.render(archive.part(root), &CycleGuard::new())?;

    Ok(data)
}

/// Determines the media type of data based on its content signature
pub fn detect_media_type(data: &[u8]) -> Option<String> {
    for signature in &FILE_SIGNATURES {
        let sig_bytes = signature[0];
        if data.len() >= sig_bytes.len() && data.starts_with(sig_bytes) {
            return Some(String::from_utf8_lossy(signature[1]).to_string());
        }
    }

    None
}

/// Checks if the given media type represents plaintext content
pub fn is_plaintext_media_type(media_type: &str) -> bool {
    media_type.starts_with("text/") || PLAINTEXT_MEDIA_TYPES.contains(&media_type)
}

/// Formats output path with stem and timestamp substitution
pub fn format_output_path(path: &str, input_stem: &str) -> String {
    let datetime: &str = &Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    path.replace("%timestamp%", &datetime.replace(':', "_"))
        .replace("%stem%", input_stem)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
