// Shared helpers for integration tests
//
// Builds MHTML fixtures and picks apart data URLs in converted output

use base64::{prelude::BASE64_STANDARD, Engine};

pub const BOUNDARY: &str = "----=_NextPart_000_0000";

/// One part of a fixture archive
pub struct TestPart {
    content_type: String,
    content_id: Option<String>,
    content_location: Option<String>,
    content_base: Option<String>,
    body: Vec<u8>,
    base64_encoded: bool,
}

impl TestPart {
    /// A textual part, written into the archive verbatim
    pub fn text(content_type: &str, body: &str) -> TestPart {
        TestPart {
            content_type: content_type.to_string(),
            content_id: None,
            content_location: None,
            content_base: None,
            body: body.as_bytes().to_vec(),
            base64_encoded: false,
        }
    }

    /// A binary part, carried with base64 transfer encoding so the decoded
    /// payload is byte-for-byte what was passed in
    pub fn binary(content_type: &str, body: &[u8]) -> TestPart {
        TestPart {
            content_type: content_type.to_string(),
            content_id: None,
            content_location: None,
            content_base: None,
            body: body.to_vec(),
            base64_encoded: true,
        }
    }

    pub fn id(mut self, content_id: &str) -> TestPart {
        self.content_id = Some(content_id.to_string());
        self
    }

    pub fn location(mut self, content_location: &str) -> TestPart {
        self.content_location = Some(content_location.to_string());
        self
    }

    pub fn base(mut self, content_base: &str) -> TestPart {
        self.content_base = Some(content_base.to_string());
        self
    }
}

/// Assembles a multipart/related archive from the given parts
pub fn mhtml_archive(start: Option<&str>, parts: &[TestPart]) -> Vec<u8> {
    let mut message = String::new();

    message.push_str("MIME-Version: 1.0\r\n");
    match start {
        Some(start) => message.push_str(&format!(
            "Content-Type: multipart/related; boundary=\"{BOUNDARY}\"; start=\"{start}\"; type=\"text/html\"\r\n",
        )),
        None => message.push_str(&format!(
            "Content-Type: multipart/related; boundary=\"{BOUNDARY}\"\r\n",
        )),
    }
    message.push_str("\r\n");

    for part in parts {
        message.push_str(&format!("--{BOUNDARY}\r\n"));
        // An empty content type means "leave the header out entirely"
        if !part.content_type.is_empty() {
            message.push_str(&format!("Content-Type: {}\r\n", part.content_type));
        }
        if let Some(content_id) = &part.content_id {
            message.push_str(&format!("Content-ID: {content_id}\r\n"));
        }
        if let Some(content_location) = &part.content_location {
            message.push_str(&format!("Content-Location: {content_location}\r\n"));
        }
        if let Some(content_base) = &part.content_base {
            message.push_str(&format!("Content-Base: {content_base}\r\n"));
        }
        if part.base64_encoded {
            message.push_str("Content-Transfer-Encoding: base64\r\n");
        }
        message.push_str("\r\n");
        if part.base64_encoded {
            message.push_str(&BASE64_STANDARD.encode(&part.body));
        } else {
            message.push_str(&String::from_utf8_lossy(&part.body));
        }
        message.push_str("\r\n");
    }

    message.push_str(&format!("--{BOUNDARY}--\r\n"));

    message.into_bytes()
}

/// Finds the first data URL with the given media-type prefix in the output
pub fn extract_data_url(html: &str, media_type_prefix: &str) -> Option<String> {
    let needle = format!("data:{media_type_prefix}");
    let start = html.find(&needle)?;
    let rest = &html[start..];
    let end = rest.find('"')?;

    Some(rest[..end].to_string())
}

/// Decodes the base64 payload of a data URL
pub fn data_url_payload(data_url: &str) -> Vec<u8> {
    let payload = data_url
        .split("base64,")
        .nth(1)
        .expect("not a base64 data URL");

    BASE64_STANDARD.decode(payload).expect("invalid base64")
}
