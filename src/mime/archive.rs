use mailparse::{parse_mail, MailHeaderMap, ParsedMail};

use crate::core::UnmhtError;

/// One typed, headered unit within a multipart message
///
/// Parts are extracted once from the container, with their transfer encoding
/// already decoded, and are immutable afterwards. The archive owns them; the
/// rest of the crate only borrows references into it.
#[derive(Debug, Clone)]
pub struct Part {
    /// Declared media type, lowercased; empty when no Content-Type header was present
    pub content_type: String,
    /// Charset parameter of the Content-Type header
    pub charset: String,
    /// Decoded payload bytes
    pub body: Vec<u8>,
    pub content_location: Option<String>,
    pub content_base: Option<String>,
    pub content_id: Option<String>,
    /// Value of the "start" parameter on the Content-Type header, if any
    pub start_param: Option<String>,
    /// Whether this part is a multipart container rather than a leaf
    pub is_container: bool,
}

/// A parsed MHTML container: every part of the message tree, flattened
/// into document order (containers included)
pub struct MhtmlArchive {
    parts: Vec<Part>,
}

impl MhtmlArchive {
    /// Parses raw MHTML bytes into an archive
    pub fn parse(data: &[u8]) -> Result<MhtmlArchive, UnmhtError> {
        let mail = parse_mail(data)
            .map_err(|e| UnmhtError::new(&format!("malformed MIME container: {e}")))?;

        let mut parts: Vec<Part> = Vec::new();
        collect_parts(&mail, &mut parts)?;

        Ok(MhtmlArchive { parts })
    }

    /// All parts in document order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The part at the given position
    pub fn part(&self, position: usize) -> &Part {
        &self.parts[position]
    }
}

fn collect_parts(mail: &ParsedMail, parts: &mut Vec<Part>) -> Result<(), UnmhtError> {
    // An absent Content-Type header is kept distinguishable from a declared
    // one; mailparse alone would report the RFC default "text/plain"
    let content_type = if mail.headers.get_first_value("Content-Type").is_some() {
        mail.ctype.mimetype.clone()
    } else {
        String::new()
    };

    let body = mail
        .get_body_raw()
        .map_err(|e| UnmhtError::new(&format!("unable to decode part body: {e}")))?;

    parts.push(Part {
        is_container: mail.ctype.mimetype.starts_with("multipart/"),
        content_type,
        charset: mail.ctype.charset.clone(),
        body,
        content_location: mail.headers.get_first_value("Content-Location"),
        content_base: mail.headers.get_first_value("Content-Base"),
        content_id: mail.headers.get_first_value("Content-ID"),
        start_param: mail.ctype.params.get("start").cloned(),
    });

    for subpart in &mail.subparts {
        collect_parts(subpart, parts)?;
    }

    Ok(())
}
