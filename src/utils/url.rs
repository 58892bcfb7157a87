use base64::{prelude::BASE64_STANDARD, Engine};

pub use url::Url;

/// Joins a target URL against a base, best-effort
///
/// Absolute bases get standard join semantics. A base that does not parse as
/// an absolute URL contributes nothing; the target is then used verbatim
/// (normalized when it is itself absolute). Malformed input never fails —
/// an unresolvable reference just keeps its original spelling.
///
/// Indexing and lookup both go through this function, so the keys they
/// produce stay consistent.
pub fn join_url(base: &str, target: &str) -> String {
    if target.is_empty() {
        return base.to_string();
    }

    match Url::parse(base) {
        Ok(base_url) => match base_url.join(target) {
            Ok(joined) => joined.to_string(),
            Err(_) => target.to_string(),
        },
        Err(_) => match Url::parse(target) {
            Ok(absolute) => absolute.to_string(),
            Err(_) => target.to_string(),
        },
    }
}

/// Creates a data URL embedding the given bytes inline
pub fn create_data_url(media_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, BASE64_STANDARD.encode(data))
}
