// src/source.rs
//
// Where the CSV comes from: an `http://` URL or a local path.
// Also resolves image URLs that are relative to that location.

use std::{error::Error, fs, path::Path};

use crate::core::net;

const BOM: char = '\u{feff}';

/// Read the whole resource as text. This is the pipeline's only I/O step.
/// A leading byte order mark is dropped.
pub fn fetch(source: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let source = source.trim();
    if source.is_empty() {
        return Err("No CSV source given".into());
    }
    let text = if net::is_http_url(source) {
        logd!("Fetch: GET {}", source);
        net::http_get(source)?
    } else {
        logd!("Fetch: read {}", source);
        fs::read_to_string(source).map_err(|e| format!("Cannot read {}: {}", source, e))?
    };
    Ok(match text.strip_prefix(BOM) {
        Some(rest) => s!(rest),
        None => text,
    })
}

fn has_scheme(url: &str) -> bool {
    match url.find("://") {
        Some(i) => url[..i].chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'),
        None => url.starts_with("data:"),
    }
}

/// Turn a raw image cell into a URI an image loader can open.
///
/// Absolute URLs pass through. Relative ones resolve against the CSV source:
/// the directory part of an http URL, or a `file://` path next to a local file.
/// Surrounding whitespace is dropped, matching how browsers read `src`.
pub fn resolve_image_url(source: &str, raw: &str) -> String {
    let url = raw.trim();
    if url.is_empty() || has_scheme(url) {
        return s!(url);
    }

    let source = source.trim();
    if net::is_http_url(source) {
        let after_scheme = source.find("://").map(|i| i + 3).unwrap_or(0);
        if url.starts_with('/') {
            let host_end = source[after_scheme..]
                .find('/')
                .map(|i| i + after_scheme)
                .unwrap_or(source.len());
            return join!(&source[..host_end], url);
        }
        let dir_end = source[after_scheme..]
            .rfind('/')
            .map(|i| i + after_scheme + 1);
        return match dir_end {
            Some(end) => join!(&source[..end], url),
            None => join!(source, "/", url),
        };
    }

    let base = Path::new(source).parent().unwrap_or(Path::new(""));
    let joined = base.join(url);
    let abs = std::path::absolute(&joined).unwrap_or(joined);
    let path = abs.to_string_lossy().replace('\\', "/");
    if path.starts_with('/') {
        join!("file://", &path)
    } else {
        join!("file:///", &path)
    }
}
