// src/core/text.rs
use crate::config::consts::NO_LETTER;

/// Leading token of a field: split on single spaces, take the first piece, trim it.
/// Empty field gives "".
pub fn first_word(s: &str) -> &str {
    s.split(' ').next().unwrap_or("").trim()
}

/// Section letter for a key field: uppercased first char of its first word, or `#`.
/// Uppercasing can widen one char (e.g. `ß` → `SS`); the full mapping is kept.
pub fn section_letter(field: &str) -> String {
    match first_word(field).chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => s!(NO_LETTER),
    }
}

/// Escape text for HTML element content and double-quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
