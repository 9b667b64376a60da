//! XML escaping for the text backend.
//!
//! Two escape sets exist: character content escapes `&`, `<`, and `>`;
//! attribute values additionally escape `"`. Both appenders slice clean
//! spans straight through and only expand the bytes that need it.

use memchr::memchr3_iter;

/// Worst-case expansion factor for text content (`&` → `&amp;`, 5 bytes).
pub(crate) const TEXT_EXPANSION: usize = 5;

/// Worst-case expansion factor for attribute values (`"` → `&quot;`, 6 bytes).
pub(crate) const ATTR_EXPANSION: usize = 6;

/// Append `content` to `out`, escaping `&`, `<`, and `>`.
pub(crate) fn escape_text_into(out: &mut String, content: &str) {
    let bytes = content.as_bytes();
    let mut start = 0;
    for i in memchr3_iter(b'&', b'<', b'>', bytes) {
        out.push_str(&content[start..i]);
        out.push_str(match bytes[i] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            _ => "&gt;",
        });
        start = i + 1;
    }
    out.push_str(&content[start..]);
}

/// Append `content` to `out`, escaping `&`, `<`, `>`, and `"`.
pub(crate) fn escape_attr_into(out: &mut String, content: &str) {
    let mut start = 0;
    for (i, byte) in content.bytes().enumerate() {
        let replacement = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            _ => continue,
        };
        out.push_str(&content[start..i]);
        out.push_str(replacement);
        start = i + 1;
    }
    out.push_str(&content[start..]);
}
