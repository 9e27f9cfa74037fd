//! Input stripping and HTML escaping.
//!
//! Two independent, pure, total transforms:
//!
//! - [`sanitize_input`] cleans a raw line before it is tokenized into a command:
//!   tag-like spans, `javascript:` schemes, and inline event-handler patterns
//!   are removed, the result is truncated and trimmed.
//! - [`escape_html`] escapes text for interpolation into an HTML fragment.
//!
//! This is a best-effort display-safety measure, not a sandbox. Author-supplied
//! content fragments in the tree are trusted and must NOT pass through
//! [`escape_html`] when rendered by `cat`; only user-originated text (typed
//! arguments, error messages) is escaped, and at most once per render since
//! escaping is not idempotent.

use alloc::string::String;

/// Strip dangerous patterns from a raw input line and bound its length.
///
/// Applied to every submitted line before tokenizing. In order:
///
/// 1. Remove each `<...>` span (from a `<` to the next `>`, inclusive). An
///    unmatched `<` with no closing `>` is left in place.
/// 2. Remove `javascript:` substrings, case-insensitively.
/// 3. Remove inline event-handler patterns: `on`, one or more word characters,
///    optional whitespace, `=` (e.g. `onclick=`, `onLoad  =`).
/// 4. Truncate to `max_len` characters.
/// 5. Trim surrounding whitespace.
///
/// Each removal is a single left-to-right pass; text formed by joining the
/// pieces around a removal is not rescanned.
pub fn sanitize_input(raw: &str, max_len: usize) -> String {
    let stripped = strip_tags(raw);
    let stripped = strip_pattern_ci(&stripped, "javascript:");
    let stripped = strip_event_handlers(&stripped);

    let truncated: String = stripped.chars().take(max_len).collect();
    String::from(truncated.trim())
}

/// Escape HTML special characters for safe interpolation.
///
/// Replaces each of `& < > " ' /` with its entity. Not idempotent; callers
/// apply it at most once per render.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Remove `<...>` spans. A `<` without a later `>` survives.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        match rest[start..].find('>') {
            Some(rel_end) => {
                out.push_str(&rest[..start]);
                rest = &rest[start + rel_end + 1..];
            }
            None => {
                // No closing '>' anywhere ahead, nothing more to strip
                break;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Remove every occurrence of `pattern` (ASCII, matched case-insensitively)
/// in a single left-to-right pass.
fn strip_pattern_ci(input: &str, pattern: &str) -> String {
    debug_assert!(pattern.is_ascii());

    let mut out = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let pat = pattern.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if i + pat.len() <= bytes.len()
            && bytes[i..i + pat.len()].eq_ignore_ascii_case(pat)
        {
            i += pat.len();
        } else {
            // Advance one full character, not one byte
            let ch_len = utf8_len(bytes[i]);
            out.push_str(&input[i..i + ch_len]);
            i += ch_len;
        }
    }

    out
}

/// Remove `on<word chars><whitespace?>=` patterns, case-insensitive on the
/// `on` prefix and the word characters.
fn strip_event_handlers(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if let Some(end) = match_event_handler(bytes, i) {
            i = end;
        } else {
            let ch_len = utf8_len(bytes[i]);
            out.push_str(&input[i..i + ch_len]);
            i += ch_len;
        }
    }

    out
}

/// Try to match `on\w+\s*=` at byte offset `start`; returns the end offset.
fn match_event_handler(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;

    if i + 1 >= bytes.len()
        || !bytes[i].eq_ignore_ascii_case(&b'o')
        || !bytes[i + 1].eq_ignore_ascii_case(&b'n')
    {
        return None;
    }
    i += 2;

    // At least one word character
    let word_start = i;
    while i < bytes.len() && is_word_byte(bytes[i]) {
        i += 1;
    }
    if i == word_start {
        return None;
    }

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    if i < bytes.len() && bytes[i] == b'=' {
        Some(i + 1)
    } else {
        None
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn utf8_len(first_byte: u8) -> usize {
    match first_byte {
        b if b < 0x80 => 1,
        b if b < 0xE0 => 2,
        b if b < 0xF0 => 3,
        _ => 4,
    }
}
