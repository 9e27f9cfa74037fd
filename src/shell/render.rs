//! HTML fragment builders for transcript and modal output.
//!
//! The shell emits HTML strings; the embedding page inserts them verbatim.
//! Inline styles reference the page's terminal palette so fragments look right
//! without any extra stylesheet wiring.
//!
//! Callers are responsible for escaping: every `*_escaped` parameter must
//! already have passed through [`escape_html`](crate::sanitize::escape_html),
//! while `content` parameters are trusted author HTML and are interpolated
//! verbatim.

use alloc::format;
use alloc::string::String;

/// Muted accent color used for prompts and listings.
pub const COLOR_MUTED: &str = "#7fb99a";

/// Primary text color used for content blocks.
pub const COLOR_TEXT: &str = "#c6f2d6";

/// Wrap already-escaped text in a muted-colored span.
pub fn muted_span(inner_escaped: &str) -> String {
    format!(r#"<span style="color:{COLOR_MUTED}">{inner_escaped}</span>"#)
}

/// Build the echo line recorded before any handler output.
///
/// Format: `<span ...>{label}:{cwd}$</span> {line}`.
pub fn prompt_echo(label: &str, cwd_escaped: &str, line_escaped: &str) -> String {
    format!(
        r#"<span style="color:{COLOR_MUTED}">{label}:{cwd_escaped}$</span> {line_escaped}"#
    )
}

/// Wrap a trusted author content fragment in a pre-wrap display block (`cat`).
pub fn content_block(content: &str) -> String {
    format!(r#"<div style="white-space:pre-wrap;color:{COLOR_TEXT}">{content}</div>"#)
}

/// Wrap escaped text in the modal `<pre>` container (`open`).
pub fn modal_pre(inner_escaped: &str) -> String {
    format!(
        r#"<pre style="white-space:pre-wrap;font-family:var(--font-mono)">{inner_escaped}</pre>"#
    )
}
