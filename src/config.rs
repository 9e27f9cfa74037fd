//! Configuration traits and implementations for shell limits and fixed strings.
//!
//! The `ShellConfig` trait allows compile-time configuration of input bounds and
//! the handful of deployment-specific strings (prompt label, welcome banner,
//! resume asset location) without runtime overhead.

/// Shell configuration trait defining input bounds and fixed strings.
///
/// All values are const (zero runtime cost). The numeric limits exist purely to
/// cap per-keystroke and per-dispatch work; they are not security boundaries.
pub trait ShellConfig {
    /// Maximum input line length in characters (default: 1000).
    ///
    /// The sanitizer truncates every submitted line to this length, and the
    /// line editor refuses further characters once the buffer reaches it.
    const MAX_INPUT: usize;

    /// Maximum number of command arguments kept after tokenizing (default: 16)
    const MAX_ARGS: usize;

    /// Command history ring size (default: 32)
    const HISTORY_SIZE: usize;

    /// Prompt label shown before `:<cwd>$` in echoed lines
    const PROMPT_LABEL: &'static str;

    /// Banner line appended to the transcript by [`Shell::activate`](crate::Shell::activate)
    const MSG_WELCOME: &'static str;

    /// Absolute path of the resume asset targeted by the `download` command
    const RESUME_PATH: &'static str;

    /// Filename suggested to the browser when downloading the resume
    const RESUME_FILENAME: &'static str;
}

/// Default configuration for a typical portfolio page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl ShellConfig for DefaultConfig {
    const MAX_INPUT: usize = 1000;
    const MAX_ARGS: usize = 16;
    const HISTORY_SIZE: usize = 32;
    const PROMPT_LABEL: &'static str = "guest@folio";
    const MSG_WELCOME: &'static str =
        "Welcome. This interactive terminal is a portfolio shell — type 'help'.";
    const RESUME_PATH: &'static str = "/resume.pdf";
    const RESUME_FILENAME: &'static str = "resume.pdf";
}

/// Compact configuration for memory-conscious embeddings.
///
/// Reduced limits for pages that keep many shell instances alive:
/// - MAX_INPUT: 256 characters
/// - MAX_ARGS: 8 arguments
/// - HISTORY_SIZE: 8 commands
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CompactConfig;

impl ShellConfig for CompactConfig {
    const MAX_INPUT: usize = 256;
    const MAX_ARGS: usize = 8;
    const HISTORY_SIZE: usize = 8;
    const PROMPT_LABEL: &'static str = DefaultConfig::PROMPT_LABEL;
    const MSG_WELCOME: &'static str = DefaultConfig::MSG_WELCOME;
    const RESUME_PATH: &'static str = DefaultConfig::RESUME_PATH;
    const RESUME_FILENAME: &'static str = DefaultConfig::RESUME_FILENAME;
}
