//! Error types for command execution.
//!
//! `ShellError` covers the full failure taxonomy of the shell: path-not-found,
//! wrong-node-type, missing-argument, unknown-command, and unexpected handler
//! faults. Every variant renders (via `Display`) as the exact transcript line
//! shown to the user, so the dispatcher recovers from any of them by appending
//! `error.to_string()` to the transcript. No error is ever fatal to the shell.
//!
//! Variants that interpolate user-typed text carry it **already HTML-escaped**;
//! constructors are expected to pass arguments through
//! [`escape_html`](crate::sanitize::escape_html) exactly once.

use alloc::string::String;
use core::fmt;

/// Command execution error.
///
/// Each variant formats as a single display-ready transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// A required argument was omitted; renders the command's usage hint.
    MissingArgument {
        /// Full usage line, e.g. `Usage: cat <file>`
        usage: &'static str,
    },

    /// No command or alias matches the first token of the line.
    UnknownCommand {
        /// The escaped token as the user typed it
        token: String,
    },

    /// Path did not resolve to a directory (`cd`).
    NoSuchDirectory {
        /// Command name for the message prefix
        command: &'static str,
        /// Escaped path argument as typed
        target: String,
    },

    /// Path did not resolve to a file (`cat`, `open`).
    NoSuchFile {
        /// Command name for the message prefix
        command: &'static str,
        /// Escaped path argument as typed
        target: String,
    },

    /// Listing target is missing or not a directory (`ls`).
    CannotAccess {
        /// Escaped, fully resolved absolute path
        path: String,
    },

    /// File exists but has neither a URL nor content to show (`open`).
    CannotOpen {
        /// Escaped path argument as typed
        target: String,
    },

    /// The resume asset is missing from the tree or carries no URL.
    ResumeUnavailable,

    /// Unexpected failure inside a handler, caught at the dispatch boundary.
    Fault(String),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::MissingArgument { usage } => f.write_str(usage),
            ShellError::UnknownCommand { token } => {
                write!(f, "{}: command not found. Try 'help'.", token)
            }
            ShellError::NoSuchDirectory { command, target } => {
                write!(f, "{}: {}: No such directory", command, target)
            }
            ShellError::NoSuchFile { command, target } => {
                write!(f, "{}: {}: No such file", command, target)
            }
            ShellError::CannotAccess { path } => {
                write!(f, "ls: cannot access '{}': No such directory", path)
            }
            ShellError::CannotOpen { target } => write!(f, "open: cannot open {}", target),
            ShellError::ResumeUnavailable => f.write_str("Resume not available."),
            ShellError::Fault(msg) => write!(f, "Error running command: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = ShellError::UnknownCommand {
            token: "foobar".into(),
        };
        assert_eq!(err.to_string(), "foobar: command not found. Try 'help'.");

        let err = ShellError::NoSuchFile {
            command: "cat",
            target: "nope.txt".into(),
        };
        assert_eq!(err.to_string(), "cat: nope.txt: No such file");

        let err = ShellError::NoSuchDirectory {
            command: "cd",
            target: "missing".into(),
        };
        assert_eq!(err.to_string(), "cd: missing: No such directory");

        let err = ShellError::CannotAccess {
            path: "&#x2F;nope".into(),
        };
        assert_eq!(
            err.to_string(),
            "ls: cannot access '&#x2F;nope': No such directory"
        );

        let err = ShellError::MissingArgument {
            usage: "Usage: cat <file>",
        };
        assert_eq!(err.to_string(), "Usage: cat <file>");

        assert_eq!(
            ShellError::ResumeUnavailable.to_string(),
            "Resume not available."
        );

        let err = ShellError::Fault("boom".into());
        assert_eq!(err.to_string(), "Error running command: boom");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ShellError::ResumeUnavailable, ShellError::ResumeUnavailable);
        assert_ne!(
            ShellError::ResumeUnavailable,
            ShellError::Fault("x".into())
        );
    }
}
