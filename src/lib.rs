//! # folio-shell
//!
//! A simulated command shell for embedding in a web page, driven by a static
//! virtual content tree (bio, projects, certificates, contact info).
//!
//! **Key pieces:**
//! - **Content tree** - Const-initializable directory/file nodes, injected at startup
//! - **Path resolver** - Pure absolute/relative path normalization and lookup
//! - **Sanitizer** - Input stripping and HTML escaping for display safety
//! - **Command set** - A closed enum of commands (`ls`, `cd`, `cat`, `open`,
//!   `download`, `help`, `clear`, `theme`) executing to pure `Response` values
//! - **Session** - Transcript, history recall, and tab completion in the `Shell`
//!
//! The crate has no opinion on layout or styling: it consumes logical key events
//! and emits HTML-fragment strings (transcript lines, an optional modal) plus
//! fire-and-forget UI actions that the embedding page applies.
//!
//! ## Optional Features
//!
//! - `completion` - Tab completion for command names and path segments
//! - `history` - Command history with up/down recall
//!
//! This library is `no_std` compatible (requires `alloc`).

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;
extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod sanitize;

// Content tree data model and path resolution
pub mod tree;

// Shell orchestration: dispatch, commands, history, completion, rendering
pub mod shell;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Configuration
pub use config::{CompactConfig, DefaultConfig, ShellConfig};

// Error types
pub use error::ShellError;

// Tree types
pub use tree::{DirNode, FileNode, Node, NodeRef};

// Sanitizer
pub use sanitize::{escape_html, sanitize_input};

// Shell types
pub use shell::command::{Command, Context, Effect, Response};
pub use shell::history::CommandHistory;
pub use shell::{InputEvent, Shell, UiAction};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
