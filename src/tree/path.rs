//! Path normalization, resolution, and tree lookup.
//!
//! Unix-style path handling with support for absolute and relative paths,
//! parent navigation (`..`), and current directory (`.`), deliberately
//! permissive: popping `..` past the root stays at the root, trailing and
//! repeated slashes are insignificant, and none of these functions can fail.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_shell::tree::path;
//!
//! assert_eq!(path::resolve("/projects", "../tools"), "/tools");
//! assert_eq!(path::resolve("/", "a//b/./c/"), "/a/b/c");
//! assert_eq!(path::normalize("/a/../../.."), "/");
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use super::{DirNode, NodeRef};

/// Normalize a path string to a canonical absolute path.
///
/// Splits on `/`, drops empty and `.` segments, and pops the last retained
/// segment for each `..` (a no-op when already at the root). The result always
/// carries exactly one leading `/` and no trailing slash (except for the root
/// itself, which is `"/"`).
///
/// Normalization is idempotent: `normalize(normalize(p)) == normalize(p)`.
pub fn normalize(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // Inert at root
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    let mut out = String::from("/");
    out.push_str(&stack.join("/"));
    out
}

/// Resolve `input` against `base`, returning a normalized absolute path.
///
/// - Empty `input` returns `base` unchanged.
/// - `input` starting with `/` is treated as absolute.
/// - Anything else is joined onto `base` and normalized.
///
/// `base` is expected to be an absolute path (the shell's current directory
/// always is).
pub fn resolve(base: &str, input: &str) -> String {
    if input.is_empty() {
        return String::from(base);
    }

    if input.starts_with('/') {
        normalize(input)
    } else {
        let mut joined = String::from(base.trim_end_matches('/'));
        joined.push('/');
        joined.push_str(input);
        normalize(&joined)
    }
}

/// Look up the node at a normalized absolute path.
///
/// Starts at `root` and descends one child per segment. Returns `None` if any
/// intermediate node is not a directory or a segment is absent. The empty
/// path (or `"/"`) yields the root directory itself.
pub fn lookup<'t>(root: &'t DirNode, path: &str) -> Option<NodeRef<'t>> {
    let mut current = NodeRef::Directory(root);

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let dir = current.as_directory()?;
        current = dir.find_child(segment)?.as_ref();
    }

    Some(current)
}
