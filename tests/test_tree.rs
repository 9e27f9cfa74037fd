//! Integration tests for the content tree and path resolver.
//!
//! Validates const initialization of the tree, normalization and relative
//! resolution, and lookup through nested directories.

#[path = "fixtures/mod.rs"]
mod fixtures;

use fixtures::TEST_TREE;
use folio_shell::tree::path::{lookup, normalize, resolve};
use folio_shell::NodeRef;

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_basics() {
    assert_eq!(normalize(""), "/");
    assert_eq!(normalize("/"), "/");
    assert_eq!(normalize("/projects"), "/projects");
    assert_eq!(normalize("projects"), "/projects");
}

#[test]
fn test_normalize_dot_segments() {
    assert_eq!(normalize("/projects/./PulseView"), "/projects/PulseView");
    assert_eq!(normalize("/projects/../tools"), "/tools");
    assert_eq!(normalize("/a/b/../../c"), "/c");
}

#[test]
fn test_normalize_parent_at_root_is_absorbed() {
    assert_eq!(normalize("/.."), "/");
    assert_eq!(normalize("/../../projects"), "/projects");
}

#[test]
fn test_normalize_collapses_slash_runs() {
    assert_eq!(normalize("//projects///PulseView//"), "/projects/PulseView");
}

#[test]
fn test_normalize_is_idempotent() {
    for input in ["/a/../b/./c//", "projects", "/", "../.."] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_resolve_relative_from_cwd() {
    assert_eq!(resolve("/projects", "PulseView"), "/projects/PulseView");
    assert_eq!(resolve("/projects/PulseView", ".."), "/projects");
    assert_eq!(resolve("/projects", "./PulseView/info.txt"), "/projects/PulseView/info.txt");
}

#[test]
fn test_resolve_absolute_ignores_cwd() {
    assert_eq!(resolve("/projects", "/tools"), "/tools");
}

#[test]
fn test_resolve_empty_input_keeps_base() {
    assert_eq!(resolve("/projects", ""), "/projects");
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_lookup_root() {
    let Some(NodeRef::Directory(dir)) = lookup(&TEST_TREE, "/") else {
        panic!("root should resolve to a directory");
    };
    assert_eq!(dir.children.len(), 7);
}

#[test]
fn test_lookup_nested_file() {
    let node = lookup(&TEST_TREE, "/projects/PulseView/info.txt");
    let Some(NodeRef::File(file)) = node else {
        panic!("expected a file");
    };
    assert!(file.content.is_some());
}

#[test]
fn test_lookup_missing_path() {
    assert!(lookup(&TEST_TREE, "/nope").is_none());
    assert!(lookup(&TEST_TREE, "/projects/nope").is_none());
}

#[test]
fn test_lookup_through_file_fails() {
    // about.txt is a file, so it has no children to descend into
    assert!(lookup(&TEST_TREE, "/about.txt/child").is_none());
}

#[test]
fn test_resolve_then_lookup_round_trip() {
    // Every directory reachable by cd resolves back to itself via ".."
    for dir in ["/projects", "/writeups", "/tools", "/certificates"] {
        let down = resolve("/", &dir[1..]);
        assert_eq!(down, *dir);
        let up = resolve(&down, "..");
        assert_eq!(up, "/");
        assert!(matches!(lookup(&TEST_TREE, &down), Some(NodeRef::Directory(_))));
    }
}
