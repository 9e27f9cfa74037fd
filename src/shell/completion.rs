//! Tab completion for command names and tree paths.
//!
//! When the `completion` feature is disabled, [`complete`] still exists and
//! returns `None`, keeping the caller free of cfg blocks.

#[cfg(feature = "completion")]
mod enabled {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::shell::command::Command;
    use crate::tree::{path, DirNode, NodeRef};

    /// Complete the current input buffer.
    ///
    /// Classification is by whitespace-separated tokens: a single-token
    /// buffer completes against command names and aliases, a multi-token
    /// buffer completes its final token against the children of the
    /// directory it points into. A blank buffer is left alone. Returns the
    /// full replacement buffer (with a trailing space) on a match, `None`
    /// otherwise.
    pub fn complete(buffer: &str, root: &DirNode, cwd: &str) -> Option<String> {
        let tokens: Vec<&str> = buffer.split_whitespace().collect();
        if tokens.is_empty() {
            return None;
        }

        if tokens.len() == 1 {
            let prefix = tokens[0];
            let name = Command::COMPLETION_ORDER
                .iter()
                .find(|candidate| candidate.starts_with(prefix))?;
            return Some(format!("{name} "));
        }

        let last = tokens[tokens.len() - 1];

        // Split the partial path at its final slash, completing only the
        // trailing segment
        let (dir_part, partial) = match last.rfind('/') {
            Some(idx) => (&last[..=idx], &last[idx + 1..]),
            None => ("", last),
        };

        let dir_path = path::resolve(cwd, dir_part);
        let Some(NodeRef::Directory(dir)) = path::lookup(root, &dir_path) else {
            return None;
        };

        let child = dir
            .children
            .iter()
            .find(|child| child.name().starts_with(partial))?;

        let mut out = tokens[..tokens.len() - 1].join(" ");
        out.push(' ');
        out.push_str(child.name());
        out.push(' ');
        Some(out)
    }
}

#[cfg(feature = "completion")]
pub use enabled::complete;

/// No-op completion used when the `completion` feature is disabled.
#[cfg(not(feature = "completion"))]
pub fn complete(
    _buffer: &str,
    _root: &crate::tree::DirNode,
    _cwd: &str,
) -> Option<alloc::string::String> {
    None
}

#[cfg(all(test, feature = "completion"))]
mod tests {
    use super::complete;
    use crate::tree::{DirNode, FileNode, Node};

    const INFO: Node = Node::File(FileNode {
        name: "info.txt",
        content: Some("x"),
        url: None,
        downloadable: false,
    });

    const PROJECTS: Node = Node::Directory(DirNode {
        name: "projects",
        children: &[INFO],
    });

    const ABOUT: Node = Node::File(FileNode {
        name: "about.txt",
        content: Some("x"),
        url: None,
        downloadable: false,
    });

    const ROOT: DirNode = DirNode {
        name: "/",
        children: &[ABOUT, PROJECTS],
    };

    #[test]
    fn test_command_completion_first_match() {
        // "c" hits "cd" before "cat", "clear" and the aliases
        assert_eq!(complete("c", &ROOT, "/").as_deref(), Some("cd "));
        assert_eq!(complete("do", &ROOT, "/").as_deref(), Some("download "));
        assert_eq!(complete("he", &ROOT, "/").as_deref(), Some("help "));
    }

    #[test]
    fn test_alias_completion() {
        assert_eq!(complete("di", &ROOT, "/").as_deref(), Some("dir "));
        assert_eq!(complete("re", &ROOT, "/").as_deref(), Some("read "));
    }

    #[test]
    fn test_blank_buffer_is_left_unchanged() {
        assert_eq!(complete("", &ROOT, "/"), None);
        assert_eq!(complete("   ", &ROOT, "/"), None);
    }

    #[test]
    fn test_single_token_with_trailing_space_completes_command() {
        // "cd " is still one token, so it completes against command names
        assert_eq!(complete("cd ", &ROOT, "/").as_deref(), Some("cd "));
        assert_eq!(complete("ca ", &ROOT, "/").as_deref(), Some("cat "));
    }

    #[test]
    fn test_no_command_match() {
        assert_eq!(complete("zz", &ROOT, "/"), None);
    }

    #[test]
    fn test_path_completion() {
        assert_eq!(complete("cd pro", &ROOT, "/").as_deref(), Some("cd projects "));
        assert_eq!(complete("cat ab", &ROOT, "/").as_deref(), Some("cat about.txt "));
    }

    #[test]
    fn test_path_completion_with_directory_prefix() {
        // The replacement carries only the bare child name
        assert_eq!(
            complete("cat projects/in", &ROOT, "/").as_deref(),
            Some("cat info.txt ")
        );
    }

    #[test]
    fn test_path_completion_relative_to_cwd() {
        assert_eq!(
            complete("cat in", &ROOT, "/projects").as_deref(),
            Some("cat info.txt ")
        );
    }

    #[test]
    fn test_no_path_match() {
        assert_eq!(complete("cat zz", &ROOT, "/"), None);
        assert_eq!(complete("cat nope/x", &ROOT, "/"), None);
    }
}
