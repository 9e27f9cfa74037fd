//! Virtual content tree data structures.
//!
//! The tree is an immutable, nested mapping of directories and files supplied
//! once at shell construction. All nodes are const-initializable and can live
//! in static data; the shell only ever reads them.
//!
//! Child order is significant: listings and tab completion iterate children in
//! declaration (insertion) order, which keeps completion deterministic.

// Sub-modules
pub mod path;

/// File node payload.
///
/// `content` is an author-supplied HTML fragment trusted for verbatim display;
/// it is not user input and is never escaped by `cat`. `url` points at an
/// external or static asset; `downloadable` marks assets the browser should
/// save rather than render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// File name, unique within its directory; never contains `/`
    pub name: &'static str,

    /// Trusted HTML fragment shown by `cat`, if any
    pub content: Option<&'static str>,

    /// External or static-asset reference used by `open`/`download`, if any
    pub url: Option<&'static str>,

    /// Whether `open` should treat the file as a download target
    pub downloadable: bool,
}

/// Directory node containing child nodes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    /// Directory name; the root is conventionally named `/`
    pub name: &'static str,

    /// Child nodes, iterated in declaration order
    pub children: &'static [Node],
}

/// Tree node (file or directory).
///
/// A node's variant is fixed at construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// File leaf
    File(FileNode),

    /// Directory with children
    Directory(DirNode),
}

/// Borrowed view of a resolved node.
///
/// [`path::lookup`] returns this rather than `&Node` so the root directory,
/// which is not wrapped in a `Node`, can be yielded uniformly.
#[derive(Debug, Copy, Clone)]
pub enum NodeRef<'t> {
    /// Resolved to a file
    File(&'t FileNode),

    /// Resolved to a directory
    Directory(&'t DirNode),
}

impl Node {
    /// Get node name.
    pub fn name(&self) -> &'static str {
        match self {
            Node::File(file) => file.name,
            Node::Directory(dir) => dir.name,
        }
    }

    /// Check if this node is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// Borrowed view of this node.
    pub fn as_ref(&self) -> NodeRef<'_> {
        match self {
            Node::File(file) => NodeRef::File(file),
            Node::Directory(dir) => NodeRef::Directory(dir),
        }
    }
}

impl DirNode {
    /// Find child node by name.
    ///
    /// Returns `None` if no child has that name.
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name() == name)
    }
}

impl<'t> NodeRef<'t> {
    /// Check if this resolved node is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, NodeRef::Directory(_))
    }

    /// The file behind this reference, if it is one.
    pub fn as_file(&self) -> Option<&'t FileNode> {
        match self {
            NodeRef::File(file) => Some(file),
            NodeRef::Directory(_) => None,
        }
    }

    /// The directory behind this reference, if it is one.
    pub fn as_directory(&self) -> Option<&'t DirNode> {
        match self {
            NodeRef::Directory(dir) => Some(dir),
            NodeRef::File(_) => None,
        }
    }
}
