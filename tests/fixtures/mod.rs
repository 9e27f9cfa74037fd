//! Test fixtures shared across integration tests.
//!
//! `TEST_TREE` is a small portfolio-shaped content tree: files with inline
//! content, files backed by URLs, and nested directories, so path resolution
//! and every command variant can be exercised against one fixture.

#![allow(dead_code)]

use folio_shell::{DirNode, FileNode, Node};

const ABOUT: Node = Node::File(FileNode {
    name: "about.txt",
    content: Some("Hi, I build and break things on the web."),
    url: None,
    downloadable: false,
});

const RESUME: Node = Node::File(FileNode {
    name: "resume.pdf",
    content: None,
    url: Some("/assets/resume.pdf"),
    downloadable: true,
});

const PULSEVIEW_INFO: Node = Node::File(FileNode {
    name: "info.txt",
    content: Some(
        "<p><strong>Project:</strong> PulseView - REST API monitoring extension</p>\n\
         <p><a href=\"https://example.com/pulseview\">View source</a></p>",
    ),
    url: None,
    downloadable: false,
});

const PULSEVIEW: Node = Node::Directory(DirNode {
    name: "PulseView",
    children: &[PULSEVIEW_INFO],
});

const PROJECTS: Node = Node::Directory(DirNode {
    name: "projects",
    children: &[PULSEVIEW],
});

const WRITEUP: Node = Node::File(FileNode {
    name: "writeup.txt",
    content: Some("Full walkthrough of the lab machine, recon through post-exploitation."),
    url: None,
    downloadable: false,
});

const LAB_WALKTHROUGH: Node = Node::Directory(DirNode {
    name: "lab_walkthrough",
    children: &[WRITEUP],
});

const WRITEUPS: Node = Node::Directory(DirNode {
    name: "writeups",
    children: &[LAB_WALKTHROUGH],
});

const TOOLS_TXT: Node = Node::File(FileNode {
    name: "tools.txt",
    content: Some("<strong>Languages</strong><div>Rust, Python, C</div>"),
    url: None,
    downloadable: false,
});

const TOOLS: Node = Node::Directory(DirNode {
    name: "tools",
    children: &[TOOLS_TXT],
});

const CERT_NETWORKING: Node = Node::File(FileNode {
    name: "networking_basics.pdf",
    content: None,
    url: Some("/assets/networking_basics.pdf"),
    downloadable: true,
});

const CERT_INFO: Node = Node::File(FileNode {
    name: "info.txt",
    content: Some("Certificates earned so far."),
    url: None,
    downloadable: false,
});

const CERTIFICATES: Node = Node::Directory(DirNode {
    name: "certificates",
    children: &[CERT_NETWORKING, CERT_INFO],
});

const CONTACT: Node = Node::File(FileNode {
    name: "contact.txt",
    content: Some("email: someone@example.com"),
    url: None,
    downloadable: false,
});

/// Root directory used by the integration tests. Child order is the display
/// order, so tests that assert ls output depend on it.
pub const TEST_TREE: DirNode = DirNode {
    name: "/",
    children: &[
        ABOUT,
        RESUME,
        PROJECTS,
        WRITEUPS,
        TOOLS,
        CERTIFICATES,
        CONTACT,
    ],
};
