//! Command set and handlers.
//!
//! Commands form a closed enum rather than a name-to-function registry, so an
//! unknown name is unrepresentable past the parse step and dispatch is a plain
//! match. Each handler is pure: it receives its arguments and a read-only
//! [`Context`] and returns a [`Response`] of output lines plus optional
//! [`Effect`]s; the dispatcher in [`shell`](crate::shell) applies those to the
//! session. Handlers never touch session state directly.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::sanitize::escape_html;
use crate::shell::render;
use crate::tree::{path, DirNode, NodeRef};

/// The closed set of shell commands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show usage text
    Help,
    /// List directory contents
    Ls,
    /// Change current directory
    Cd,
    /// Print a file's content into the transcript
    Cat,
    /// Open a file's URL or show its content in the modal
    Open,
    /// Download the resume asset
    Download,
    /// Empty the transcript
    Clear,
    /// Toggle the visual theme
    Theme,
}

/// Canonical command names, in registration order.
const COMMANDS: &[(&str, Command)] = &[
    ("help", Command::Help),
    ("ls", Command::Ls),
    ("cd", Command::Cd),
    ("cat", Command::Cat),
    ("open", Command::Open),
    ("download", Command::Download),
    ("clear", Command::Clear),
    ("theme", Command::Theme),
];

/// Alias table, resolved before command lookup.
const ALIASES: &[(&str, Command)] = &[
    ("dir", Command::Ls),
    ("read", Command::Cat),
    ("o", Command::Open),
];

impl Command {
    /// All completable names: canonical commands first, then aliases, each in
    /// registration order. Tab completion takes the first prefix match.
    pub const COMPLETION_ORDER: &'static [&'static str] = &[
        "help", "ls", "cd", "cat", "open", "download", "clear", "theme", "dir", "read", "o",
    ];

    /// Resolve a token to a command, checking canonical names then aliases.
    pub fn parse(token: &str) -> Option<Command> {
        COMMANDS
            .iter()
            .chain(ALIASES.iter())
            .find(|(name, _)| *name == token)
            .map(|(_, cmd)| *cmd)
    }

    /// Canonical name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Ls => "ls",
            Command::Cd => "cd",
            Command::Cat => "cat",
            Command::Open => "open",
            Command::Download => "download",
            Command::Clear => "clear",
            Command::Theme => "theme",
        }
    }

    /// Execute this command against the given context.
    ///
    /// Returns the output lines and effects to apply, or a [`ShellError`]
    /// whose `Display` form is the transcript line to show. Errors never
    /// leave session state partially modified.
    pub fn execute<C: ShellConfig>(
        self,
        args: &[&str],
        ctx: &Context<'_>,
    ) -> Result<Response, ShellError> {
        match self {
            Command::Help => Ok(help()),
            Command::Ls => ls(args, ctx),
            Command::Cd => cd(args, ctx),
            Command::Cat => cat(args, ctx),
            Command::Open => open(args, ctx),
            Command::Download => download::<C>(args, ctx),
            Command::Clear => Ok(Response::effect(Effect::ClearTranscript)),
            Command::Theme => {
                Ok(Response::line("Toggled theme.").with_effect(Effect::ToggleTheme))
            }
        }
    }
}

/// Read-only view of the session a handler may consult.
#[derive(Debug, Copy, Clone)]
pub struct Context<'t> {
    /// Root of the content tree
    pub root: &'t DirNode,
    /// Current directory as an absolute path
    pub cwd: &'t str,
}

/// Pure result of executing one command: output lines plus state effects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// HTML-fragment lines to append to the transcript, in order
    pub lines: Vec<String>,

    /// State changes and UI actions for the dispatcher to apply
    pub effects: Vec<Effect>,
}

impl Response {
    /// Response with a single output line.
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: alloc::vec![line.into()],
            effects: Vec::new(),
        }
    }

    /// Response with a single effect and no output.
    pub fn effect(effect: Effect) -> Self {
        Self {
            lines: Vec::new(),
            effects: alloc::vec![effect],
        }
    }

    /// Append another output line (chainable).
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append an effect (chainable).
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// State change or UI action produced by a handler.
///
/// The first three mutate session state inside the dispatcher; `OpenUrl` and
/// `Download` are fire-and-forget actions queued for the embedding page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Set the current directory to this (already validated) absolute path
    ChangeDir(String),

    /// Empty the transcript, including the echo of the triggering line
    ClearTranscript,

    /// Show this HTML fragment in the modal overlay
    ShowModal(String),

    /// Ask the page to open this URL in a new browsing context
    OpenUrl(&'static str),

    /// Ask the page to download an asset
    Download {
        /// Asset URL
        url: &'static str,
        /// Suggested filename
        filename: &'static str,
    },

    /// Flip the visual theme flag
    ToggleTheme,
}

// ============================================================================
// Handlers
// ============================================================================

fn help() -> Response {
    Response::line(format!(
        r#"<span style="color:{}">Available commands:</span> ls, cd, cat, open, download, help, clear, theme"#,
        render::COLOR_MUTED
    ))
    .with_line(
        "Examples: <code>ls</code> <code>cd projects</code> <code>cat about.txt</code> \
         <code>open resume.pdf</code>",
    )
}

fn ls(args: &[&str], ctx: &Context<'_>) -> Result<Response, ShellError> {
    let target = args.first().copied().unwrap_or(".");
    let full = path::resolve(ctx.cwd, target);

    let Some(NodeRef::Directory(dir)) = path::lookup(ctx.root, &full) else {
        return Err(ShellError::CannotAccess {
            path: escape_html(&full),
        });
    };

    let entries: Vec<String> = dir
        .children
        .iter()
        .map(|child| {
            let suffix = if child.is_directory() { "/" } else { "" };
            render::muted_span(&format!("{}{}", escape_html(child.name()), suffix))
        })
        .collect();

    Ok(Response::line(entries.join("  ")))
}

fn cd(args: &[&str], ctx: &Context<'_>) -> Result<Response, ShellError> {
    let target = args.first().copied().unwrap_or("/");
    let full = path::resolve(ctx.cwd, target);

    match path::lookup(ctx.root, &full) {
        Some(NodeRef::Directory(_)) => Ok(Response::effect(Effect::ChangeDir(full))),
        _ => Err(ShellError::NoSuchDirectory {
            command: "cd",
            target: escape_html(target),
        }),
    }
}

fn cat(args: &[&str], ctx: &Context<'_>) -> Result<Response, ShellError> {
    let target = args.first().copied().ok_or(ShellError::MissingArgument {
        usage: "Usage: cat <file>",
    })?;
    let full = path::resolve(ctx.cwd, target);

    let file = path::lookup(ctx.root, &full)
        .and_then(|node| node.as_file())
        .ok_or_else(|| ShellError::NoSuchFile {
            command: "cat",
            target: escape_html(target),
        })?;

    match file.content {
        // Author content is trusted verbatim; only the two-tier trust model
        // keeps intentional links and formatting working
        Some(content) => Ok(Response::line(render::content_block(content))),
        None => Ok(Response::line(format!(
            "<em>{} has no preview. Use open to download/open it.</em>",
            escape_html(target)
        ))),
    }
}

fn open(args: &[&str], ctx: &Context<'_>) -> Result<Response, ShellError> {
    let target = args.first().copied().ok_or(ShellError::MissingArgument {
        usage: "Usage: open <file>",
    })?;
    let full = path::resolve(ctx.cwd, target);

    let file = path::lookup(ctx.root, &full)
        .and_then(|node| node.as_file())
        .ok_or_else(|| ShellError::NoSuchFile {
            command: "open",
            target: escape_html(target),
        })?;

    if file.downloadable || file.url.is_some() {
        let url = file.url.unwrap_or("#");
        Ok(
            Response::line(format!("Opened {} in a new tab.", escape_html(target)))
                .with_effect(Effect::OpenUrl(url)),
        )
    } else if let Some(content) = file.content {
        // The modal shows content escaped, unlike cat
        Ok(Response::effect(Effect::ShowModal(render::modal_pre(
            &escape_html(content),
        ))))
    } else {
        Err(ShellError::CannotOpen {
            target: escape_html(target),
        })
    }
}

fn download<C: ShellConfig>(args: &[&str], ctx: &Context<'_>) -> Result<Response, ShellError> {
    let what = args.join(" ").to_lowercase();
    if what != "resume" && what != "resume.pdf" {
        return Err(ShellError::MissingArgument {
            usage: "Usage: download resume",
        });
    }

    match path::lookup(ctx.root, C::RESUME_PATH) {
        Some(NodeRef::File(file)) => match file.url {
            Some(url) => Ok(Response::line("Downloading resume...").with_effect(
                Effect::Download {
                    url,
                    filename: C::RESUME_FILENAME,
                },
            )),
            None => Err(ShellError::ResumeUnavailable),
        },
        _ => Err(ShellError::ResumeUnavailable),
    }
}
