//! Shell session: input handling, dispatch, and transcript state.
//!
//! [`Shell`] owns everything the embedding page needs to render one terminal:
//! the transcript of HTML-fragment lines, the live input buffer, the current
//! directory, the modal overlay, and the theme flag. The page feeds it
//! [`InputEvent`]s and reads state back through accessors; outward actions
//! (opening a URL, downloading a file) are queued as [`UiAction`]s and
//! drained by the page after each event.

pub mod command;
pub mod completion;
pub mod history;
pub mod render;

use core::fmt;
use core::marker::PhantomData;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::sanitize::{escape_html, sanitize_input};
use crate::shell::command::{Command, Context, Effect, Response};
use crate::shell::history::CommandHistory;
use crate::tree::DirNode;

/// A logical key event, already decoded by the embedding page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Printable character typed into the buffer
    Char(char),
    /// Delete the character before the caret
    Backspace,
    /// Submit the current buffer
    Enter,
    /// Request completion of the current buffer
    Tab,
    /// Recall the previous history entry
    Up,
    /// Recall the next history entry
    Down,
}

/// Outward action the embedding page must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Open this URL in a new browsing context
    OpenUrl(&'static str),
    /// Download an asset
    Download {
        /// Asset URL
        url: &'static str,
        /// Suggested filename
        filename: &'static str,
    },
}

/// One terminal session over a content tree.
pub struct Shell<'tree, C: ShellConfig> {
    root: &'tree DirNode,
    cwd: String,
    transcript: Vec<String>,
    modal: Option<String>,
    alt_theme: bool,
    input: String,
    // TODO: use C::HISTORY_SIZE once generic parameters are allowed in
    // const expressions
    history: CommandHistory<32>,
    actions: Vec<UiAction>,
    _config: PhantomData<C>,
}

impl<C: ShellConfig> fmt::Debug for Shell<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("cwd", &self.cwd)
            .field("transcript_len", &self.transcript.len())
            .field("modal", &self.modal.is_some())
            .field("alt_theme", &self.alt_theme)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

impl<'tree, C: ShellConfig> Shell<'tree, C> {
    /// Create a session rooted at the given tree, starting at `/`.
    pub fn new(root: &'tree DirNode) -> Self {
        Self {
            root,
            cwd: String::from("/"),
            transcript: Vec::new(),
            modal: None,
            alt_theme: false,
            input: String::new(),
            history: CommandHistory::new(),
            actions: Vec::new(),
            _config: PhantomData,
        }
    }

    /// Push the welcome banner. Call once, when the terminal first becomes
    /// visible.
    pub fn activate(&mut self) {
        self.transcript.push(C::MSG_WELCOME.to_string());
    }

    /// Replace the input buffer, truncating to the configured limit.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.chars().take(C::MAX_INPUT).collect();
    }

    /// Feed one decoded key event into the session.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Char(c) => {
                if self.input.chars().count() < C::MAX_INPUT {
                    self.input.push(c);
                }
            }
            InputEvent::Backspace => {
                self.input.pop();
            }
            InputEvent::Enter => self.submit(),
            InputEvent::Tab => {
                if let Some(completed) = completion::complete(&self.input, self.root, &self.cwd) {
                    self.set_input(&completed);
                }
            }
            InputEvent::Up => {
                if let Some(entry) = self.history.recall_previous() {
                    self.input = entry.to_string();
                }
            }
            InputEvent::Down => match self.history.recall_next() {
                Some(entry) => self.input = entry.to_string(),
                None => self.input.clear(),
            },
        }
    }

    /// Submit the current buffer as a command line.
    fn submit(&mut self) {
        let raw = self.input.trim().to_string();
        self.input.clear();
        if raw.is_empty() {
            return;
        }
        self.history.push(&raw);
        self.dispatch(&raw);
    }

    /// Echo the line, run the command, apply its response.
    fn dispatch(&mut self, raw: &str) {
        let clean = sanitize_input(raw, C::MAX_INPUT);

        // The echo shows what was typed, before any command runs, so even a
        // failing or clearing command leaves an honest record up to that point
        self.transcript.push(render::prompt_echo(
            C::PROMPT_LABEL,
            &escape_html(&self.cwd),
            &escape_html(raw),
        ));

        let mut tokens = clean.split_whitespace();
        let cmd_tok = tokens.next().unwrap_or("");
        let args: Vec<&str> = tokens.take(C::MAX_ARGS).collect();

        let Some(cmd) = Command::parse(cmd_tok) else {
            let err = ShellError::UnknownCommand {
                token: escape_html(cmd_tok),
            };
            self.transcript.push(err.to_string());
            return;
        };

        log::debug!("dispatch: {} ({} args) in {}", cmd.name(), args.len(), self.cwd);

        let ctx = Context {
            root: self.root,
            cwd: &self.cwd,
        };
        match cmd.execute::<C>(&args, &ctx) {
            Ok(response) => self.apply(response),
            Err(err) => {
                log::warn!("{}: {}", cmd.name(), err);
                self.transcript.push(err.to_string());
            }
        }
    }

    fn apply(&mut self, response: Response) {
        self.transcript.extend(response.lines);
        for effect in response.effects {
            match effect {
                Effect::ChangeDir(path) => self.cwd = path,
                Effect::ClearTranscript => self.transcript.clear(),
                Effect::ShowModal(html) => self.modal = Some(html),
                Effect::OpenUrl(url) => self.actions.push(UiAction::OpenUrl(url)),
                Effect::Download { url, filename } => {
                    self.actions.push(UiAction::Download { url, filename });
                }
                Effect::ToggleTheme => self.alt_theme = !self.alt_theme,
            }
        }
    }

    /// Transcript lines, oldest first. Each line is an HTML fragment.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Modal overlay content, if one is open.
    pub fn modal(&self) -> Option<&str> {
        self.modal.as_deref()
    }

    /// Dismiss the modal overlay.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Current directory as an absolute path.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the alternate theme is active.
    pub fn alt_theme(&self) -> bool {
        self.alt_theme
    }

    /// Take the queued outward actions, leaving the queue empty.
    pub fn drain_actions(&mut self) -> Vec<UiAction> {
        core::mem::take(&mut self.actions)
    }
}
