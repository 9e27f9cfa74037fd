//! Command history with up/down recall navigation.
//!
//! Uses stub type pattern - struct always exists, but behavior is feature-gated.
//!
//! The recall cursor follows the session model: submitting a line appends it
//! and parks the cursor one past the newest entry; Up walks toward the oldest
//! entry and sticks there; Down walks back toward the newest and finally lands
//! on "past the end", which the shell shows as an empty input buffer.

#![cfg_attr(not(feature = "history"), allow(unused_variables))]

use alloc::string::String;

#[cfg(not(feature = "history"))]
use core::marker::PhantomData;

/// Command history ring with a recall cursor.
///
/// When the `history` feature is enabled, stores the last `N` submitted lines,
/// evicting the oldest when full. When disabled, zero-size stub that no-ops
/// all operations.
#[derive(Debug)]
pub struct CommandHistory<const N: usize> {
    #[cfg(feature = "history")]
    entries: heapless::Vec<String, N>,

    /// Recall position; `entries.len()` means "past the newest" (empty buffer)
    #[cfg(feature = "history")]
    cursor: usize,

    #[cfg(not(feature = "history"))]
    _phantom: PhantomData<[(); N]>,
}

impl<const N: usize> CommandHistory<N> {
    /// Create new, empty command history.
    #[cfg(feature = "history")]
    pub fn new() -> Self {
        Self {
            entries: heapless::Vec::new(),
            cursor: 0,
        }
    }

    /// Create new command history (stub version).
    #[cfg(not(feature = "history"))]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Record a submitted line and reset the cursor to one past the newest.
    ///
    /// Empty lines are never recorded. When the ring is full the oldest entry
    /// is evicted first.
    #[cfg(feature = "history")]
    pub fn push(&mut self, line: &str) {
        if line.is_empty() {
            self.cursor = self.entries.len();
            return;
        }

        if self.entries.is_full() {
            self.entries.remove(0);
        }
        let _ = self.entries.push(String::from(line));
        self.cursor = self.entries.len();
    }

    /// Record a submitted line (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn push(&mut self, line: &str) {
        // No-op
    }

    /// Recall the previous (older) entry, if the cursor can move backward.
    ///
    /// Returns `None` at the oldest entry; repeated calls stay put there.
    #[cfg(feature = "history")]
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            None
        }
    }

    /// Recall the previous entry (stub version - returns None).
    #[cfg(not(feature = "history"))]
    pub fn recall_previous(&mut self) -> Option<&str> {
        None
    }

    /// Recall the next (newer) entry.
    ///
    /// Returns `Some(entry)` while the cursor is before the newest entry;
    /// returns `None` once it lands past the end, which callers render as an
    /// empty input buffer.
    #[cfg(feature = "history")]
    pub fn recall_next(&mut self) -> Option<&str> {
        if !self.entries.is_empty() && self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            self.cursor = self.entries.len();
            None
        }
    }

    /// Recall the next entry (stub version - returns None).
    #[cfg(not(feature = "history"))]
    pub fn recall_next(&mut self) -> Option<&str> {
        None
    }

    /// Number of recorded entries.
    #[cfg(feature = "history")]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of recorded entries (stub version - always zero).
    #[cfg(not(feature = "history"))]
    pub fn len(&self) -> usize {
        0
    }

    /// Whether no entries are recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const N: usize> Default for CommandHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}
