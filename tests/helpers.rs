//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

use fixtures::TEST_TREE;
use folio_shell::shell::{InputEvent, Shell};
use folio_shell::DefaultConfig;

/// Create an activated shell over the shared fixture tree.
pub fn create_test_shell() -> Shell<'static, DefaultConfig> {
    let mut shell = Shell::new(&TEST_TREE);
    shell.activate();
    shell
}

/// Type a line and press Enter.
pub fn submit(shell: &mut Shell<'static, DefaultConfig>, line: &str) {
    shell.set_input(line);
    shell.handle_event(InputEvent::Enter);
}

/// Last transcript line, panicking if the transcript is empty.
pub fn last_line<'a>(shell: &'a Shell<'static, DefaultConfig>) -> &'a str {
    shell
        .transcript()
        .last()
        .expect("transcript should not be empty")
}

/// Assert the last transcript line contains every expected fragment.
pub fn assert_last_contains_all(shell: &Shell<'static, DefaultConfig>, expected: &[&str]) {
    let line = last_line(shell);
    for fragment in expected {
        assert!(
            line.contains(fragment),
            "expected {fragment:?} in last line: {line:?}"
        );
    }
}
