// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Size, height, width};
use miette::IntoDiagnostic;
use std::io::IsTerminal;

pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Get the terminal size.
///
/// # Errors
///
/// Returns an error if the terminal is not available or not a TTY.
pub fn get_size() -> miette::Result<Size> {
    let (columns, rows) = crossterm::terminal::size().into_diagnostic()?;
    Ok(Size::new((width(columns), height(rows))))
}

/// Get the terminal size. If there is a problem, return 80x24.
#[must_use]
pub fn get_size_or_default() -> Size {
    get_size()
        .unwrap_or_else(|_| Size::new((width(DEFAULT_WIDTH), height(DEFAULT_HEIGHT))))
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

impl From<bool> for TTYResult {
    fn from(is_tty: bool) -> Self {
        if is_tty {
            TTYResult::IsInteractive
        } else {
            TTYResult::IsNotInteractive
        }
    }
}

/// Returns [`TTYResult::IsInteractive`] if stdin is a TTY, ie: keystrokes can be read
/// from it.
#[must_use]
pub fn is_stdin_interactive() -> TTYResult { std::io::stdin().is_terminal().into() }

/// Returns [`TTYResult::IsInteractive`] if stdout is a TTY. When output is piped or
/// redirected (`command > file`) cursor movement sequences make no sense.
#[must_use]
pub fn is_stdout_interactive() -> TTYResult { std::io::stdout().is_terminal().into() }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tty_result_from_bool() {
        assert_eq!(TTYResult::from(true), TTYResult::IsInteractive);
        assert_eq!(TTYResult::from(false), TTYResult::IsNotInteractive);
    }

    #[test]
    fn test_size_falls_back_to_default() {
        // Under `cargo test` there may or may not be a terminal.
        let size = get_size_or_default();
        assert!(size.col_width > width(0));
        assert!(size.row_height > height(0));
    }
}
