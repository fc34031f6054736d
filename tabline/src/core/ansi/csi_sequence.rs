// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI sequence builder for the cursor operations used by the line editor.

use super::constants::{CHA_CURSOR_COLUMN, CSI_START, CUD_CURSOR_DOWN, CUP_CURSOR_POSITION,
                       CUU_CURSOR_UP, ED_ERASE_ALL, ED_ERASE_DISPLAY, ED_ERASE_TO_END};
use std::fmt::{Display, Formatter, Result};

/// Which part of the display an [`CsiSequence::EraseDisplay`] clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseDisplayMode {
    FromCursorToEnd,
    EntireScreen,
}

impl EraseDisplayMode {
    #[must_use]
    pub fn as_param(&self) -> u16 {
        match self {
            EraseDisplayMode::FromCursorToEnd => ED_ERASE_TO_END,
            EraseDisplayMode::EntireScreen => ED_ERASE_ALL,
        }
    }
}

/// Builder for CSI (Control Sequence Introducer) sequences. Use [`ToString`] (or
/// `write!`) to serialize it into the escape code.
///
/// ```
/// use tabline::{CsiSequence, EraseDisplayMode};
///
/// assert_eq!(CsiSequence::CursorHorizontalAbsolute(4).to_string(), "\x1b[4G");
/// assert_eq!(
///     CsiSequence::EraseDisplay(EraseDisplayMode::FromCursorToEnd).to_string(),
///     "\x1b[0J"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// Cursor Up (CUU) - ESC [ n A
    CursorUp(u16),
    /// Cursor Down (CUD) - ESC [ n B
    CursorDown(u16),
    /// Cursor Horizontal Absolute (CHA) - ESC [ n G, `n` is 1 based.
    CursorHorizontalAbsolute(u16),
    /// Cursor Position (CUP) - ESC [ row ; col H, both 1 based.
    CursorPosition { row: u16, col: u16 },
    /// Erase Display (ED) - ESC [ n J
    EraseDisplay(EraseDisplayMode),
}

impl CsiSequence {
    /// Relative moves with a count of zero are no-ops that some terminals interpret as
    /// a count of one. Returns [None] for those so callers can skip them.
    #[must_use]
    pub fn non_zero(self) -> Option<Self> {
        match self {
            CsiSequence::CursorUp(0) | CsiSequence::CursorDown(0) => None,
            _ => Some(self),
        }
    }
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(CSI_START)?;
        match self {
            CsiSequence::CursorUp(n) => write!(f, "{n}{CUU_CURSOR_UP}"),
            CsiSequence::CursorDown(n) => write!(f, "{n}{CUD_CURSOR_DOWN}"),
            CsiSequence::CursorHorizontalAbsolute(n) => {
                write!(f, "{n}{CHA_CURSOR_COLUMN}")
            }
            CsiSequence::CursorPosition { row, col } => {
                write!(f, "{row};{col}{CUP_CURSOR_POSITION}")
            }
            CsiSequence::EraseDisplay(mode) => {
                write!(f, "{}{ED_ERASE_DISPLAY}", mode.as_param())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves() {
        assert_eq!(CsiSequence::CursorUp(3).to_string(), "\x1b[3A");
        assert_eq!(CsiSequence::CursorDown(1).to_string(), "\x1b[1B");
        assert_eq!(CsiSequence::CursorHorizontalAbsolute(1).to_string(), "\x1b[1G");
        assert_eq!(
            CsiSequence::CursorPosition { row: 1, col: 1 }.to_string(),
            "\x1b[1;1H"
        );
    }

    #[test]
    fn test_erase_display() {
        assert_eq!(
            CsiSequence::EraseDisplay(EraseDisplayMode::FromCursorToEnd).to_string(),
            "\x1b[0J"
        );
        assert_eq!(
            CsiSequence::EraseDisplay(EraseDisplayMode::EntireScreen).to_string(),
            "\x1b[2J"
        );
    }

    #[test]
    fn test_zero_count_relative_moves_are_skipped() {
        assert_eq!(CsiSequence::CursorUp(0).non_zero(), None);
        assert_eq!(CsiSequence::CursorDown(0).non_zero(), None);
        assert_eq!(
            CsiSequence::CursorUp(2).non_zero(),
            Some(CsiSequence::CursorUp(2))
        );
    }
}
