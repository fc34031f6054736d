// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineState;
use crate::{CRLF, CsiSequence, EraseDisplayMode, col, ok};
use std::{fmt::Write as _,
          io::{self, Write}};

/// Everything one render pass produces. It is written to the terminal with a single
/// call in [`RenderPass::flush_to`], so the terminal never sees a half drawn line and
/// tests can count passes by counting writes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderPass {
    acc: String,
}

impl RenderPass {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push_str(&mut self, text: &str) { self.acc.push_str(text); }

    /// Relative moves with a count of zero are skipped.
    pub fn push_csi(&mut self, sequence: CsiSequence) {
        if let Some(sequence) = sequence.non_zero() {
            // Writing to a String can't fail.
            let _unused = write!(self.acc, "{sequence}");
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.acc.is_empty() }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.acc }

    /// Write the whole pass with one call and flush. An empty pass writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the terminal fails.
    pub fn flush_to(&self, term: &mut dyn Write) -> io::Result<()> {
        if self.is_empty() {
            return ok!();
        }
        term.write_all(self.acc.as_bytes())?;
        term.flush()?;
        ok!()
    }
}

impl LineState {
    /// Redraw the prompt and the line from the top, and put the cursor back:
    /// 1. Move up to the first row of the prompt, and to column 0.
    /// 2. Erase everything below.
    /// 3. Print prompt and line. If that ends exactly at the right edge, print a space so
    ///    the terminal actually wraps to the next row.
    /// 4. Move the cursor to its column, then up if it is not on the last row.
    pub fn refresh_line(&mut self, pass: &mut RenderPass) {
        let end_pos = self.end_pos();
        let cursor_pos = self.cursor_pos();

        pass.push_csi(CsiSequence::CursorUp(crate::u16_saturating(self.prev_rows)));
        pass.push_csi(CsiSequence::CursorHorizontalAbsolute(1));
        pass.push_csi(CsiSequence::EraseDisplay(EraseDisplayMode::FromCursorToEnd));

        pass.push_str(&self.prompt);
        pass.push_str(&self.line);
        if end_pos.cols == 0 {
            pass.push_str(" ");
        }

        pass.push_csi(CsiSequence::CursorHorizontalAbsolute(
            col(cursor_pos.cols).as_one_based(),
        ));
        pass.push_csi(CsiSequence::CursorUp(crate::u16_saturating(
            end_pos.rows.saturating_sub(cursor_pos.rows),
        )));

        self.prev_rows = cursor_pos.rows;
    }

    /// Move the cursor to byte index `new_cursor`. On the same row this is a single
    /// column move, otherwise the line is refreshed.
    pub fn move_cursor_to(&mut self, new_cursor: usize, pass: &mut RenderPass) {
        if new_cursor == self.line_cursor {
            return;
        }
        let old_pos = self.cursor_pos();
        self.line_cursor = new_cursor;
        let new_pos = self.cursor_pos();

        if old_pos.rows == new_pos.rows {
            if old_pos.cols != new_pos.cols {
                pass.push_csi(CsiSequence::CursorHorizontalAbsolute(
                    col(new_pos.cols).as_one_based(),
                ));
            }
        } else {
            self.refresh_line(pass);
        }
    }

    /// Insert `text` at the cursor. Typing at the end of the line only echoes the text,
    /// unless that wraps to a new row.
    pub fn insert_str(&mut self, text: &str, pass: &mut RenderPass) {
        if text.is_empty() {
            return;
        }

        if !self.is_cursor_at_end() {
            self.line.insert_str(self.line_cursor, text);
            self.line_cursor += text.len();
            self.refresh_line(pass);
            return;
        }

        let old_pos = self.cursor_pos();
        self.line.push_str(text);
        self.line_cursor += text.len();
        let new_pos = self.cursor_pos();

        if old_pos.rows < new_pos.rows {
            self.refresh_line(pass);
        } else {
            pass.push_str(text);
        }
    }

    /// Remove the bytes in `start..end` and refresh. The cursor lands on `start`.
    pub fn remove_range(&mut self, start: usize, end: usize, pass: &mut RenderPass) {
        if start >= end {
            return;
        }
        self.line.replace_range(start..end, "");
        self.line_cursor = start;
        self.refresh_line(pass);
    }

    /// Put the cursor on the last row of the input, so that whatever is printed next
    /// doesn't overwrite it.
    pub fn move_below_input(&self, pass: &mut RenderPass) {
        let end_pos = self.end_pos();
        let cursor_pos = self.cursor_pos();
        pass.push_csi(CsiSequence::CursorDown(crate::u16_saturating(
            end_pos.rows.saturating_sub(cursor_pos.rows),
        )));
    }

    /// Move past the end of the input and start a new row.
    pub fn finish_line(&mut self, pass: &mut RenderPass) {
        self.move_cursor_to(self.line.len(), pass);
        pass.push_str(CRLF);
    }

    /// Erase the prompt and the input, leaving the cursor where the prompt started.
    pub fn erase_line(&mut self, pass: &mut RenderPass) {
        pass.push_csi(CsiSequence::CursorUp(crate::u16_saturating(self.prev_rows)));
        pass.push_csi(CsiSequence::CursorHorizontalAbsolute(1));
        pass.push_csi(CsiSequence::EraseDisplay(EraseDisplayMode::FromCursorToEnd));
        self.prev_rows = 0;
    }
}
