// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DisplayPos, Size, display_pos};

/// This struct actually handles the line editing, and rendering. This works hand in hand
/// with the [`crate::Readline`] to make sure that the line, the cursor and the
/// completion list are rendered correctly for any Unicode input.
#[derive(Debug)]
pub struct LineState {
    /// Unicode line.
    pub line: String,

    /// Byte index of the cursor in `line`. Always on a grapheme cluster boundary.
    pub line_cursor: usize,

    /// May contain ANSI escape sequences, they take up no columns.
    pub prompt: String,

    /// Terminal dimensions: `col_width` (columns) and `row_height` (rows).
    pub term_size: Size,

    /// Number of rows the cursor was below the first row of the prompt after the last
    /// refresh. The next refresh moves up this many rows to redraw from the top.
    pub prev_rows: usize,

    /// Was the previous key the trigger key (`Tab`)?
    pub last_key_was_tab: bool,

    /// After pressing enter, should we print the line just submitted?
    pub should_print_line_on_enter: bool,

    /// After pressing `control_c` should we print the line just cancelled?
    pub should_print_line_on_control_c: bool,

    /// Print the candidate list on the first `Tab`, instead of the second one.
    pub show_completions_on_first_tab: bool,
}

/// The part of [`LineState`] a completion result is computed from. Used to detect
/// results that no longer match the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSnapshot {
    pub line: String,
    pub line_cursor: usize,
}

impl LineState {
    #[must_use]
    pub fn new(prompt: String, term_size: Size) -> Self {
        Self {
            line: String::new(),
            line_cursor: 0,
            prompt,
            term_size,
            prev_rows: 0,
            last_key_was_tab: false,
            should_print_line_on_enter: true,
            should_print_line_on_control_c: false,
            show_completions_on_first_tab: false,
        }
    }

    #[must_use]
    pub fn line_before_cursor(&self) -> &str { &self.line[..self.line_cursor] }

    #[must_use]
    pub fn is_cursor_at_end(&self) -> bool { self.line_cursor == self.line.len() }

    /// Where the cursor is, relative to the start of the prompt.
    #[must_use]
    pub fn cursor_pos(&self) -> DisplayPos {
        let text = format!("{}{}", self.prompt, self.line_before_cursor());
        display_pos(&text, self.term_size.col_width)
    }

    /// Where the end of the input is, relative to the start of the prompt.
    #[must_use]
    pub fn end_pos(&self) -> DisplayPos {
        let text = format!("{}{}", self.prompt, self.line);
        display_pos(&text, self.term_size.col_width)
    }

    #[must_use]
    pub fn snapshot(&self) -> LineSnapshot {
        LineSnapshot {
            line: self.line.clone(),
            line_cursor: self.line_cursor,
        }
    }

    /// Clear the input. The next render starts on a fresh row.
    pub fn take_line(&mut self) -> String {
        self.line_cursor = 0;
        self.prev_rows = 0;
        std::mem::take(&mut self.line)
    }
}
