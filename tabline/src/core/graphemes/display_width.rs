// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColWidth, width};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Tab stops are every 8 columns.
pub const TAB_SIZE: usize = 8;

/// Widest a single grapheme cluster can be on the terminal.
pub const MAX_GRAPHEME_WIDTH: usize = 2;

/// Display width of a single `char`:
/// - East Asian wide characters and emoji are `2`.
/// - Combining marks, zero width characters and control characters are `0`.
/// - Everything else is `1`.
#[must_use]
pub fn char_width(c: char) -> ColWidth {
    if c.is_control() {
        return width(0);
    }
    width(UnicodeWidthChar::width(c).unwrap_or(0).min(MAX_GRAPHEME_WIDTH))
}

/// Display width of one grapheme cluster. Multi code point clusters (ZWJ emoji
/// sequences, a base character plus combining marks, a supplementary plane letter)
/// occupy a single cell on the terminal, so the sum is clamped to
/// [`MAX_GRAPHEME_WIDTH`].
#[must_use]
pub fn grapheme_width(grapheme: &str) -> ColWidth {
    let sum: usize = grapheme.chars().map(|c| char_width(c).as_usize()).sum();
    width(sum.min(MAX_GRAPHEME_WIDTH))
}

/// Display width of a string: the sum of the widths of its grapheme clusters.
///
/// ```
/// use tabline::{str_width, width};
///
/// assert_eq!(str_width("abc"), width(3));
/// assert_eq!(str_width("あa"), width(3));
/// assert_eq!(str_width("🐕🐕"), width(4));
/// assert_eq!(str_width("𐐷"), width(1));
/// ```
#[must_use]
pub fn str_width(text: &str) -> ColWidth {
    let sum: usize = text
        .graphemes(true)
        .map(|g| grapheme_width(g).as_usize())
        .sum();
    width(sum)
}

/// Display width of text that may carry ANSI escape sequences (eg: a colored prompt).
#[must_use]
pub fn strip_ansi_width(text: &str) -> ColWidth {
    let stripped = strip_ansi::strip_ansi(text);
    str_width(stripped.as_ref())
}

/// Where the end of some text lands on a terminal that is `columns` wide, if printed
/// starting at column 0. `rows` is the number of rows below the starting row, `cols` is
/// the 0 based column.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DisplayPos {
    pub rows: usize,
    pub cols: usize,
}

/// Compute the [`DisplayPos`] of the end of `text` on a terminal that is `columns` wide.
///
/// - ANSI escape sequences are stripped first, they occupy no columns.
/// - `\n` moves to the start of the next row (a row that exactly fills the width still
///   counts once).
/// - `\t` advances to the next multiple of [`TAB_SIZE`].
/// - A wide grapheme that would straddle the right edge is pushed to the next row, which
///   leaves one blank column behind.
///
/// A `columns` value of `0` means "unbounded": text only wraps on `\n`.
#[must_use]
pub fn display_pos(text: &str, columns: ColWidth) -> DisplayPos {
    let stripped = strip_ansi::strip_ansi(text);
    let col = columns.as_usize();
    let mut offset = 0_usize;
    let mut rows = 0_usize;

    for grapheme in stripped.graphemes(true) {
        match grapheme {
            "\n" | "\r\n" => {
                rows += if col == 0 { 1 } else { offset.div_ceil(col).max(1) };
                offset = 0;
            }
            "\t" => offset += TAB_SIZE - (offset % TAB_SIZE),
            _ => {
                let cell_width = grapheme_width(grapheme).as_usize();
                if cell_width == MAX_GRAPHEME_WIDTH && col != 0 && (offset + 1) % col == 0 {
                    offset += 1;
                }
                offset += cell_width;
            }
        }
    }

    if col == 0 {
        return DisplayPos { rows, cols: offset };
    }

    DisplayPos {
        rows: rows + offset / col,
        cols: offset % col,
    }
}
