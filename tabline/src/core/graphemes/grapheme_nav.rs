// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_segmentation::UnicodeSegmentation;

/// Byte index of the start of the grapheme cluster that ends at `byte_index`. Returns
/// [None] at the start of the line.
#[must_use]
pub fn prev_grapheme_boundary(line: &str, byte_index: usize) -> Option<usize> {
    let head = line.get(..byte_index)?;
    head.grapheme_indices(true).next_back().map(|(start, _)| start)
}

/// Byte index of the end of the grapheme cluster that starts at `byte_index`. Returns
/// [None] at the end of the line.
#[must_use]
pub fn next_grapheme_boundary(line: &str, byte_index: usize) -> Option<usize> {
    let tail = line.get(byte_index..)?;
    tail.graphemes(true)
        .next()
        .map(|grapheme| byte_index + grapheme.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_boundary() {
        let line = "aあ🐕";
        assert_eq!(prev_grapheme_boundary(line, line.len()), Some(4));
        assert_eq!(prev_grapheme_boundary(line, 4), Some(1));
        assert_eq!(prev_grapheme_boundary(line, 1), Some(0));
        assert_eq!(prev_grapheme_boundary(line, 0), None);
    }

    #[test]
    fn test_next_boundary() {
        let line = "ae\u{0301}b";
        assert_eq!(next_grapheme_boundary(line, 0), Some(1));
        assert_eq!(next_grapheme_boundary(line, 1), Some(4));
        assert_eq!(next_grapheme_boundary(line, 4), Some(5));
        assert_eq!(next_grapheme_boundary(line, 5), None);
    }
}
