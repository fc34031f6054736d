// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lays out completion candidates in columns, row major, the way shells print them:
//!
//! ```text
//! First group
//!
//! あaaaaaaaaaa            あbbbbbbbbbb            あああああああああああ
//! ```
//!
//! Each group is measured on its own. The slot width is the widest candidate plus
//! [`COLUMN_GAP`], and as many slots as fit the terminal width make up a row (at least
//! one). All widths are display widths, so wide characters line up.

use crate::{Candidate, ColWidth, CompletionGroup, CRLF, width};

/// Spaces between the widest candidate of a group and the next column.
pub const COLUMN_GAP: u16 = 2;

/// Number of slots of `slot_width` that fit in `term_width`, at least `1`.
#[must_use]
pub fn column_count(term_width: ColWidth, slot_width: ColWidth) -> usize {
    if slot_width.as_usize() == 0 {
        return 1;
    }
    (term_width.as_usize() / slot_width.as_usize()).max(1)
}

/// Layout of a single [`CompletionGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLayout {
    pub label: Option<String>,
    pub slot_width: ColWidth,
    pub columns: usize,
    pub rows: Vec<Vec<Candidate>>,
}

impl GroupLayout {
    #[must_use]
    pub fn new(group: &CompletionGroup, term_width: ColWidth) -> Self {
        let max_width = group
            .candidates
            .iter()
            .map(Candidate::display_width)
            .max()
            .unwrap_or_default();
        let slot_width = max_width + width(COLUMN_GAP);
        let columns = column_count(term_width, slot_width);
        let rows = group
            .candidates
            .chunks(columns)
            .map(<[Candidate]>::to_vec)
            .collect();

        Self {
            label: group.display_label().map(str::to_owned),
            slot_width,
            columns,
            rows,
        }
    }

    /// Whether the final row uses every column. When it does the block ends on a
    /// natural wrap, otherwise it ends right after its last candidate. Either way no
    /// padding follows the last candidate.
    #[must_use]
    pub fn last_row_is_full(&self) -> bool {
        self.rows
            .last()
            .is_some_and(|row| row.len() == self.columns)
    }

    #[must_use]
    pub fn has_candidates(&self) -> bool { !self.rows.is_empty() }

    fn render_into(&self, acc: &mut String) {
        if let Some(label) = &self.label {
            acc.push_str(label);
            acc.push_str(CRLF);
            acc.push_str(CRLF);
        }

        if !self.has_candidates() {
            return;
        }

        for (row_index, row) in self.rows.iter().enumerate() {
            if row_index > 0 {
                acc.push_str(CRLF);
            }
            let last_index = row.len().saturating_sub(1);
            for (index, candidate) in row.iter().enumerate() {
                acc.push_str(candidate.text());
                if index < last_index {
                    let padding = self.slot_width - candidate.display_width();
                    acc.extend(std::iter::repeat_n(' ', padding.as_usize()));
                }
            }
        }

        acc.push_str(CRLF);
        acc.push_str(CRLF);
    }
}

/// Layout of all the groups of a completion result for a given terminal width. This is
/// recomputed on every completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub groups: Vec<GroupLayout>,
}

impl LayoutPlan {
    /// Groups that have neither a label nor candidates are left out.
    #[must_use]
    pub fn new(groups: &[CompletionGroup], term_width: ColWidth) -> Self {
        let groups = groups
            .iter()
            .filter(|group| group.display_label().is_some() || !group.is_empty())
            .map(|group| GroupLayout::new(group, term_width))
            .collect();
        Self { groups }
    }

    /// The bytes of the completion list block. It starts on a fresh line and ends with a
    /// blank line, leaving the cursor at column 0 where the prompt is redrawn.
    ///
    /// ```
    /// use tabline::{CompletionGroup, LayoutPlan, width};
    ///
    /// let groups = [CompletionGroup::unlabeled(["ab", "abc", "abcd"])];
    /// let plan = LayoutPlan::new(&groups, width(12));
    /// assert_eq!(plan.render(), "\r\nab    abc\r\nabcd\r\n\r\n");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut acc = String::from(CRLF);
        for group in &self.groups {
            group.render_into(&mut acc);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn sample_group(x: &str) -> CompletionGroup {
        CompletionGroup::labeled("First group", [
            format!("{x}{}", "a".repeat(10)),
            format!("{x}{}", "b".repeat(10)),
            x.repeat(11),
        ])
    }

    #[test_case("あ", 60, 24, 2 ; "wide cjk two columns")]
    #[test_case("あ", 90, 24, 3 ; "wide cjk three columns")]
    #[test_case("🐕", 60, 24, 2 ; "emoji two columns")]
    #[test_case("🐕", 90, 24, 3 ; "emoji three columns")]
    #[test_case("𐐷", 30, 13, 2 ; "supplementary plane two columns")]
    #[test_case("𐐷", 60, 13, 4 ; "supplementary plane four columns")]
    fn test_columns_from_widest_candidate(
        x: &str,
        term_width: u16,
        expected_slot: u16,
        expected_columns: usize,
    ) {
        let layout = GroupLayout::new(&sample_group(x), width(term_width));
        assert_eq!(layout.slot_width, width(expected_slot));
        assert_eq!(layout.columns, expected_columns);
    }

    #[test]
    fn test_slot_wider_than_terminal_is_one_column() {
        let group = CompletionGroup::unlabeled(["abcdefghij", "k"]);
        let layout = GroupLayout::new(&group, width(5));
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.rows.len(), 2);

        let layout = GroupLayout::new(&group, width(0));
        assert_eq!(layout.columns, 1);
    }

    #[test]
    fn test_last_row_is_full() {
        let group = CompletionGroup::unlabeled(["a", "b", "c", "d"]);
        assert!(GroupLayout::new(&group, width(6)).last_row_is_full());
        assert!(!GroupLayout::new(&group, width(9)).last_row_is_full());
    }

    #[test]
    fn test_render_partial_last_row() {
        let plan = LayoutPlan::new(&[sample_group("あ")], width(60));
        assert_eq!(
            plan.render(),
            format!(
                "\r\nFirst group\r\n\r\nあaaaaaaaaaa{}あbbbbbbbbbb\r\n{}\r\n\r\n",
                " ".repeat(12),
                "あ".repeat(11)
            )
        );
    }

    #[test]
    fn test_render_single_row_pads_all_but_last() {
        let plan = LayoutPlan::new(&[sample_group("𐐷")], width(60));
        let pad = " ".repeat(2);
        assert_eq!(
            plan.render(),
            format!(
                "\r\nFirst group\r\n\r\n𐐷aaaaaaaaaa{pad}𐐷bbbbbbbbbb{pad}{}\r\n\r\n",
                "𐐷".repeat(11)
            )
        );
    }

    #[test]
    fn test_groups_are_measured_separately() {
        let groups = [
            CompletionGroup::unlabeled(["a", "b"]),
            CompletionGroup::labeled("Long", ["abcdefgh", "i"]),
        ];
        let plan = LayoutPlan::new(&groups, width(80));
        assert_eq!(plan.groups[0].slot_width, width(3));
        assert_eq!(plan.groups[1].slot_width, width(10));
        assert_eq!(
            plan.render(),
            "\r\na  b\r\n\r\nLong\r\n\r\nabcdefgh  i\r\n\r\n"
        );
    }

    #[test]
    fn test_empty_groups() {
        let groups = [
            CompletionGroup::unlabeled(Vec::<String>::new()),
            CompletionGroup::labeled("Nothing found", Vec::<String>::new()),
        ];
        let plan = LayoutPlan::new(&groups, width(80));
        assert_eq!(plan.groups.len(), 1);
        assert_eq!(plan.render(), "\r\nNothing found\r\n\r\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let groups = [sample_group("🐕")];
        assert_eq!(
            LayoutPlan::new(&groups, width(60)).render(),
            LayoutPlan::new(&groups, width(60)).render()
        );
    }
}
