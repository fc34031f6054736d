// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{core::LineState, render::RenderPass};
use crate::{CompletionAction, CompletionError, CompletionGroup, LayoutPlan};

/// Prefix of the message printed when a completer fails.
pub const COMPLETION_ERROR_PREFIX: &str = "Tab completion error: ";

impl LineState {
    /// Apply a [`CompletionAction`] to the line. `groups` are only used to print the
    /// candidate list for [`CompletionAction::ShowList`].
    pub fn render_completion_action(
        &mut self,
        action: CompletionAction,
        groups: &[CompletionGroup],
        pass: &mut RenderPass,
    ) {
        match action {
            CompletionAction::Nothing | CompletionAction::AwaitNextTrigger => {}
            CompletionAction::Insert(text) => self.insert_str(&text, pass),
            CompletionAction::Replace {
                complete_on,
                prefix,
            } => self.replace_before_cursor(&complete_on, &prefix, pass),
            CompletionAction::ShowList => self.render_completion_list(groups, pass),
        }
    }

    /// Print the candidate list below the input, then redraw the prompt and the line
    /// below the list.
    pub fn render_completion_list(
        &mut self,
        groups: &[CompletionGroup],
        pass: &mut RenderPass,
    ) {
        let plan = LayoutPlan::new(groups, self.term_size.col_width);
        self.move_below_input(pass);
        pass.push_str(&plan.render());
        self.prev_rows = 0;
        self.refresh_line(pass);
    }

    /// Replace `complete_on`, which must end right at the cursor, with `replacement`.
    pub fn replace_before_cursor(
        &mut self,
        complete_on: &str,
        replacement: &str,
        pass: &mut RenderPass,
    ) {
        if !self.line_before_cursor().ends_with(complete_on) {
            tracing::warn!(
                message = "completion does not match the text before the cursor",
                complete_on = ?complete_on,
                line_before_cursor = ?self.line_before_cursor()
            );
            return;
        }
        let start = self.line_cursor - complete_on.len();
        self.line.replace_range(start..self.line_cursor, replacement);
        self.line_cursor = start + replacement.len();
        self.refresh_line(pass);
    }

    /// Completer failures are printed where the cursor is, the line is left alone.
    pub fn render_completion_error(&self, error: &CompletionError, pass: &mut RenderPass) {
        pass.push_str(COMPLETION_ERROR_PREFIX);
        pass.push_str(&error.to_string());
    }
}
