// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// All key handlers share one signature, even the ones that never return an event.
#![allow(clippy::unnecessary_wraps)]

use super::{core::LineState, render::RenderPass};
use crate::{Key, ReadlineEvent, Size, SpecialKey, next_grapheme_boundary,
            prev_grapheme_boundary};

/// Handle control key events (Ctrl+key combinations).
pub fn handle_control_key(
    line_state: &mut LineState,
    key: Key,
    pass: &mut RenderPass,
) -> Option<ReadlineEvent> {
    match key {
        Key::Character('d') => handle_ctrl_d(line_state, pass),
        Key::Character('c') => Some(handle_ctrl_c(line_state, pass)),
        #[cfg(feature = "emacs")]
        Key::Character('a') => handle_home(line_state, pass),
        #[cfg(feature = "emacs")]
        Key::Character('e') => handle_end(line_state, pass),
        _ => None,
    }
}

/// Handle regular key events (no modifiers, or only Shift). The trigger key is routed to
/// completion before it gets here.
pub fn handle_regular_key(
    line_state: &mut LineState,
    key: Key,
    pass: &mut RenderPass,
) -> Option<ReadlineEvent> {
    match key {
        Key::SpecialKey(SpecialKey::Enter) => Some(handle_enter(line_state, pass)),
        Key::SpecialKey(SpecialKey::Backspace) => handle_backspace(line_state, pass),
        Key::SpecialKey(SpecialKey::Delete) => handle_delete(line_state, pass),
        Key::SpecialKey(SpecialKey::Left) => handle_left(line_state, pass),
        Key::SpecialKey(SpecialKey::Right) => handle_right(line_state, pass),
        Key::SpecialKey(SpecialKey::Home) => handle_home(line_state, pass),
        Key::SpecialKey(SpecialKey::End) => handle_end(line_state, pass),
        Key::Character(c) => {
            let mut buf = [0_u8; 4];
            line_state.insert_str(c.encode_utf8(&mut buf), pass);
            None
        }
        // No history, no reverse tab.
        Key::SpecialKey(
            SpecialKey::Up
            | SpecialKey::Down
            | SpecialKey::Esc
            | SpecialKey::Tab
            | SpecialKey::BackTab,
        ) => None,
    }
}

/// Handle terminal resize events.
pub fn handle_resize(
    line_state: &mut LineState,
    size: Size,
    pass: &mut RenderPass,
) -> ReadlineEvent {
    line_state.term_size = size;
    line_state.refresh_line(pass);
    ReadlineEvent::Resized
}

fn handle_enter(line_state: &mut LineState, pass: &mut RenderPass) -> ReadlineEvent {
    if line_state.should_print_line_on_enter {
        line_state.finish_line(pass);
    } else {
        line_state.erase_line(pass);
    }
    ReadlineEvent::Line(line_state.take_line())
}

// End of text (Ctrl+C)
fn handle_ctrl_c(line_state: &mut LineState, pass: &mut RenderPass) -> ReadlineEvent {
    if line_state.should_print_line_on_control_c {
        line_state.finish_line(pass);
    } else {
        line_state.erase_line(pass);
    }
    line_state.take_line();
    ReadlineEvent::Interrupted
}

// End of transmission (Ctrl+D)
fn handle_ctrl_d(line_state: &mut LineState, pass: &mut RenderPass) -> Option<ReadlineEvent> {
    if line_state.line.is_empty() {
        line_state.finish_line(pass);
        line_state.take_line();
        Some(ReadlineEvent::Eof)
    } else {
        handle_delete(line_state, pass)
    }
}

fn handle_backspace(
    line_state: &mut LineState,
    pass: &mut RenderPass,
) -> Option<ReadlineEvent> {
    let end = line_state.line_cursor;
    if let Some(start) = prev_grapheme_boundary(&line_state.line, end) {
        line_state.remove_range(start, end, pass);
    }
    None
}

fn handle_delete(line_state: &mut LineState, pass: &mut RenderPass) -> Option<ReadlineEvent> {
    let start = line_state.line_cursor;
    if let Some(end) = next_grapheme_boundary(&line_state.line, start) {
        line_state.remove_range(start, end, pass);
    }
    None
}

fn handle_left(line_state: &mut LineState, pass: &mut RenderPass) -> Option<ReadlineEvent> {
    if let Some(index) = prev_grapheme_boundary(&line_state.line, line_state.line_cursor) {
        line_state.move_cursor_to(index, pass);
    }
    None
}

fn handle_right(line_state: &mut LineState, pass: &mut RenderPass) -> Option<ReadlineEvent> {
    if let Some(index) = next_grapheme_boundary(&line_state.line, line_state.line_cursor) {
        line_state.move_cursor_to(index, pass);
    }
    None
}

fn handle_home(line_state: &mut LineState, pass: &mut RenderPass) -> Option<ReadlineEvent> {
    line_state.move_cursor_to(0, pass);
    None
}

fn handle_end(line_state: &mut LineState, pass: &mut RenderPass) -> Option<ReadlineEvent> {
    line_state.move_cursor_to(line_state.line.len(), pass);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{height, width};
    use pretty_assertions::assert_eq;

    fn line_state(line: &str) -> LineState {
        let mut line_state =
            LineState::new("> ".into(), Size::new((width(80), height(24))));
        line_state.line = line.into();
        line_state.line_cursor = line.len();
        line_state
    }

    #[test]
    fn test_enter_returns_line_and_moves_down() {
        let mut line_state = line_state("hello");
        line_state.line_cursor = 1;
        let mut pass = RenderPass::new();
        let event =
            handle_regular_key(&mut line_state, Key::SpecialKey(SpecialKey::Enter), &mut pass);
        assert_eq!(event, Some(ReadlineEvent::Line("hello".into())));
        assert_eq!(pass.as_str(), "\x1b[8G\r\n");
        assert!(line_state.line.is_empty());
    }

    #[test]
    fn test_enter_without_printing_erases() {
        let mut line_state = line_state("hello");
        line_state.should_print_line_on_enter = false;
        let mut pass = RenderPass::new();
        let event =
            handle_regular_key(&mut line_state, Key::SpecialKey(SpecialKey::Enter), &mut pass);
        assert_eq!(event, Some(ReadlineEvent::Line("hello".into())));
        assert_eq!(pass.as_str(), "\x1b[1G\x1b[0J");
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        let mut line_state = line_state("a🐕");
        let mut pass = RenderPass::new();
        handle_regular_key(&mut line_state, Key::SpecialKey(SpecialKey::Backspace), &mut pass);
        assert_eq!(line_state.line, "a");
        assert_eq!(line_state.line_cursor, 1);
        assert_eq!(pass.as_str(), "\x1b[1G\x1b[0J> a\x1b[4G");
    }

    #[test]
    fn test_delete_at_end_does_nothing() {
        let mut line_state = line_state("ab");
        let mut pass = RenderPass::new();
        handle_regular_key(&mut line_state, Key::SpecialKey(SpecialKey::Delete), &mut pass);
        assert_eq!(line_state.line, "ab");
        assert!(pass.is_empty());
    }

    #[test]
    fn test_left_right_move_by_grapheme() {
        let mut line_state = line_state("aあ");
        let mut pass = RenderPass::new();
        handle_regular_key(&mut line_state, Key::SpecialKey(SpecialKey::Left), &mut pass);
        assert_eq!(line_state.line_cursor, 1);
        handle_regular_key(&mut line_state, Key::SpecialKey(SpecialKey::Right), &mut pass);
        assert_eq!(line_state.line_cursor, 4);
        assert_eq!(pass.as_str(), "\x1b[4G\x1b[6G");
    }

    #[test]
    fn test_ctrl_c_interrupts_and_clears() {
        let mut line_state = line_state("partial");
        let mut pass = RenderPass::new();
        let event = handle_control_key(&mut line_state, Key::Character('c'), &mut pass);
        assert_eq!(event, Some(ReadlineEvent::Interrupted));
        assert!(line_state.line.is_empty());
    }

    #[test]
    fn test_ctrl_d() {
        let mut non_empty = line_state("ab");
        let mut empty = line_state("");
        let mut pass = RenderPass::new();

        non_empty.line_cursor = 0;
        assert_eq!(
            handle_control_key(&mut non_empty, Key::Character('d'), &mut pass),
            None
        );
        assert_eq!(non_empty.line, "b");

        assert_eq!(
            handle_control_key(&mut empty, Key::Character('d'), &mut pass),
            Some(ReadlineEvent::Eof)
        );
    }

    #[cfg(feature = "emacs")]
    #[test]
    fn test_ctrl_a_ctrl_e() {
        let mut line_state = line_state("abc");
        let mut pass = RenderPass::new();
        handle_control_key(&mut line_state, Key::Character('a'), &mut pass);
        assert_eq!(line_state.line_cursor, 0);
        handle_control_key(&mut line_state, Key::Character('e'), &mut pass);
        assert_eq!(line_state.line_cursor, 3);
    }

    #[test]
    fn test_resize_refreshes() {
        let mut line_state = line_state("ab");
        let mut pass = RenderPass::new();
        let event = handle_resize(&mut line_state, Size::new((width(4), height(10))), &mut pass);
        assert_eq!(event, ReadlineEvent::Resized);
        assert_eq!(line_state.term_size.col_width, width(4));
        assert_eq!(line_state.prev_rows, 1);
    }
}
