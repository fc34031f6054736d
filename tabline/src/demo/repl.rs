// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::command_names;
use crate::{CRLF, CsiSequence, EraseDisplayMode};
use std::fmt::Write as _;

/// What the REPL does with a line the user entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    /// Write these bytes, then read the next line.
    Print(String),
    Exit,
}

/// Lines printed by the `help` command. The terminal is in raw mode, so every line
/// ends with `\r\n`.
#[must_use]
pub fn help_text() -> String {
    let mut acc = String::new();
    let entries = [
        (command_names::HELP, "show this message"),
        (command_names::HELLO, "say hello"),
        (command_names::HISTORY, "list the lines entered so far"),
        (command_names::CLEAR, "clear the screen"),
        (command_names::EXIT, "quit (Ctrl+D works too)"),
        (command_names::EMOJI, "<Tab> complete emoji words, in two groups"),
        (command_names::KANA, "<Tab> complete wide and astral plane words"),
        (command_names::SLOW, "<Tab> complete after a delay"),
        (command_names::FAIL, "<Tab> show a completer error"),
    ];
    for (name, description) in entries {
        // Writing to a String can't fail.
        let _unused = write!(acc, "  {name:<8} {description}{CRLF}");
    }
    acc
}

/// Run one line entered by the user. `history` holds the previous lines.
#[must_use]
pub fn process_line(line: &str, history: &[String]) -> ReplAction {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return ReplAction::Print(String::new());
    };

    match command {
        command_names::HELP => ReplAction::Print(help_text()),
        command_names::HELLO => {
            let name = words.collect::<Vec<_>>().join(" ");
            let name = if name.is_empty() { "world" } else { &name };
            ReplAction::Print(format!("Hello, {name}!{CRLF}"))
        }
        command_names::HISTORY => {
            let mut acc = String::new();
            for (index, entry) in history.iter().enumerate() {
                let _unused = write!(acc, "{:>4}  {entry}{CRLF}", index + 1);
            }
            ReplAction::Print(acc)
        }
        command_names::CLEAR => ReplAction::Print(format!(
            "{}{}",
            CsiSequence::EraseDisplay(EraseDisplayMode::EntireScreen),
            CsiSequence::CursorPosition { row: 1, col: 1 }
        )),
        command_names::EXIT => ReplAction::Exit,
        _ => ReplAction::Print(format!("You entered: {line}{CRLF}")),
    }
}
