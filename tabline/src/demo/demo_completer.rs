// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Completer, CompleterOutput, CompletionError, CompletionGroup,
            CompletionResult};
use std::time::Duration;

pub mod command_names {
    pub const HELP: &str = "help";
    pub const HELLO: &str = "hello";
    pub const HISTORY: &str = "history";
    pub const CLEAR: &str = "clear";
    pub const EXIT: &str = "exit";
    pub const EMOJI: &str = "emoji";
    pub const KANA: &str = "kana";
    pub const SLOW: &str = "slow";
    pub const FAIL: &str = "fail";

    pub const ALL: [&str; 9] = [HELP, HELLO, HISTORY, CLEAR, EXIT, EMOJI, KANA, SLOW, FAIL];
}

const ANIMALS: [&str; 6] = ["🐕dog", "🐕‍🦺service-dog", "🐈cat", "🐈‍⬛black-cat", "🦀crab", "🐢turtle"];
const FOOD: [&str; 4] = ["🍕pizza", "🍜ramen", "🍣sushi", "🥐croissant"];
const KANA_WORDS: [&str; 6] = ["あい", "あお", "あか", "いぬ", "ねこ", "𐐷deseret"];
const SLOW_WORDS: [&str; 4] = ["sloth", "slowpoke", "snail", "slug"];

/// How long the `slow` command pretends to wait for a remote lookup.
pub const SLOW_COMPLETION_DELAY: Duration = Duration::from_millis(500);

/// Completer for the demo REPL. The first word completes to a command name, the
/// arguments depend on the command:
/// - `emoji`: grouped, labeled emoji words.
/// - `kana`: wide and astral plane words.
/// - `slow`: answers after [`SLOW_COMPLETION_DELAY`], a [`CompleterOutput::Deferred`].
/// - `fail`: always fails, to show the inline error.
#[derive(Debug, Default)]
pub struct DemoCompleter;

impl Completer for DemoCompleter {
    fn complete(&mut self, line_before_cursor: &str) -> CompleterOutput {
        let (command, complete_on) = split_last_word(line_before_cursor);

        let Some(command) = command else {
            let groups = vec![CompletionGroup::labeled(
                "Commands",
                filter_prefix(&command_names::ALL, complete_on),
            )];
            return CompleterOutput::Immediate(Ok(CompletionResult::new(
                groups,
                complete_on,
            )));
        };

        match command {
            command_names::EMOJI => {
                let groups = vec![
                    CompletionGroup::labeled("Animals", filter_prefix(&ANIMALS, complete_on)),
                    CompletionGroup::labeled("Food", filter_prefix(&FOOD, complete_on)),
                ];
                CompleterOutput::Immediate(Ok(CompletionResult::new(groups, complete_on)))
            }
            command_names::KANA => {
                let groups =
                    vec![CompletionGroup::unlabeled(filter_prefix(&KANA_WORDS, complete_on))];
                CompleterOutput::Immediate(Ok(CompletionResult::new(groups, complete_on)))
            }
            command_names::SLOW => {
                let complete_on = complete_on.to_owned();
                CompleterOutput::Deferred(Box::pin(async move {
                    tokio::time::sleep(SLOW_COMPLETION_DELAY).await;
                    let groups = vec![CompletionGroup::labeled(
                        "Slow things",
                        filter_prefix(&SLOW_WORDS, &complete_on),
                    )];
                    Ok::<_, CompletionError>(CompletionResult::new(groups, complete_on))
                }))
            }
            command_names::FAIL => CompleterOutput::Immediate(Err(CompletionError::new(
                "the `fail` command has no completions",
            ))),
            _ => CompleterOutput::Immediate(Ok(CompletionResult::new(vec![], complete_on))),
        }
    }
}

/// Split into the first word (if the last word isn't also the first) and the last
/// word, which is what gets completed.
fn split_last_word(line: &str) -> (Option<&str>, &str) {
    let last_word_start = line
        .rfind(char::is_whitespace)
        .map_or(0, |index| index + line[index..].chars().next().map_or(1, char::len_utf8));
    let last_word = &line[last_word_start..];
    let first_word = line[..last_word_start].split_whitespace().next();
    (first_word, last_word)
}

fn filter_prefix<'a>(items: &'a [&'a str], prefix: &'a str) -> impl Iterator<Item = &'a str> {
    items.iter().copied().filter(move |it| it.starts_with(prefix))
}
