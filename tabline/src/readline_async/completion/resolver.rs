// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Candidate, Completer, CompleterOutput, CompletionError, CompletionFuture,
            CompletionResult};
use std::fmt::{Debug, Formatter};

/// Where the editor is in handling a completion request.
///
/// ```text
/// Idle ──► AwaitingCompletion ──► Rendering ──► Idle
///                  │
///                  └──► ErrorDisplay ──► Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionState {
    #[default]
    Idle,
    AwaitingCompletion,
    Rendering,
    ErrorDisplay,
}

/// Outcome of asking the completer.
pub enum Resolution {
    Ready(Result<CompletionResult, CompletionError>),
    Pending(CompletionFuture),
}

impl Debug for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Ready(result) => f.debug_tuple("Ready").field(result).finish(),
            Resolution::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// What a resolved [`CompletionResult`] does to the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionAction {
    /// There are no candidates.
    Nothing,
    /// All candidates share a prefix longer than `complete_on`. Insert the rest of it at
    /// the cursor.
    Insert(String),
    /// `complete_on` isn't a prefix of the common prefix (eg: it differs in case). Replace
    /// `complete_on` before the cursor with `prefix`.
    Replace { complete_on: String, prefix: String },
    /// Nothing left to insert. Print the candidate list.
    ShowList,
    /// Nothing left to insert, and the list is only printed on the next trigger key.
    AwaitNextTrigger,
}

/// Longest common prefix of the given strings, on `char` boundaries.
///
/// ```
/// use tabline::common_prefix;
///
/// assert_eq!(common_prefix(["あaa", "あab", "あa"]), "あa");
/// assert_eq!(common_prefix(["abc"]), "abc");
/// assert_eq!(common_prefix(Vec::<&str>::new()), "");
/// ```
pub fn common_prefix<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut iter = items.into_iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for item in iter {
        prefix_len = first[..prefix_len]
            .char_indices()
            .zip(item.chars())
            .find(|((_, lhs), rhs)| lhs != rhs)
            // No mismatch: the shorter of the two is the common part.
            .map_or_else(|| prefix_len.min(item.len()), |((index, _), _)| index);
    }

    first[..prefix_len].to_owned()
}

/// Decide what to do with a resolved result. `list_requested` is true when the previous
/// key was also the trigger key, or when the editor lists candidates on the first one.
///
/// The common prefix is taken over the candidates only, group labels are not part of it.
#[must_use]
pub fn decide_completion_action(
    result: &CompletionResult,
    list_requested: bool,
) -> CompletionAction {
    if result.is_empty() {
        return CompletionAction::Nothing;
    }

    let complete_on = result.complete_on.as_str();
    let prefix = common_prefix(result.candidates().map(Candidate::text));

    if prefix.len() > complete_on.len() && prefix.starts_with(complete_on) {
        return CompletionAction::Insert(prefix[complete_on.len()..].to_owned());
    }

    if !complete_on.starts_with(prefix.as_str()) {
        return CompletionAction::Replace {
            complete_on: complete_on.to_owned(),
            prefix,
        };
    }

    if list_requested {
        CompletionAction::ShowList
    } else {
        CompletionAction::AwaitNextTrigger
    }
}

/// Owns the [`Completer`] and the [`CompletionState`].
pub struct CompletionResolver {
    completer: Box<dyn Completer>,
    state: CompletionState,
}

impl Debug for CompletionResolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionResolver")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CompletionResolver {
    #[must_use]
    pub fn new(completer: impl Completer + 'static) -> Self {
        Self::from_boxed(Box::new(completer))
    }

    #[must_use]
    pub fn from_boxed(completer: Box<dyn Completer>) -> Self {
        Self {
            completer,
            state: CompletionState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> CompletionState { self.state }

    pub fn transition_to(&mut self, next: CompletionState) {
        tracing::debug!(
            message = "completion state",
            from = ?self.state,
            to = ?next
        );
        self.state = next;
    }

    /// Ask the completer about `line_before_cursor`. Moves to
    /// [`CompletionState::AwaitingCompletion`], the caller moves on from there once the
    /// result is in hand.
    pub fn resolve(&mut self, line_before_cursor: &str) -> Resolution {
        self.transition_to(CompletionState::AwaitingCompletion);
        match self.completer.complete(line_before_cursor) {
            CompleterOutput::Immediate(result) => Resolution::Ready(result),
            CompleterOutput::Deferred(future) => Resolution::Pending(future),
        }
    }
}
