// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::CompletionResult;
use miette::Diagnostic;
use std::{fmt::{Debug, Formatter},
          future::Future,
          pin::Pin};

/// A completer failed. This is never propagated out of [`crate::Readline::readline()`],
/// it is displayed inline as `Tab completion error: <error>` and editing continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum CompletionError {
    #[error("Error: {0}")]
    #[diagnostic(
        code(tabline::completion::failed),
        help("The completer returned an error, the input line is left unchanged")
    )]
    Failed(String),
}

impl CompletionError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self { CompletionError::Failed(message.into()) }
}

/// For convenience, so that completers written with `?` on [`miette::Result`] work.
impl From<miette::Report> for CompletionError {
    fn from(report: miette::Report) -> Self { CompletionError::Failed(format!("{report}")) }
}

pub type CompletionFuture =
    Pin<Box<dyn Future<Output = Result<CompletionResult, CompletionError>> + Send + 'static>>;

/// The two shapes a completer can answer in.
pub enum CompleterOutput {
    /// The result is available right away, no suspension.
    Immediate(Result<CompletionResult, CompletionError>),
    /// The result arrives later. Input is not consumed until it resolves.
    Deferred(CompletionFuture),
}

impl Debug for CompleterOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CompleterOutput::Immediate(result) => {
                f.debug_tuple("Immediate").field(result).finish()
            }
            CompleterOutput::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Produces completions for the text before the cursor.
///
/// Closures of the shape `FnMut(&str) -> CompleterOutput` implement this directly. For
/// the common cases use [`completer_fn`] and [`async_completer_fn`].
pub trait Completer: Send {
    fn complete(&mut self, line_before_cursor: &str) -> CompleterOutput;
}

impl<F> Completer for F
where
    F: FnMut(&str) -> CompleterOutput + Send,
{
    fn complete(&mut self, line_before_cursor: &str) -> CompleterOutput {
        self(line_before_cursor)
    }
}

/// Wraps a synchronous completion function. See [`completer_fn`].
#[derive(Debug)]
pub struct SyncCompleterFn<F>(F);

impl<F> Completer for SyncCompleterFn<F>
where
    F: FnMut(&str) -> Result<CompletionResult, CompletionError> + Send,
{
    fn complete(&mut self, line_before_cursor: &str) -> CompleterOutput {
        CompleterOutput::Immediate((self.0)(line_before_cursor))
    }
}

/// Wraps an asynchronous completion function. See [`async_completer_fn`].
#[derive(Debug)]
pub struct AsyncCompleterFn<F>(F);

impl<F, Fut> Completer for AsyncCompleterFn<F>
where
    F: FnMut(&str) -> Fut + Send,
    Fut: Future<Output = Result<CompletionResult, CompletionError>> + Send + 'static,
{
    fn complete(&mut self, line_before_cursor: &str) -> CompleterOutput {
        CompleterOutput::Deferred(Box::pin((self.0)(line_before_cursor)))
    }
}

/// Create a [`Completer`] from a function that answers right away.
///
/// ```
/// use tabline::{CompleterOutput, CompletionGroup, CompletionResult, Completer,
///               completer_fn};
///
/// let mut completer = completer_fn(|line: &str| {
///     Ok(CompletionResult::new(vec![CompletionGroup::unlabeled(["help"])], line))
/// });
/// assert!(matches!(completer.complete("he"), CompleterOutput::Immediate(Ok(_))));
/// ```
pub fn completer_fn<F>(f: F) -> SyncCompleterFn<F>
where
    F: FnMut(&str) -> Result<CompletionResult, CompletionError> + Send,
{
    SyncCompleterFn(f)
}

/// Create a [`Completer`] from a function that returns a future. The future must own
/// its data, so copy what it needs out of the line first.
///
/// ```
/// use tabline::{CompleterOutput, CompletionError, CompletionGroup, CompletionResult,
///               Completer, async_completer_fn};
///
/// let mut completer = async_completer_fn(|line: &str| {
///     let line = line.to_owned();
///     async move {
///         let groups = vec![CompletionGroup::unlabeled(["help"])];
///         Ok::<_, CompletionError>(CompletionResult::new(groups, line))
///     }
/// });
/// assert!(matches!(completer.complete("he"), CompleterOutput::Deferred(_)));
/// ```
pub fn async_completer_fn<F, Fut>(f: F) -> AsyncCompleterFn<F>
where
    F: FnMut(&str) -> Fut + Send,
    Fut: Future<Output = Result<CompletionResult, CompletionError>> + Send + 'static,
{
    AsyncCompleterFn(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompletionGroup;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display_matches_inline_message() {
        let error = CompletionError::new("message");
        assert_eq!(
            format!("Tab completion error: {error}"),
            "Tab completion error: Error: message"
        );
    }

    #[test]
    fn test_error_from_report() {
        let error = CompletionError::from(miette::miette!("no such directory"));
        assert_eq!(error, CompletionError::new("no such directory"));
    }

    #[test]
    fn test_closure_is_a_completer() {
        let mut count = 0;
        let mut completer = |line: &str| {
            count += 1;
            CompleterOutput::Immediate(Ok(CompletionResult::new(vec![], line)))
        };
        let CompleterOutput::Immediate(Ok(result)) = completer.complete("ab") else {
            panic!("expected an immediate result");
        };
        assert_eq!(result.complete_on, "ab");
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_async_completer_fn_resolves() {
        let mut completer = async_completer_fn(|line: &str| {
            let line = line.to_owned();
            async move {
                Ok::<_, CompletionError>(CompletionResult::new(
                    vec![CompletionGroup::unlabeled([format!("{line}p")])],
                    line,
                ))
            }
        });
        let CompleterOutput::Deferred(future) = completer.complete("hel") else {
            panic!("expected a deferred result");
        };
        let result = future.await.unwrap();
        assert_eq!(result.candidates().next().unwrap().text(), "help");
    }

    #[tokio::test]
    async fn test_async_completer_fn_rejects() {
        let mut completer =
            async_completer_fn(|_: &str| async {
                Err::<CompletionResult, _>(CompletionError::new("message"))
            });
        let CompleterOutput::Deferred(future) = completer.complete("") else {
            panic!("expected a deferred result");
        };
        assert_eq!(future.await, Err(CompletionError::new("message")));
    }
}
