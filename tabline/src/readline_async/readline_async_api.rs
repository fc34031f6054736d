// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, Completer, InputDevice, OutputDevice, Readline, ReadlineEvent,
            TTYResult, get_size_or_default, is_stdin_interactive, is_stdout_interactive};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use futures_util::FutureExt as _;
use miette::IntoDiagnostic as _;
use tokio::sync::broadcast;

pub const DEFAULT_PROMPT: &str = "> ";

/// Owns a [`Readline`] that is wired up to the real terminal (raw mode, `stdout`, and
/// [`crossterm::event::EventStream`]). Raw mode is turned off again when this is
/// dropped.
///
/// ```no_run
/// use tabline::{CompletionResult, ReadlineAsyncContext, ReadlineEvent, completer_fn};
///
/// # async fn run() -> miette::Result<()> {
/// let completer = completer_fn(|line: &str| {
///     Ok(CompletionResult::from_separated_entries(["help", "hello"], line))
/// });
/// let Some(mut rl_ctx) = ReadlineAsyncContext::try_new(Some("$ "), completer)? else {
///     return Ok(()); // Not a terminal.
/// };
/// loop {
///     match rl_ctx.read_line().await? {
///         ReadlineEvent::Line(line) => println!("{line}\r"),
///         ReadlineEvent::Resized => {}
///         ReadlineEvent::Eof | ReadlineEvent::Interrupted => break,
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[allow(missing_debug_implementations)]
pub struct ReadlineAsyncContext {
    pub readline: Readline,
    shutdown_sender: broadcast::Sender<()>,
}

impl ReadlineAsyncContext {
    /// Returns [None] if stdin or stdout is not an interactive terminal (eg: it is
    /// piped), since there is no line to edit in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode can't be enabled.
    pub fn try_new(
        read_line_prompt: Option<impl AsRef<str>>,
        completer: impl Completer + 'static,
    ) -> CommonResult<Option<ReadlineAsyncContext>> {
        if let TTYResult::IsNotInteractive = is_stdin_interactive() {
            return Ok(None);
        }
        if let TTYResult::IsNotInteractive = is_stdout_interactive() {
            return Ok(None);
        }

        let prompt = read_line_prompt
            .map_or_else(|| DEFAULT_PROMPT.to_owned(), |it| it.as_ref().to_owned());

        enable_raw_mode().into_diagnostic()?;

        let (shutdown_sender, _) = broadcast::channel::<()>(1);
        let readline = Readline::new(
            prompt,
            get_size_or_default(),
            OutputDevice::new_stdout(),
            InputDevice::new_event_stream(),
            shutdown_sender.clone(),
        )
        .with_completer(completer);

        tracing::debug!(message = "raw mode enabled, readline ready");

        Ok(Some(ReadlineAsyncContext {
            readline,
            shutdown_sender,
        }))
    }

    /// Read one line, or whichever [`ReadlineEvent`] comes first.
    ///
    /// # Errors
    ///
    /// Returns an error if the session was shut down, or terminal I/O failed.
    pub async fn read_line(&mut self) -> miette::Result<ReadlineEvent> {
        self.readline.readline().fuse().await.into_diagnostic()
    }

    /// End the session. A [`Self::read_line()`] that is waiting returns an error, and a
    /// pending completion is dropped.
    pub fn request_shutdown(&self) {
        // No receivers means no readline() is running, which is fine.
        let _unused = self.shutdown_sender.send(());
    }

    /// For tasks that need to shut the session down from elsewhere.
    #[must_use]
    pub fn clone_shutdown_sender(&self) -> broadcast::Sender<()> {
        self.shutdown_sender.clone()
    }

    #[must_use]
    pub fn clone_output_device(&self) -> OutputDevice {
        self.readline.output_device.clone()
    }
}

impl Drop for ReadlineAsyncContext {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::error!(message = "failed to disable raw mode", error = ?err);
        }
    }
}
