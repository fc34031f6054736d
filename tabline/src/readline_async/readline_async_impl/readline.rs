// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Completer, CompletionError, CompletionFuture, CompletionResolver,
            CompletionResult, CompletionState, InputDevice, InputEvent, Key, KeyPress,
            LineSnapshot, LineState, OutputDevice, RenderPass, Resolution, Size,
            SpecialKey, decide_completion_action, handle_control_key,
            handle_regular_key, handle_resize, lock_output_device_as_mut};
use miette::Report as ErrorReport;
use std::{fmt::{Debug, Formatter},
          io};
use thiserror::Error;
use tokio::{select, sync::broadcast};

/// # Mental model and overview
///
/// This is a replacement for a [`std::io::BufRead::read_line`] function. It is async,
/// and its main feature is tab completion that renders correctly for any Unicode input.
///
/// When you call [`Self::readline()`] it enters a loop that takes one input event at a
/// time, applies it to the [`LineState`], and writes the result to the terminal. Every
/// event (or resolved completion) is one *render pass*: all the bytes it produces are
/// collected into a [`RenderPass`] and written with a single call.
///
/// # Tab completion
///
/// Pressing `Tab` hands the text before the cursor to the [`Completer`] (via the
/// [`CompletionResolver`]). The result is applied as follows:
/// 1. No candidates: nothing happens.
/// 2. The candidates share a prefix that extends what was typed: the rest of the prefix
///    is inserted.
/// 3. Otherwise, on the second `Tab` in a row (or the first one, see
///    [`Self::show_completions_on_first_tab`]) the candidate list is printed below the
///    line and the prompt is redrawn under it.
///
/// If the completer fails, `Tab completion error: <error>` is printed and editing goes
/// on.
///
/// # Deferred completions
///
/// A completer can answer with a future ([`crate::CompleterOutput::Deferred`]). While it
/// is pending no input events are read, they wait in the [`InputDevice`] stream and are
/// processed in order once the completion has been rendered. There is at most one
/// [`PendingCompletion`] at a time.
///
/// [`Self::readline()`] is cancel safe. If its future is dropped while a completion is
/// pending, the completion stays on this struct and the next call picks it up. Before
/// a resolved completion is rendered it is checked against a snapshot of the line it was
/// computed for, and dropped if the line changed in the meantime.
///
/// # How or when to terminate the session
///
/// Send `()` on the shutdown channel passed to [`Self::new()`] (see
/// [`crate::ReadlineAsyncContext::request_shutdown()`]). A `readline()` that is running
/// returns [`ReadlineError::Closed`], and a pending completion is dropped without its
/// result being written. When the input stream ends, `readline()` returns
/// [`ReadlineEvent::Eof`].
///
/// # Inputs and dependency injection
///
/// There are 2 main resources that must be passed into [`Self::new()`]:
/// 1. [`InputDevice`] which contains a resource that implements
///    [`crate::PinnedInputStream`]. It is typically
///    [`crossterm::event::EventStream`]. For tests use
///    [`crate::InputDeviceExtMock::new_mock()`].
/// 2. [`OutputDevice`] which contains a resource that implements
///    [`crate::SafeRawTerminal`]. It is typically [`std::io::Stdout`]. For tests use
///    [`crate::OutputDeviceExt::new_mock()`].
///
/// This struct does not touch the terminal mode. [`crate::ReadlineAsyncContext`] turns
/// raw mode on and off around it.
#[allow(missing_debug_implementations)]
pub struct Readline {
    /// Device used to write rendered display output to (usually `stdout`).
    pub output_device: OutputDevice,

    /// Device used to get stream of events from user (usually `stdin`).
    pub input_device: InputDevice,

    /// Current line.
    pub line_state: LineState,

    /// [None] if no completer is set, then `Tab` inserts a tab character.
    pub completion_resolver: Option<CompletionResolver>,

    /// [Some] while a deferred completion is in flight.
    pub pending_completion: Option<PendingCompletion>,

    /// Is the prompt on the screen for the line being edited?
    is_prompt_rendered: bool,

    /// Shutdown channel.
    shutdown_complete_sender: broadcast::Sender<()>,
}

/// A deferred completion that hasn't resolved yet.
pub struct PendingCompletion {
    /// The line the completion was requested for.
    pub snapshot: LineSnapshot,
    /// Was the key before this `Tab` also a `Tab`?
    pub last_key_was_tab: bool,
    pub future: CompletionFuture,
}

impl Debug for PendingCompletion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingCompletion")
            .field("snapshot", &self.snapshot)
            .field("last_key_was_tab", &self.last_key_was_tab)
            .finish_non_exhaustive()
    }
}

/// Error returned from [`readline()`][Readline::readline]. Such errors generally require
/// specific procedures to recover from.
#[derive(Debug, Error)]
pub enum ReadlineError {
    /// An internal I/O error occurred.
    #[error(transparent)]
    IO(#[from] io::Error),

    /// The session was shut down.
    #[error("readline session closed")]
    Closed,
}

/// For convenience, convert [`ErrorReport`] to [`ReadlineError`],
/// so that `into_diagnostic()` works.
impl From<ErrorReport> for ReadlineError {
    fn from(report: ErrorReport) -> Self {
        ReadlineError::IO(io::Error::other(format!("{report}")))
    }
}

/// Events emitted by [`Readline::readline()`].
#[derive(Debug, PartialEq, Clone)]
pub enum ReadlineEvent {
    /// The user entered a line of text.
    Line(String),

    /// The user pressed `Ctrl+D` on an empty line, or the input stream ended.
    Eof,

    /// The user pressed `Ctrl+C`.
    Interrupted,

    /// The terminal was resized.
    Resized,
}

/// Internal control flow for the `readline` method. This is used primarily to make
/// testing easier.
#[derive(Debug, PartialEq, Clone)]
pub enum ControlFlowExtended<T, E> {
    ReturnOk(T),
    ReturnError(E),
    Continue,
}

impl Readline {
    /// Create a new instance. The prompt is printed by the first call to
    /// [`Self::readline()`]. To customize the behavior of this instance, you can use the
    /// following methods:
    /// - [`Self::with_completer`]
    /// - [`Self::should_print_line_on`]
    /// - [`Self::show_completions_on_first_tab`]
    #[must_use]
    pub fn new(
        prompt: String,
        term_size: Size,
        output_device: OutputDevice,
        /* move */ input_device: InputDevice,
        /* move */ shutdown_complete_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            output_device,
            input_device,
            line_state: LineState::new(prompt, term_size),
            completion_resolver: None,
            pending_completion: None,
            is_prompt_rendered: false,
            shutdown_complete_sender,
        }
    }

    #[must_use]
    pub fn with_completer(mut self, completer: impl Completer + 'static) -> Self {
        self.set_completer(completer);
        self
    }

    pub fn set_completer(&mut self, completer: impl Completer + 'static) {
        self.completion_resolver = Some(CompletionResolver::new(completer));
    }

    /// Set whether the input line should remain on the screen after events.
    ///
    /// If `enter` is true, then when the user presses "Enter", the prompt and the text
    /// they entered will remain on the screen, and the cursor will move to the next line.
    /// If `enter` is false, the prompt & input will be erased instead.
    /// The default value for this is `true`.
    ///
    /// `control_c` similarly controls the behavior for when the user presses `Ctrl+C`.
    /// The default value for this is `false`.
    pub fn should_print_line_on(&mut self, enter: bool, control_c: bool) {
        self.line_state.should_print_line_on_enter = enter;
        self.line_state.should_print_line_on_control_c = control_c;
    }

    /// Print the candidate list on the first `Tab` instead of waiting for a second one.
    /// The default value for this is `false`.
    pub fn show_completions_on_first_tab(&mut self, value: bool) {
        self.line_state.show_completions_on_first_tab = value;
    }

    #[must_use]
    pub fn completion_state(&self) -> CompletionState {
        self.completion_resolver
            .as_ref()
            .map_or(CompletionState::Idle, CompletionResolver::state)
    }

    /// Change the prompt. If it is on the screen, it is redrawn.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn update_prompt(&mut self, prompt: &str) -> Result<(), ReadlineError> {
        prompt.clone_into(&mut self.line_state.prompt);
        if !self.is_prompt_rendered {
            return Ok(());
        }
        let mut pass = RenderPass::new();
        self.line_state.refresh_line(&mut pass);
        self.flush(&pass)
    }

    /// This function returns when <kbd>Ctrl+D</kbd>, <kbd>Ctrl+C</kbd>, or
    /// <kbd>Enter</kbd> is pressed, when the terminal is resized, or when the input
    /// stream ends.
    ///
    /// Note that this function can be called repeatedly in a loop. It will return each
    /// line of input as it is entered.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::Closed`] if shutdown was requested while waiting, and
    /// [`ReadlineError::IO`] if reading input or writing to the terminal fails.
    pub async fn readline(&mut self) -> Result<ReadlineEvent, ReadlineError> {
        let mut shutdown_complete_receiver = self.shutdown_complete_sender.subscribe();

        self.render_prompt_if_needed()?;

        loop {
            // Input is not read while a completion is pending. It queues up in the input
            // stream and is processed in order afterwards.
            if self.pending_completion.is_some() {
                self.settle_pending_completion(&mut shutdown_complete_receiver)
                    .await?;
                continue;
            }

            let maybe_input_event = select! {
                // This branch is cancel safe because an event is either returned, or
                // left in the stream.
                it = self.input_device.next_input_event() => it,

                // Poll for shutdown signal.
                _ = shutdown_complete_receiver.recv() => {
                    return Err(ReadlineError::Closed);
                }
            };

            match maybe_input_event {
                None => return Ok(ReadlineEvent::Eof),
                Some(Err(err)) => return Err(ReadlineError::IO(err)),
                Some(Ok(input_event)) => match self.apply_event(input_event) {
                    ControlFlowExtended::ReturnOk(ok_value) => return Ok(ok_value),
                    ControlFlowExtended::ReturnError(err_value) => return Err(err_value),
                    ControlFlowExtended::Continue => {}
                },
            }
        }
    }

    /// Apply one input event to the line and render it. A deferred completion started
    /// by this event is left in [`Self::pending_completion`].
    ///
    /// A `Tab` that arrives while a completion is pending is ignored: the completer is
    /// not called again and the pending completion is left as is. [`Self::readline()`]
    /// never gets here with one pending, it settles it first and reads the `Tab` after.
    pub fn apply_event(
        &mut self,
        input_event: InputEvent,
    ) -> ControlFlowExtended<ReadlineEvent, ReadlineError> {
        let mut pass = RenderPass::new();

        let maybe_readline_event = match input_event {
            InputEvent::Resize(size) => {
                Some(handle_resize(&mut self.line_state, size, &mut pass))
            }
            InputEvent::Keyboard(KeyPress::Plain {
                key: Key::SpecialKey(SpecialKey::Tab),
            }) => {
                if self.pending_completion.is_some() {
                    tracing::debug!(message = "ignored tab, completion already pending");
                    return ControlFlowExtended::Continue;
                }
                let last_key_was_tab = self.line_state.last_key_was_tab;
                self.line_state.last_key_was_tab = true;
                self.handle_tab(last_key_was_tab, &mut pass);
                None
            }
            InputEvent::Keyboard(keypress) => {
                self.line_state.last_key_was_tab = false;
                match keypress {
                    KeyPress::Plain { key } => {
                        handle_regular_key(&mut self.line_state, key, &mut pass)
                    }
                    KeyPress::WithModifiers { key, mask } if mask.is_ctrl_only() => {
                        handle_control_key(&mut self.line_state, key, &mut pass)
                    }
                    KeyPress::WithModifiers { key, mask } if mask.is_shift_only() => {
                        handle_regular_key(&mut self.line_state, key, &mut pass)
                    }
                    KeyPress::WithModifiers { .. } => None,
                }
            }
        };

        if let Err(err) = self.flush(&pass) {
            return ControlFlowExtended::ReturnError(err);
        }

        match maybe_readline_event {
            Some(readline_event) => {
                if matches!(
                    readline_event,
                    ReadlineEvent::Line(_) | ReadlineEvent::Interrupted | ReadlineEvent::Eof
                ) {
                    self.is_prompt_rendered = false;
                }
                ControlFlowExtended::ReturnOk(readline_event)
            }
            None => ControlFlowExtended::Continue,
        }
    }

    /// Wait for the pending completion (if any) and render it, unless shutdown is
    /// requested first.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::Closed`] on shutdown, the pending completion is dropped.
    /// Returns [`ReadlineError::IO`] if writing to the terminal fails.
    pub async fn settle_pending_completion(
        &mut self,
        shutdown_complete_receiver: &mut broadcast::Receiver<()>,
    ) -> Result<(), ReadlineError> {
        let Some(pending) = self.pending_completion.as_mut() else {
            return Ok(());
        };

        let maybe_result = select! {
            // This branch is cancel safe because the future stays in
            // `self.pending_completion` until it has resolved.
            result = pending.future.as_mut() => Some(result),

            // Poll for shutdown signal.
            _ = shutdown_complete_receiver.recv() => None,
        };

        let Some(pending) = self.pending_completion.take() else {
            return Ok(());
        };

        let Some(result) = maybe_result else {
            tracing::debug!(message = "shutdown dropped pending completion");
            self.transition_completion_state(CompletionState::Idle);
            return Err(ReadlineError::Closed);
        };

        if pending.snapshot != self.line_state.snapshot() {
            tracing::debug!(
                message = "discarded stale completion",
                snapshot = ?pending.snapshot
            );
            self.transition_completion_state(CompletionState::Idle);
            return Ok(());
        }

        let mut pass = RenderPass::new();
        self.render_completion_result(result, pending.last_key_was_tab, &mut pass);
        self.flush(&pass)
    }

    fn handle_tab(&mut self, last_key_was_tab: bool, pass: &mut RenderPass) {
        let Some(resolver) = self.completion_resolver.as_mut() else {
            self.line_state.insert_str("\t", pass);
            return;
        };

        let snapshot = self.line_state.snapshot();
        match resolver.resolve(self.line_state.line_before_cursor()) {
            Resolution::Ready(result) => {
                self.render_completion_result(result, last_key_was_tab, pass);
            }
            Resolution::Pending(future) => {
                tracing::debug!(message = "completion pending", snapshot = ?snapshot);
                self.pending_completion = Some(PendingCompletion {
                    snapshot,
                    last_key_was_tab,
                    future,
                });
            }
        }
    }

    fn render_completion_result(
        &mut self,
        result: Result<CompletionResult, CompletionError>,
        last_key_was_tab: bool,
        pass: &mut RenderPass,
    ) {
        match result {
            Ok(result) => {
                self.transition_completion_state(CompletionState::Rendering);
                let list_requested =
                    last_key_was_tab || self.line_state.show_completions_on_first_tab;
                let action = decide_completion_action(&result, list_requested);
                tracing::debug!(
                    message = "completion pass",
                    candidates = result.candidates().count(),
                    complete_on = ?result.complete_on,
                    action = ?action
                );
                self.line_state
                    .render_completion_action(action, &result.groups, pass);
            }
            Err(error) => {
                self.transition_completion_state(CompletionState::ErrorDisplay);
                tracing::warn!(message = "completer failed", error = %error);
                self.line_state.render_completion_error(&error, pass);
            }
        }
        self.transition_completion_state(CompletionState::Idle);
    }

    fn transition_completion_state(&mut self, next: CompletionState) {
        if let Some(resolver) = self.completion_resolver.as_mut() {
            resolver.transition_to(next);
        }
    }

    fn render_prompt_if_needed(&mut self) -> Result<(), ReadlineError> {
        if self.is_prompt_rendered {
            return Ok(());
        }
        let mut pass = RenderPass::new();
        self.line_state.refresh_line(&mut pass);
        self.flush(&pass)?;
        self.is_prompt_rendered = true;
        Ok(())
    }

    /// One write per render pass.
    fn flush(&self, pass: &RenderPass) -> Result<(), ReadlineError> {
        let term = lock_output_device_as_mut!(self.output_device);
        pass.flush_to(term)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompletionGroup, InputDeviceExtMock, ModifierKeysMask, OutputDeviceExt,
                StdoutMock, async_completer_fn, completer_fn, height, width};
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use std::{sync::{Arc,
                     atomic::{AtomicUsize, Ordering}},
              time::Duration};

    fn plain(key: Key) -> InputEvent { InputEvent::Keyboard(KeyPress::Plain { key }) }

    fn tab() -> InputEvent { plain(Key::SpecialKey(SpecialKey::Tab)) }

    fn new_readline(input: Vec<Event>) -> (Readline, StdoutMock, broadcast::Sender<()>) {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let input_device = InputDevice::new_mock(input.into_iter().map(Ok).collect());
        let (shutdown_sender, _) = broadcast::channel::<()>(1);
        let readline = Readline::new(
            "> ".into(),
            Size::new((width(80), height(24))),
            output_device,
            input_device,
            shutdown_sender.clone(),
        );
        (readline, stdout_mock, shutdown_sender)
    }

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn help_completer() -> impl Completer + 'static {
        completer_fn(|line: &str| {
            let candidates = ["help", "hello", "history"]
                .into_iter()
                .filter(|it| it.starts_with(line));
            Ok(CompletionResult::new(
                vec![CompletionGroup::unlabeled(candidates)],
                line,
            ))
        })
    }

    #[tokio::test]
    async fn test_readline_returns_line() {
        let (mut readline, stdout_mock, _shutdown_sender) = new_readline(vec![
            key_event(KeyCode::Char('h')),
            key_event(KeyCode::Char('i')),
            key_event(KeyCode::Enter),
        ]);

        let event = readline.readline().await.unwrap();
        assert_eq!(event, ReadlineEvent::Line("hi".into()));
        assert_eq!(stdout_mock.get_copy_of_writes_as_strings(), vec![
            "\x1b[1G\x1b[0J> \x1b[3G".to_string(),
            "h".to_string(),
            "i".to_string(),
            "\r\n".to_string(),
        ]);
    }

    #[tokio::test]
    async fn test_end_of_stream_is_eof() {
        let (mut readline, stdout_mock, _shutdown_sender) = new_readline(vec![]);
        assert_eq!(readline.readline().await.unwrap(), ReadlineEvent::Eof);
        // Only the prompt was written.
        assert_eq!(stdout_mock.write_count(), 1);
    }

    #[tokio::test]
    async fn test_prompt_is_rendered_again_after_line() {
        let (mut readline, stdout_mock, _shutdown_sender) = new_readline(vec![
            key_event(KeyCode::Enter),
        ]);
        assert_eq!(
            readline.readline().await.unwrap(),
            ReadlineEvent::Line(String::new())
        );
        stdout_mock.take_buffer_as_string();
        assert_eq!(readline.readline().await.unwrap(), ReadlineEvent::Eof);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[1G\x1b[0J> \x1b[3G"
        );
    }

    #[test]
    fn test_tab_inserts_common_prefix() {
        let (readline, stdout_mock, _shutdown_sender) = new_readline(vec![]);
        let mut readline = readline.with_completer(help_completer());

        readline.apply_event(plain(Key::Character('h')));
        readline.apply_event(plain(Key::Character('i')));
        assert!(matches!(readline.apply_event(tab()), ControlFlowExtended::Continue));
        assert_eq!(readline.line_state.line, "history");
        assert_eq!(stdout_mock.get_copy_of_writes_as_strings(), vec![
            "h".to_string(),
            "i".to_string(),
            "story".to_string(),
        ]);
    }

    #[test]
    fn test_tab_twice_lists_candidates() {
        let (readline, stdout_mock, _shutdown_sender) = new_readline(vec![]);
        let mut readline = readline.with_completer(help_completer());

        readline.apply_event(plain(Key::Character('h')));
        readline.apply_event(tab());
        assert_eq!(stdout_mock.write_count(), 1);

        readline.apply_event(tab());
        assert_eq!(stdout_mock.write_count(), 2);
        assert_eq!(
            stdout_mock.get_copy_of_writes_as_strings()[1],
            "\r\nhelp     hello    history\r\n\r\n\x1b[1G\x1b[0J> h\x1b[4G"
        );
        assert_eq!(readline.completion_state(), CompletionState::Idle);
    }

    #[test]
    fn test_list_on_first_tab() {
        let (readline, stdout_mock, _shutdown_sender) = new_readline(vec![]);
        let mut readline = readline.with_completer(help_completer());
        readline.show_completions_on_first_tab(true);

        readline.apply_event(plain(Key::Character('h')));
        readline.apply_event(tab());
        assert_eq!(stdout_mock.write_count(), 2);
        assert!(stdout_mock.get_copy_of_writes_as_strings()[1].starts_with("\r\nhelp"));
    }

    #[test]
    fn test_other_key_between_tabs_resets() {
        let (readline, stdout_mock, _shutdown_sender) = new_readline(vec![]);
        let mut readline = readline.with_completer(help_completer());

        readline.apply_event(plain(Key::Character('h')));
        readline.apply_event(tab());
        readline.apply_event(plain(Key::SpecialKey(SpecialKey::Left)));
        readline.apply_event(plain(Key::SpecialKey(SpecialKey::Right)));
        stdout_mock.take_buffer_as_string();
        readline.apply_event(tab());
        assert_eq!(stdout_mock.write_count(), 0);
    }

    #[test]
    fn test_tab_without_completer_inserts_tab() {
        let (mut readline, _stdout_mock, _shutdown_sender) = new_readline(vec![]);
        readline.apply_event(tab());
        assert_eq!(readline.line_state.line, "\t");
    }

    #[test]
    fn test_ctrl_modifiers() {
        let (mut readline, _stdout_mock, _shutdown_sender) = new_readline(vec![]);
        let ctrl_c = InputEvent::Keyboard(KeyPress::WithModifiers {
            key: Key::Character('c'),
            mask: ModifierKeysMask::new().with_ctrl(),
        });
        let alt_c = InputEvent::Keyboard(KeyPress::WithModifiers {
            key: Key::Character('c'),
            mask: ModifierKeysMask::new().with_alt(),
        });
        let shift_c = InputEvent::Keyboard(KeyPress::WithModifiers {
            key: Key::Character('C'),
            mask: ModifierKeysMask::new().with_shift(),
        });

        assert!(matches!(readline.apply_event(alt_c), ControlFlowExtended::Continue));
        assert!(matches!(readline.apply_event(shift_c), ControlFlowExtended::Continue));
        assert_eq!(readline.line_state.line, "C");
        assert!(matches!(
            readline.apply_event(ctrl_c),
            ControlFlowExtended::ReturnOk(ReadlineEvent::Interrupted)
        ));
    }

    #[tokio::test]
    async fn test_deferred_completion_is_pending_until_settled() {
        let (readline, stdout_mock, shutdown_sender) = new_readline(vec![]);
        let mut readline = readline.with_completer(async_completer_fn(|line: &str| {
            let line = line.to_owned();
            async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                Ok::<_, CompletionError>(CompletionResult::new(
                    vec![CompletionGroup::unlabeled(["help"])],
                    line,
                ))
            }
        }));

        readline.apply_event(plain(Key::Character('h')));
        readline.apply_event(tab());
        assert!(readline.pending_completion.is_some());
        assert_eq!(readline.completion_state(), CompletionState::AwaitingCompletion);
        assert_eq!(readline.line_state.line, "h");

        let mut receiver = shutdown_sender.subscribe();
        readline.settle_pending_completion(&mut receiver).await.unwrap();
        assert!(readline.pending_completion.is_none());
        assert_eq!(readline.completion_state(), CompletionState::Idle);
        assert_eq!(readline.line_state.line, "help");
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "help");
    }

    #[tokio::test]
    async fn test_tab_while_pending_keeps_first_completion() {
        let (readline, stdout_mock, shutdown_sender) = new_readline(vec![]);
        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = Arc::clone(&call_count);
        let mut readline = readline.with_completer(async_completer_fn(move |line: &str| {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
            let line = line.to_owned();
            async move {
                Ok::<_, CompletionError>(CompletionResult::new(
                    vec![CompletionGroup::unlabeled(["help", "hello"])],
                    line,
                ))
            }
        }));

        readline.apply_event(plain(Key::Character('h')));
        readline.apply_event(tab());
        let snapshot = readline.pending_completion.as_ref().map(|it| it.snapshot.clone());
        assert!(matches!(readline.apply_event(tab()), ControlFlowExtended::Continue));

        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        let pending = readline.pending_completion.as_ref().unwrap();
        assert_eq!(Some(pending.snapshot.clone()), snapshot);
        assert!(!pending.last_key_was_tab);

        // Settled as a first `Tab`: the common prefix is inserted, no list.
        let mut receiver = shutdown_sender.subscribe();
        readline.settle_pending_completion(&mut receiver).await.unwrap();
        assert_eq!(readline.line_state.line, "hel");
        assert_eq!(stdout_mock.get_copy_of_writes_as_strings(), vec![
            "h".to_string(),
            "el".to_string(),
        ]);
    }

    #[tokio::test]
    async fn test_stale_completion_is_discarded() {
        let (readline, stdout_mock, shutdown_sender) = new_readline(vec![]);
        let mut readline = readline.with_completer(async_completer_fn(|line: &str| {
            let line = line.to_owned();
            async move {
                Ok::<_, CompletionError>(CompletionResult::new(
                    vec![CompletionGroup::unlabeled(["help"])],
                    line,
                ))
            }
        }));

        readline.apply_event(plain(Key::Character('h')));
        readline.apply_event(tab());
        readline.line_state.line.push('x');
        readline.line_state.line_cursor += 1;
        stdout_mock.take_buffer_as_string();

        let mut receiver = shutdown_sender.subscribe();
        readline.settle_pending_completion(&mut receiver).await.unwrap();
        assert!(readline.pending_completion.is_none());
        assert_eq!(readline.line_state.line, "hx");
        assert_eq!(stdout_mock.write_count(), 0);
    }

    #[tokio::test]
    async fn test_readline_is_cancel_safe_while_pending() {
        let (readline, stdout_mock, _shutdown_sender) =
            new_readline(vec![key_event(KeyCode::Char('h')), key_event(KeyCode::Tab)]);
        let mut readline = readline.with_completer(async_completer_fn(|line: &str| {
            let line = line.to_owned();
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok::<_, CompletionError>(CompletionResult::new(
                    vec![CompletionGroup::unlabeled(["help"])],
                    line,
                ))
            }
        }));

        // Drop the readline future while the completion is pending.
        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), readline.readline()).await;
        assert!(timed_out.is_err());
        assert!(readline.pending_completion.is_some());

        // The next call resumes it, then the stream ends.
        assert_eq!(readline.readline().await.unwrap(), ReadlineEvent::Eof);
        assert_eq!(readline.line_state.line, "help");
        assert_eq!(stdout_mock.get_copy_of_writes_as_strings().last().unwrap(), "elp");
    }
}
