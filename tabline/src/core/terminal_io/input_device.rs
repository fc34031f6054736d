// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CrosstermEventResult, InputEvent, PinnedInputStream};
use crossterm::event::EventStream;
use futures_util::StreamExt;
use std::io;

/// This struct represents an input device that can be used to read from the terminal.
/// See [`crate::InputDeviceExtMock`] for testing features.
#[allow(missing_debug_implementations)]
pub struct InputDevice {
    pub resource: PinnedInputStream<CrosstermEventResult>,
}

impl InputDevice {
    #[must_use]
    pub fn new_event_stream() -> InputDevice {
        InputDevice {
            resource: Box::pin(EventStream::new()),
        }
    }
}

impl InputDevice {
    /// Get the next event the line editor can handle, skipping the ones it can't (see
    /// [`InputEvent::from_crossterm_event`]). Returns [None] when the stream has ended.
    ///
    /// This is cancel safe: an event is either fully taken from the stream and returned,
    /// or left in the stream.
    pub async fn next_input_event(&mut self) -> Option<io::Result<InputEvent>> {
        loop {
            match self.resource.next().await? {
                Ok(event) => {
                    if let Some(input_event) = InputEvent::from_crossterm_event(event) {
                        return Some(Ok(input_event));
                    }
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
