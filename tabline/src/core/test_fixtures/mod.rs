// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Dependency injection fixtures. [`StdoutMock`] stands in for the terminal output and
//! records every `write` call, [`InputDeviceExtMock`] turns a list of `crossterm` events
//! into an [`crate::InputDevice`].

// Attach sources.
pub mod async_input_stream_mock;
pub mod input_device_ext_mock;
pub mod output_device_ext;
pub mod stdout_mock;

// Re-export.
pub use async_input_stream_mock::*;
pub use input_device_ext_mock::*;
pub use output_device_ext::*;
pub use stdout_mock::*;
