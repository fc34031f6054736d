// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # tabline
//!
//! An async, non-blocking replacement for [`std::io::BufRead::read_line`] whose main
//! feature is tab completion that renders correctly for any Unicode input: CJK
//! characters, characters outside the Basic Multilingual Plane, and emoji are all
//! measured by their terminal display width, not by their byte or code unit length.
//!
//! # Features
//!
//! 1. Multi column completion lists. Candidates are grouped (with optional labels),
//!    laid out row major in as many columns as the terminal width allows, and padded
//!    with spaces so that columns line up for wide characters too.
//! 2. Synchronous and asynchronous completers. A [`Completer`] returns either
//!    [`CompleterOutput::Immediate`] or [`CompleterOutput::Deferred`]. While a deferred
//!    completion is pending, input events are not consumed, so they queue up in arrival
//!    order and are processed once it resolves.
//! 3. Completer failures never crash the session. They are displayed inline as
//!    `Tab completion error: <message>` and editing continues.
//! 4. Exactly one write to the terminal per render pass. This keeps output efficient
//!    over SSH and makes the byte stream deterministic and testable.
//!
//! # How to use it
//!
//! For a real terminal use [`ReadlineAsyncContext::try_new()`]. For tests (or any other
//! input and output), create a [`Readline`] directly with [`Readline::new()`] and
//! inject an [`OutputDevice`] and [`InputDevice`] (see [`OutputDeviceExt::new_mock()`]
//! and [`InputDeviceExtMock::new_mock()`]).
//!
//! ```no_run
//! use tabline::{CompletionGroup, CompletionResult, ReadlineAsyncContext, ReadlineEvent,
//!               completer_fn};
//!
//! # async fn run() -> miette::Result<()> {
//! let completer = completer_fn(|line: &str| {
//!     let commands = ["help", "history", "hello"];
//!     let matches = commands.iter().filter(|it| it.starts_with(line));
//!     Ok(CompletionResult::new(
//!         vec![CompletionGroup::unlabeled(matches)],
//!         line,
//!     ))
//! });
//!
//! let Some(mut rl_ctx) = ReadlineAsyncContext::try_new(Some("> "), completer)? else {
//!     return Ok(());
//! };
//! loop {
//!     match rl_ctx.read_line().await? {
//!         ReadlineEvent::Line(line) => println!("{line}\r"),
//!         ReadlineEvent::Resized => {}
//!         ReadlineEvent::Eof | ReadlineEvent::Interrupted => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`std::io::BufRead::read_line`]: std::io::BufRead::read_line

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod demo;
pub mod readline_async;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
pub use readline_async::*;
