// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Async readline with tab completion.
//!
//! | Module                 | Responsibility                                            |
//! |------------------------|-----------------------------------------------------------|
//! | `completion`           | Candidates, completers, resolving results, list layout    |
//! | `readline_async_impl`  | [`Readline`] event loop and the [`LineState`] editor      |
//! | `readline_async_api`   | [`ReadlineAsyncContext`], raw mode and real terminal I/O  |

// Attach.
pub mod completion;
pub mod readline_async_api;
pub mod readline_async_impl;

// Re-export.
pub use completion::*;
pub use readline_async_api::*;
pub use readline_async_impl::*;
