// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pieces of the `tabline` binary: command line options, a completer that shows off
//! groups, wide characters, deferred results and errors, and the REPL commands.

// Attach.
pub mod clap_config;
pub mod demo_completer;
pub mod repl;

// Re-export.
pub use clap_config::*;
pub use demo_completer::*;
pub use repl::*;
