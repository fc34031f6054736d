// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by default. Raw mode owns the terminal while the line editor
//! runs, so logging to a file is usually what you want (see
//! [`try_initialize_logging_global`]).

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
