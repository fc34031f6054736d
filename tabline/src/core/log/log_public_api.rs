// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TracingConfig, ok};
use tracing::dispatcher;
use tracing_core::LevelFilter;

/// Global default subscriber, which once set, can't be unset or changed. This is great
/// for apps. Accepts anything that converts [`Into<TracingConfig>`], eg: a
/// [`tracing::Level`] logs to [`crate::tracing_config_options::DEFAULT_LOG_FILE_NAME`].
///
/// If the level filter is [`LevelFilter::OFF`] nothing is installed, and the
/// [`tracing::info!`], [`tracing::debug!`], etc. macros are no-ops.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which is great for tests. Logging stops when the returned
/// guard is dropped.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_off_installs_nothing() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
    }
}
