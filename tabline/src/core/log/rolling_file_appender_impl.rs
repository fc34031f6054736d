// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Create a file appender that never rolls over. Note that if you wrap this up in a non
/// blocking writer, it doesn't work. Here's an example of this:
/// `tracing_appender::non_blocking(try_create("foo")?)`
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_in_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("tabline.log");
        let appender = try_create(file_path.to_str().unwrap());
        assert!(appender.is_ok());
        assert!(file_path.exists());
    }

    #[test]
    fn test_try_create_without_file_name() {
        assert!(try_create("/").is_err());
    }
}
