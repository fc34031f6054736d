// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::StdMutex;
use std::{io::{Result, Write},
          sync::Arc};
use strip_ansi_escapes::strip;

/// You can safely clone this struct, since it only contains [Arc]s. The inner buffers
/// are not cloned, just the [Arc]s.
///
/// Besides the bytes, every call to [`Write::write`] is recorded separately, so that
/// tests can assert on how many writes a render pass produced, and on the exact bytes
/// of each one.
///
/// The main constructors are:
/// - [`StdoutMock::default`]
/// - [`StdoutMock::new`]
/// - [`super::OutputDeviceExt::new_mock()`]
#[derive(Clone, Default)]
#[allow(missing_debug_implementations)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<Vec<u8>>>,
    pub writes: Arc<StdMutex<Vec<Vec<u8>>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

#[allow(clippy::missing_panics_doc)]
impl StdoutMock {
    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.buffer.lock().unwrap().clone() }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer_data).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        let buffer_data = strip(buffer_data.as_slice());
        String::from_utf8_lossy(&buffer_data).into_owned()
    }

    /// Number of [`Write::write`] calls with a non empty buffer so far.
    #[must_use]
    pub fn write_count(&self) -> usize { self.writes.lock().unwrap().len() }

    /// Each [`Write::write`] call, as a string.
    #[must_use]
    pub fn get_copy_of_writes_as_strings(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|it| String::from_utf8_lossy(it).into_owned())
            .collect()
    }

    /// Return everything written so far, and forget it. Useful to assert on the output
    /// of one render pass at a time.
    pub fn take_buffer_as_string(&self) -> String {
        self.writes.lock().unwrap().clear();
        let buffer_data = std::mem::take(&mut *self.buffer.lock().unwrap());
        String::from_utf8_lossy(&buffer_data).into_owned()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if !buf.is_empty() {
            self.writes.lock().unwrap().push(buf.to_vec());
        }
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_mock_no_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        let stdout_mock_clone = stdout_mock.clone(); // Points to the same inner value.

        let normal_text = "hello world";

        stdout_mock.write_all(normal_text.as_bytes()).unwrap();
        stdout_mock.flush().unwrap();

        pretty_assertions::assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            normal_text
        );
        pretty_assertions::assert_eq!(
            stdout_mock_clone.get_copy_of_buffer_as_string(),
            normal_text
        );
    }

    #[test]
    fn test_stdout_mock_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();

        let normal_text = "hello world";
        let red_text = format!("\x1b[31m{normal_text}\x1b[0m");

        stdout_mock.write_all(red_text.as_bytes()).unwrap();

        pretty_assertions::assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            normal_text
        );
    }

    #[test]
    fn test_stdout_mock_counts_writes() {
        let mut stdout_mock = StdoutMock::default();

        stdout_mock.write_all(b"one").unwrap();
        stdout_mock.write_all(b"").unwrap();
        stdout_mock.write_all(b"two").unwrap();

        assert_eq!(stdout_mock.write_count(), 2);
        assert_eq!(stdout_mock.get_copy_of_writes_as_strings(), vec!["one", "two"]);

        assert_eq!(stdout_mock.take_buffer_as_string(), "onetwo");
        assert_eq!(stdout_mock.write_count(), 0);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }
}
