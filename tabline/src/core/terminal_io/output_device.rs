// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SafeRawTerminal, SendRawTerminal, StdMutex};
use std::sync::Arc;

pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// This struct represents an output device that the line editor writes rendered bytes
/// to.
/// - It is safe to clone.
/// - To write to it, see the examples in [`Self::lock()`] or the
///   [`crate::lock_output_device_as_mut`] macro.
/// - Tests use [`crate::OutputDeviceExt::new_mock()`] to capture what was written.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }
}

impl OutputDevice {
    /// Locks the output device for writing.
    ///
    /// ```
    /// use tabline::{LockedOutputDevice, OutputDevice};
    ///
    /// let device = OutputDevice::new_stdout();
    /// let mut_ref: LockedOutputDevice<'_> = &mut *device.lock();
    /// let _ = mut_ref.write_all(b"Hello, world!\n");
    /// ```
    ///
    /// # Panics
    ///
    /// This method will panic if the mutex is poisoned, which can happen if a thread
    /// panics while holding the lock.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock_output_device_as_mut;

    #[test]
    fn test_stdout_output_device() {
        let output_device = OutputDevice::new_stdout();
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(output_device);
        drop(mut_ref.write_all(b""));
        assert!(!output_device.is_mock);
    }
}
