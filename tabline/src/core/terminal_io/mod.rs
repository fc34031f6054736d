// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod input_device;
pub mod input_event;
pub mod output_device;
pub mod term;
pub mod terminal_io_type_aliases;

// Re-export.
pub use input_device::*;
pub use input_event::*;
pub use output_device::*;
pub use term::*;
pub use terminal_io_type_aliases::*;
