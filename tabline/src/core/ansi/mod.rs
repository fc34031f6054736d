// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The small subset of ANSI escape sequences that line editing needs: absolute column
//! moves, relative row moves, and erasing the display below the cursor.

// Attach.
pub mod constants;
pub mod csi_sequence;

// Re-export.
pub use constants::*;
pub use csi_sequence::*;
