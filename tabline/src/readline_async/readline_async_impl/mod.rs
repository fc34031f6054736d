// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod line_state;
pub mod readline;

// Re-export.
pub use line_state::*;
pub use readline::*;
