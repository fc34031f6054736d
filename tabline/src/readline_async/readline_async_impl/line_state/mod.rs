// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line editing state for async readline.
//!
//! | Module              | Responsibility                                                |
//! |---------------------|---------------------------------------------------------------|
//! | `core`              | [`LineState`] struct, cursor and end of input positions       |
//! | `render`            | [`RenderPass`], refresh line, insertion, cursor moves         |
//! | `event_handlers`    | Keyboard event dispatch (Ctrl and regular keys), resize       |
//! | `completion_render` | Applying completion results, candidate list, error message    |
//!
//! # Cursor positions
//!
//! The cursor is a byte index into the line that always sits on a grapheme cluster
//! boundary. Terminal positions are derived from it with [`crate::display_pos`], using
//! display widths, so CJK characters and emoji (2 columns) and characters outside the
//! Basic Multilingual Plane (1 column, 4 bytes) all land where the terminal puts them.

// Private modules organized by functional responsibility.
mod completion_render;
mod core;
mod event_handlers;
mod render;

// Public re-exports (expose stable API).
pub use completion_render::*;
pub use core::*;
pub use event_handlers::*;
pub use render::*;
