// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unicode display width and grapheme cluster navigation. Everything that lands on the
//! terminal is measured in display columns (see [`crate::ColWidth`]), never in bytes or
//! `char`s, so that CJK characters, characters outside the Basic Multilingual Plane and
//! emoji line up.

// Attach.
pub mod display_width;
pub mod grapheme_nav;

// Re-export.
pub use display_width::*;
pub use grapheme_nav::*;
