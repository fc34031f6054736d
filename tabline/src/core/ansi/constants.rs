// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Control Sequence Introducer: `ESC [`.
pub const CSI_START: &str = "\x1b[";

/// Cursor Up (CUU): `ESC [ n A`.
pub const CUU_CURSOR_UP: char = 'A';

/// Cursor Down (CUD): `ESC [ n B`.
pub const CUD_CURSOR_DOWN: char = 'B';

/// Cursor Horizontal Absolute (CHA): `ESC [ n G`. The column is 1 based.
pub const CHA_CURSOR_COLUMN: char = 'G';

/// Cursor Position (CUP): `ESC [ row ; col H`. Both are 1 based.
pub const CUP_CURSOR_POSITION: char = 'H';

/// Erase Display (ED): `ESC [ n J`.
pub const ED_ERASE_DISPLAY: char = 'J';

/// ED parameter: erase from the cursor to the end of the screen.
pub const ED_ERASE_TO_END: u16 = 0;

/// ED parameter: erase the entire screen.
pub const ED_ERASE_ALL: u16 = 2;

/// Line break used in raw mode, where `\n` alone does not return the carriage.
pub const CRLF: &str = "\r\n";
