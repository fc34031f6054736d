// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal units. A [`ColWidth`] is a count of terminal columns (1 based, how wide
//! something is) and a [`ColIndex`] is a position (0 based, where something is). Keeping
//! them apart prevents the classic off by one between "cursor is at column 4" and "CSI
//! 5 G moves the cursor there".

use std::{fmt::{Display, Formatter, Result},
          ops::{Add, AddAssign, Sub}};

/// Number of terminal columns occupied by something. Eg: the display width of `あ` is
/// `2`, the display width of `"> "` is `2`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColWidth(pub u16);

/// 0 based terminal column position.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColIndex(pub u16);

/// Number of terminal rows.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowHeight(pub u16);

/// Terminal dimensions: `col_width` (columns) and `row_height` (rows).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub col_width: ColWidth,
    pub row_height: RowHeight,
}

pub fn width(arg: impl Into<ColWidth>) -> ColWidth { arg.into() }

pub fn col(arg: impl Into<ColIndex>) -> ColIndex { arg.into() }

pub fn height(arg: impl Into<RowHeight>) -> RowHeight { arg.into() }

/// Saturating conversion, terminal dimensions never exceed [`u16::MAX`].
#[must_use]
pub fn u16_saturating(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

impl ColWidth {
    #[must_use]
    pub fn as_usize(&self) -> usize { usize::from(self.0) }
}

impl ColIndex {
    /// `CSI n G` is 1 based, while [`ColIndex`] is 0 based.
    #[must_use]
    pub fn as_one_based(&self) -> u16 { self.0.saturating_add(1) }
}

impl Size {
    #[must_use]
    pub fn new((col_width, row_height): (ColWidth, RowHeight)) -> Self {
        Self {
            col_width,
            row_height,
        }
    }
}

/// Convert `(columns, rows)` as returned by [`crossterm::terminal::size()`].
impl From<(u16, u16)> for Size {
    fn from((cols, rows): (u16, u16)) -> Self { Size::new((width(cols), height(rows))) }
}

/// Negative values clamp to `0`, large values clamp to [`u16::MAX`]. Untyped integer
/// literals, eg: `width(80)`, fall back to `i32`.
fn i32_to_u16_clamped(value: i32) -> u16 { u16::try_from(value.max(0)).unwrap_or(u16::MAX) }

mod convert {
    use super::{ColIndex, ColWidth, RowHeight, i32_to_u16_clamped, u16_saturating};

    impl From<u16> for ColWidth {
        fn from(it: u16) -> Self { ColWidth(it) }
    }

    impl From<usize> for ColWidth {
        fn from(it: usize) -> Self { ColWidth(u16_saturating(it)) }
    }

    impl From<i32> for ColWidth {
        fn from(it: i32) -> Self { ColWidth(i32_to_u16_clamped(it)) }
    }

    impl From<u16> for ColIndex {
        fn from(it: u16) -> Self { ColIndex(it) }
    }

    impl From<usize> for ColIndex {
        fn from(it: usize) -> Self { ColIndex(u16_saturating(it)) }
    }

    impl From<i32> for ColIndex {
        fn from(it: i32) -> Self { ColIndex(i32_to_u16_clamped(it)) }
    }

    impl From<u16> for RowHeight {
        fn from(it: u16) -> Self { RowHeight(it) }
    }

    impl From<usize> for RowHeight {
        fn from(it: usize) -> Self { RowHeight(u16_saturating(it)) }
    }

    impl From<i32> for RowHeight {
        fn from(it: i32) -> Self { RowHeight(i32_to_u16_clamped(it)) }
    }
}

impl Add for ColWidth {
    type Output = ColWidth;
    fn add(self, rhs: Self) -> Self::Output { ColWidth(self.0.saturating_add(rhs.0)) }
}

impl AddAssign for ColWidth {
    fn add_assign(&mut self, rhs: Self) { self.0 = self.0.saturating_add(rhs.0); }
}

impl Sub for ColWidth {
    type Output = ColWidth;
    fn sub(self, rhs: Self) -> Self::Output { ColWidth(self.0.saturating_sub(rhs.0)) }
}

impl Display for ColWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}
