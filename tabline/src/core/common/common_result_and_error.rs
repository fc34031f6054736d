// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// Type alias to make it easy to work with [`Result`]s. Works hand in hand with
/// [`miette`] reports and any other type of error that can be converted into one.
///
/// # Example
///
/// ```
/// use tabline::{CommonResult, ok};
///
/// fn parse_columns(arg: &str) -> CommonResult<u16> {
///     let value = arg.parse::<u16>().map_err(|err| miette::miette!("{err}"))?;
///     ok!(value)
/// }
///
/// assert_eq!(parse_columns("80").unwrap(), 80);
/// assert!(parse_columns("eighty").is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Disambiguate the type of `StdMutex` from stdlib and tokio to avoid conflicts.
pub type StdMutex<T> = std::sync::Mutex<T>;

/// Stack allocated vector for small collections, like the mock input event lists used
/// in tests.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
