use std::{ffi::OsStr, num::NonZeroU32, str::FromStr};

use crate::arg_parse_err::ArgParseErr;

/// Strips leading and trailing whitespace from an input string slice
/// and attempts to parse the remaining string into a specified numeric type `T`.
pub fn strip_and_parse_number<T>(input: &str) -> Result<T, T::Err>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    input.trim().parse::<T>()
}

/// Parses a pixel offset such as the value of `-x`: zero or greater.
pub fn parse_offset(value: &OsStr) -> Result<u32, ArgParseErr> {
    let number = parse_integer(value)?;
    if number < 0 {
        return Err(ArgParseErr::with_msg("must not be negative"));
    }
    u32::try_from(number).map_err(|_| ArgParseErr::with_msg("value is too large"))
}

/// Parses a crop extent such as the value of `--width`: strictly greater than zero.
pub fn parse_extent(value: &OsStr) -> Result<NonZeroU32, ArgParseErr> {
    let number = parse_integer(value)?;
    if number <= 0 {
        return Err(ArgParseErr::with_msg("must be a positive integer"));
    }
    let number = u32::try_from(number).map_err(|_| ArgParseErr::with_msg("value is too large"))?;
    NonZeroU32::new(number).ok_or_else(|| ArgParseErr::with_msg("must be a positive integer"))
}

fn parse_integer(value: &OsStr) -> Result<i64, ArgParseErr> {
    let value = value.to_str().ok_or_else(ArgParseErr::new)?;
    Ok(strip_and_parse_number::<i64>(value)?)
}
