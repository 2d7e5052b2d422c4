// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Validating parsers for the three textual color forms.
//!
//! The triplet parsers are free-form on purpose: users paste `rgb(0, 123,
//! 255)`, `0,123,255`, `0 123 255`, or `hsl(211, 100%, 50%)` and all of them
//! work. The parser scans for the first three decimal digit runs and ignores
//! everything in between; range validation happens after extraction, so a
//! well-formed triplet with a channel of `999` reports [`OutOfRange`] rather
//! than [`FormatMismatch`].
//!
//! [`OutOfRange`]: ConversionError::OutOfRange
//! [`FormatMismatch`]: ConversionError::FormatMismatch

use nom::{IResult, Parser,
          bytes::complete::take_while,
          character::complete::digit1,
          sequence::preceded};

use crate::{ConversionError, HslColor, RgbColor};

/// Parse a `#RRGGBB` string (the `#` is optional) into an [`RgbColor`].
///
/// # Errors
///
/// [`FormatMismatch`] unless the text is exactly 6 hex digits after the
/// optional `#`.
///
/// [`FormatMismatch`]: ConversionError::FormatMismatch
pub fn parse_hex(text: &str) -> Result<RgbColor, ConversionError> {
    const EXPECTED: &str = "#RRGGBB";

    let trimmed = text.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(ConversionError::FormatMismatch { expected: EXPECTED });
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| ConversionError::FormatMismatch { expected: EXPECTED })
    };

    Ok(RgbColor {
        red: channel(0..2)?,
        green: channel(2..4)?,
        blue: channel(4..6)?,
    })
}

/// Parse a free-form RGB triplet into an [`RgbColor`].
///
/// # Errors
///
/// - [`FormatMismatch`] if fewer than three numbers are present.
/// - [`OutOfRange`] if any channel is above 255.
///
/// [`FormatMismatch`]: ConversionError::FormatMismatch
/// [`OutOfRange`]: ConversionError::OutOfRange
pub fn parse_rgb_triplet(text: &str) -> Result<RgbColor, ConversionError> {
    let (r, g, b) = extract_triplet(text, "rgb(r, g, b)")?;

    let channel = |token: &str| -> Result<u8, ConversionError> {
        let value = parse_extracted_number(token)?;
        u8::try_from(value).map_err(|_| ConversionError::OutOfRange {
            token: token.to_string(),
        })
    };

    Ok(RgbColor {
        red: channel(r)?,
        green: channel(g)?,
        blue: channel(b)?,
    })
}

/// Parse a free-form HSL triplet into an [`HslColor`].
///
/// # Errors
///
/// - [`FormatMismatch`] if fewer than three numbers are present.
/// - [`OutOfRange`] if hue is above 360, or saturation/lightness above 100.
///
/// [`FormatMismatch`]: ConversionError::FormatMismatch
/// [`OutOfRange`]: ConversionError::OutOfRange
pub fn parse_hsl_triplet(text: &str) -> Result<HslColor, ConversionError> {
    let (h, s, l) = extract_triplet(text, "hsl(h, s%, l%)")?;

    let bounded = |token: &str, max: u32| -> Result<u32, ConversionError> {
        let value = parse_extracted_number(token)?;
        if value > max {
            return Err(ConversionError::OutOfRange {
                token: token.to_string(),
            });
        }
        Ok(value)
    };

    #[allow(clippy::cast_possible_truncation)]
    Ok(HslColor {
        hue: bounded(h, 360)? as u16,
        saturation: bounded(s, 100)? as u8,
        lightness: bounded(l, 100)? as u8,
    })
}

/// Skip any non-digit noise (separators, `rgb(`, `%`, whitespace) and take
/// the next run of decimal digits.
fn next_digit_run(input: &str) -> IResult<&str, &str> {
    preceded(
        /* discarded noise */ take_while(|ch: char| !ch.is_ascii_digit()),
        /* output */ digit1,
    )
    .parse(input)
}

/// Extract the first three digit runs from free-form text.
fn extract_triplet<'a>(
    text: &'a str,
    expected: &'static str,
) -> Result<(&'a str, &'a str, &'a str), ConversionError> {
    (next_digit_run, next_digit_run, next_digit_run)
        .parse(text)
        .map(|(_remainder, triplet)| triplet)
        .map_err(|_| ConversionError::FormatMismatch { expected })
}

/// A digit run longer than [`u32`] can hold is out of range by definition.
fn parse_extracted_number(token: &str) -> Result<u32, ConversionError> {
    token.parse::<u32>().map_err(|_| ConversionError::OutOfRange {
        token: token.to_string(),
    })
}
