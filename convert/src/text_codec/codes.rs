// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write;

use crate::{ConversionError, Radix};

/// Sentinel token emitted for characters above `U+00FF` (out of displayable
/// one-byte range; not an error for the whole string).
pub const OUT_OF_RANGE_SENTINEL: &str = "[?]";

/// The three parallel code sequences produced by [`text_to_codes`], one token
/// per character of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeSequences {
    pub hex: String,
    pub dec: String,
    pub bin: String,
}

/// Successful outcome of [`codes_to_text`]. Empty (post-cleanup) input is a
/// distinguished success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextDecode {
    Empty,
    Text(String),
}

/// Map every character of `text` to its byte code in hex, decimal, and
/// binary, space-joined. Characters above `U+00FF` become
/// [`OUT_OF_RANGE_SENTINEL`] in all three sequences.
#[must_use]
pub fn text_to_codes(text: &str) -> CodeSequences {
    let mut acc = CodeSequences::default();

    for (index, ch) in text.chars().enumerate() {
        if index > 0 {
            acc.hex.push(' ');
            acc.dec.push(' ');
            acc.bin.push(' ');
        }

        let code = u32::from(ch);
        if code <= 255 {
            // We don't care about the result of these operations.
            write!(acc.hex, "{code:02X}").ok();
            write!(acc.dec, "{code}").ok();
            write!(acc.bin, "{code:08b}").ok();
        } else {
            acc.hex.push_str(OUT_OF_RANGE_SENTINEL);
            acc.dec.push_str(OUT_OF_RANGE_SENTINEL);
            acc.bin.push_str(OUT_OF_RANGE_SENTINEL);
        }
    }

    acc
}

/// Parse a space-separated sequence of byte codes in the given [`Radix`] back
/// into text.
///
/// Consecutive whitespace (including newlines) collapses to single
/// separators and surrounding whitespace is trimmed before splitting. The
/// conversion is all-or-nothing.
///
/// # Errors
///
/// - [`InvalidCharacter`] if any token does not parse in the radix.
/// - [`OutOfRange`] if any token's value is above 255.
///
/// [`InvalidCharacter`]: ConversionError::InvalidCharacter
/// [`OutOfRange`]: ConversionError::OutOfRange
pub fn codes_to_text(codes: &str, radix: Radix) -> Result<TextDecode, ConversionError> {
    let mut text = String::new();
    let mut saw_token = false;

    for token in codes.split_whitespace() {
        saw_token = true;

        let value = u32::from_str_radix(token, radix.base()).map_err(|_| {
            ConversionError::InvalidCharacter {
                token: token.to_string(),
            }
        })?;

        if value > 255 {
            return Err(ConversionError::OutOfRange {
                token: token.to_string(),
            });
        }

        #[allow(clippy::cast_possible_truncation)]
        text.push(char::from(value as u8));
    }

    if saw_token {
        Ok(TextDecode::Text(text))
    } else {
        Ok(TextDecode::Empty)
    }
}
