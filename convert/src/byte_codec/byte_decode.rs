// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ConversionError, Radix};

/// Successful outcome of [`decode`]. Empty (post-trim) input is a
/// distinguished success, not an error - callers render it as a blank field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteDecode {
    Empty,
    Value(u8),
}

/// Parse `text` as a byte in the given [`Radix`].
///
/// Surrounding whitespace is stripped first. The whole (trimmed) token must
/// parse: `"1G"` in hex is [`InvalidCharacter`], not `1`. A token that parses
/// but lands outside `0..=255` (including negatives) is [`OutOfRange`].
///
/// # Errors
///
/// - [`InvalidCharacter`] if the token contains non-digits for the radix.
/// - [`OutOfRange`] if the parsed value is outside `0..=255`.
///
/// [`InvalidCharacter`]: ConversionError::InvalidCharacter
/// [`OutOfRange`]: ConversionError::OutOfRange
pub fn decode(text: &str, radix: Radix) -> Result<ByteDecode, ConversionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(ByteDecode::Empty);
    }

    // i64 (not u8) so that negative input reports OutOfRange, not
    // InvalidCharacter. Same for a digit run too long for i64: the digits are
    // all valid, the magnitude is the problem.
    let value = i64::from_str_radix(trimmed, radix.base()).map_err(|error| {
        use std::num::IntErrorKind;
        match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ConversionError::OutOfRange {
                    token: trimmed.to_string(),
                }
            }
            _ => ConversionError::InvalidCharacter {
                token: trimmed.to_string(),
            },
        }
    })?;

    if !(0..=255).contains(&value) {
        return Err(ConversionError::OutOfRange {
            token: trimmed.to_string(),
        });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(ByteDecode::Value(value as u8))
}

/// Maximum digit count a byte field can hold in the given radix: 3 decimal
/// digits, 8 binary digits, 2 hex digits. The IP-octet widget uses this as
/// its per-field length ceiling for overwrite-and-advance behavior.
#[must_use]
pub fn max_digits(radix: Radix) -> usize {
    match radix {
        Radix::Binary => 8,
        Radix::Decimal => 3,
        Radix::Hexadecimal => 2,
    }
}

/// Single-character class check for keystroke filtering: is `ch` a valid
/// digit of `radix`?
#[must_use]
pub fn is_digit(radix: Radix, ch: char) -> bool {
    ch.to_digit(radix.base()).is_some()
}
