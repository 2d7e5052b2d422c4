// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineString, inline_string};

/// The three canonical textual forms of one byte, produced by [`encode`].
///
/// - `hex`: exactly 2 uppercase hex digits, zero-padded.
/// - `dec`: minimal digit string, no padding.
/// - `bin`: exactly 8 binary digits, zero-padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteTriplet {
    pub hex: InlineString,
    pub dec: InlineString,
    pub bin: InlineString,
}

/// Render `value` in all three fixed-width forms at once.
#[must_use]
pub fn encode(value: u8) -> ByteTriplet {
    ByteTriplet {
        hex: to_hex2(value),
        dec: inline_string!("{value}"),
        bin: to_bin8(value),
    }
}

/// 2-digit uppercase zero-padded hex rendering of one byte.
#[must_use]
pub fn to_hex2(value: u8) -> InlineString {
    inline_string!("{value:02X}")
}

/// 8-digit zero-padded binary rendering of one byte. Also used by
/// [`crate::bitwise_engine`] to render gate outputs.
#[must_use]
pub fn to_bin8(value: u8) -> InlineString {
    inline_string!("{value:08b}")
}
