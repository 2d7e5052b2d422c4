// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The failure taxonomy shared by every codec in this crate. See
//! [`ConversionError`] for details.

/// Tagged failure value returned by all fallible conversion operations.
///
/// Empty input is deliberately absent from this taxonomy: codecs model it as
/// a distinguished success (e.g. [`crate::ByteDecode::Empty`]) so the
/// [controller] can render a blank field.
///
/// | Variant              | Meaning                                                          |
/// | :------------------- | :--------------------------------------------------------------- |
/// | [`InvalidCharacter`] | Token contains characters that are not digits of the declared radix/format |
/// | [`OutOfRange`]       | Numerically valid, but outside the domain (byte > 255, hue > 360, ...) |
/// | [`ParseOverflow`]    | Input exceeds the practical arbitrary-precision parsing ceiling  |
/// | [`FormatMismatch`]   | Free-form text does not match any recognized color/triplet pattern |
/// | [`UnsupportedBase`]  | Base outside 2..=36 (or outside {2, 10, 16} for fixed-radix ops) |
///
/// [`InvalidCharacter`]: Self::InvalidCharacter
/// [`OutOfRange`]: Self::OutOfRange
/// [`ParseOverflow`]: Self::ParseOverflow
/// [`FormatMismatch`]: Self::FormatMismatch
/// [`UnsupportedBase`]: Self::UnsupportedBase
/// [controller]: crate::controller
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ConversionError {
    /// Token is not made of valid digits for the declared radix.
    #[error("'{token}' contains characters that are not valid for the declared base")]
    #[diagnostic(
        code(r3bl_convert::invalid_character),
        help(
            "Binary accepts 0-1, decimal accepts 0-9 with an optional leading '-', \
             hex accepts 0-9 a-f A-F with an optional '0x' prefix."
        )
    )]
    InvalidCharacter {
        /// The offending token, post whitespace cleanup.
        token: String,
    },

    /// Parsed fine, but the value falls outside the operation's domain.
    #[error("'{token}' is numerically valid but outside the allowed range")]
    #[diagnostic(
        code(r3bl_convert::out_of_range),
        help(
            "Bytes and RGB channels must be in 0..=255, hue in 0..=360, \
             saturation and lightness in 0..=100."
        )
    )]
    OutOfRange {
        /// The offending token, post whitespace cleanup.
        token: String,
    },

    /// Input exceeds the practical arbitrary-precision parsing ceiling.
    #[error("input of {length} digits exceeds the parsing length ceiling")]
    #[diagnostic(
        code(r3bl_convert::parse_overflow),
        help("Split the number up, or raise the ceiling if you really need this.")
    )]
    ParseOverflow {
        /// Digit count of the rejected input.
        length: usize,
    },

    /// Free-form text does not match any recognized pattern.
    #[error("text does not match the expected {expected} format")]
    #[diagnostic(code(r3bl_convert::format_mismatch))]
    FormatMismatch {
        /// Human readable description of the expected shape, e.g. `#RRGGBB`.
        expected: &'static str,
    },

    /// Base outside the supported range. Rejected at the boundary rather than
    /// silently defaulted.
    #[error("base {base} is not supported (expected 2..=36)")]
    #[diagnostic(code(r3bl_convert::unsupported_base))]
    UnsupportedBase {
        /// The rejected base.
        base: u32,
    },
}
