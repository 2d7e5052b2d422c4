// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use num_bigint::BigInt;

use crate::ConversionError;

/// Inputs longer than this many digits are rejected with
/// [`ConversionError::ParseOverflow`] before parsing. Arbitrary precision is
/// unbounded in principle; this is the practical ceiling so a pasted
/// megabyte of digits cannot stall the caller's thread.
pub const MAX_INPUT_DIGITS: usize = 4096;

/// Successful outcome of [`convert`]. Empty (post-cleanup) input maps to
/// empty output, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigBaseOutcome {
    Empty,
    Value(String),
}

impl BigBaseOutcome {
    /// The rendered string, with [`BigBaseOutcome::Empty`] as `""`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            BigBaseOutcome::Empty => "",
            BigBaseOutcome::Value(text) => text,
        }
    }
}

/// Convert `text` from `from_base` to `to_base` with full precision.
///
/// Cleanup before parsing: surrounding whitespace is stripped, and a leading
/// `0x`/`0X` is stripped when `from_base == 16`. Rendering is canonical:
/// digits uppercased, no leading zeros (the literal value zero renders as
/// `"0"`, never empty), negative values as `-` + magnitude.
///
/// # Errors
///
/// - [`UnsupportedBase`] if either base is outside 2..=36.
/// - [`ParseOverflow`] if the cleaned input exceeds [`MAX_INPUT_DIGITS`].
/// - [`InvalidCharacter`] if the input does not parse in `from_base`.
///
/// [`UnsupportedBase`]: ConversionError::UnsupportedBase
/// [`ParseOverflow`]: ConversionError::ParseOverflow
/// [`InvalidCharacter`]: ConversionError::InvalidCharacter
pub fn convert(
    text: &str,
    from_base: u32,
    to_base: u32,
) -> Result<BigBaseOutcome, ConversionError> {
    ensure_supported_base(from_base)?;
    ensure_supported_base(to_base)?;

    let mut clean = text.trim();
    if from_base == 16 {
        if let Some(stripped) = clean.strip_prefix("0x").or_else(|| clean.strip_prefix("0X")) {
            clean = stripped;
        }
    }

    if clean.is_empty() {
        return Ok(BigBaseOutcome::Empty);
    }

    if clean.len() > MAX_INPUT_DIGITS {
        return Err(ConversionError::ParseOverflow {
            length: clean.len(),
        });
    }

    let value = BigInt::parse_bytes(clean.as_bytes(), from_base).ok_or_else(|| {
        ConversionError::InvalidCharacter {
            token: clean.to_string(),
        }
    })?;

    Ok(BigBaseOutcome::Value(canonicalize(
        &value.to_str_radix(to_base),
    )))
}

/// Pure character-class pre-flight check (not a full parse). The UI layer
/// uses this to decide error styling without committing to a conversion.
///
/// - Hex: optional `0x`/`0X` prefix followed by 1+ hex digits.
/// - Decimal: optional leading `-` followed by 1+ digits.
/// - Binary: 1+ of `{0, 1}`.
/// - Any other base in 2..=36: 1+ digits valid for that radix.
///
/// Empty text is valid: a blank field is not an error state.
#[must_use]
pub fn is_valid_input(text: &str, base: u32) -> bool {
    if !(2..=36).contains(&base) {
        return false;
    }
    if text.is_empty() {
        return true;
    }

    let digits = match base {
        16 => text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text),
        10 => text.strip_prefix('-').unwrap_or(text),
        _ => text,
    };

    !digits.is_empty() && digits.chars().all(|ch| ch.to_digit(base).is_some())
}

/// Canonical form: uppercase digits, leading zeros stripped (but the literal
/// value zero stays `"0"`), sign preserved. `to_str_radix` already emits
/// minimal digits; this also normalizes renderings like `-0001` that reach
/// us from other producers.
fn canonicalize(rendered: &str) -> String {
    let (sign, magnitude) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };

    let stripped = magnitude.trim_start_matches('0');
    if stripped.is_empty() {
        // A run of zeros (with or without a sign) is the literal value zero.
        return "0".to_string();
    }

    let mut out = String::with_capacity(sign.len() + stripped.len());
    out.push_str(sign);
    out.push_str(&stripped.to_ascii_uppercase());
    out
}

fn ensure_supported_base(base: u32) -> Result<(), ConversionError> {
    if (2..=36).contains(&base) {
        Ok(())
    } else {
        Err(ConversionError::UnsupportedBase { base })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("1010", 2, 10, "10")]
    #[test_case("255", 10, 16, "FF")]
    #[test_case("ff", 16, 10, "255"; "lowercase hex accepted")]
    #[test_case("0xFF", 16, 10, "255"; "0x prefix stripped")]
    #[test_case("0XFF", 16, 2, "11111111"; "uppercase 0X prefix stripped")]
    #[test_case("0", 10, 2, "0"; "zero renders as zero, never empty")]
    #[test_case("000010", 2, 10, "2"; "leading zeros in source")]
    #[test_case("-255", 10, 16, "-FF"; "sign plus magnitude, no wraparound")]
    #[test_case("-0", 10, 10, "0"; "negative zero folds to zero")]
    #[test_case("z", 36, 10, "35"; "base 36 top digit")]
    fn test_convert(text: &str, from: u32, to: u32, expected: &str) {
        assert_eq!(
            convert(text, from, to).unwrap(),
            BigBaseOutcome::Value(expected.to_string())
        );
    }

    #[test]
    fn test_convert_empty_maps_to_empty() {
        assert_eq!(convert("", 2, 10).unwrap(), BigBaseOutcome::Empty);
        assert_eq!(convert("   ", 16, 10).unwrap(), BigBaseOutcome::Empty);
        assert_eq!(
            convert("0x", 16, 10).unwrap(),
            BigBaseOutcome::Empty,
            "a bare 0x prefix cleans down to nothing"
        );
    }

    /// 128-bit magnitudes parse exactly - way past any f64 ceiling.
    #[test]
    fn test_convert_is_not_limited_to_float_precision() {
        let dec = "340282366920938463463374607431768211455"; // 2^128 - 1
        let hex = convert(dec, 10, 16).unwrap();
        assert_eq!(hex.as_str(), "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
        let back = convert(hex.as_str(), 16, 10).unwrap();
        assert_eq!(back.as_str(), dec);
    }

    #[test_case("1G", 16)]
    #[test_case("102", 2)]
    #[test_case("12a", 10)]
    #[test_case("--5", 10)]
    fn test_convert_invalid_character(text: &str, from: u32) {
        assert_eq!(
            convert(text, from, 10).unwrap_err(),
            ConversionError::InvalidCharacter {
                token: text.to_string()
            }
        );
    }

    #[test]
    fn test_convert_rejects_unsupported_bases() {
        assert_eq!(
            convert("1", 1, 10).unwrap_err(),
            ConversionError::UnsupportedBase { base: 1 }
        );
        assert_eq!(
            convert("1", 10, 37).unwrap_err(),
            ConversionError::UnsupportedBase { base: 37 }
        );
    }

    #[test]
    fn test_convert_length_ceiling() {
        let huge = "1".repeat(MAX_INPUT_DIGITS + 1);
        assert_eq!(
            convert(&huge, 10, 16).unwrap_err(),
            ConversionError::ParseOverflow {
                length: MAX_INPUT_DIGITS + 1
            }
        );
        // Exactly at the ceiling still parses.
        let at_limit = "1".repeat(MAX_INPUT_DIGITS);
        assert!(convert(&at_limit, 10, 16).is_ok());
    }

    #[test_case("0xFF", 16, true)]
    #[test_case("0XdeadBEEF", 16, true)]
    #[test_case("0x", 16, false; "prefix without digits")]
    #[test_case("FF", 16, true)]
    #[test_case("G1", 16, false)]
    #[test_case("-123", 10, true)]
    #[test_case("-", 10, false; "bare minus")]
    #[test_case("12a", 10, false)]
    #[test_case("0110", 2, true)]
    #[test_case("012", 2, false)]
    #[test_case("", 10, true; "empty is valid")]
    #[test_case("zz", 36, true)]
    #[test_case("1", 37, false; "unsupported base")]
    fn test_is_valid_input(text: &str, base: u32, expected: bool) {
        assert_eq!(is_valid_input(text, base), expected);
    }
}
