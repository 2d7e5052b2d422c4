// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

/// The supported logic gates. `Not` is unary; the second operand is ignored.
/// The "N" variants compute the base gate then XOR with `0xFF` (8-bit one's
/// complement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum Gate {
    And,
    Or,
    Xor,
    Not,
    Nand,
    Nor,
    Xnor,
}

impl Gate {
    /// `true` for [`Gate::Not`], which takes a single operand. The UI layer
    /// uses this to hide the second input field.
    #[must_use]
    pub fn is_unary(self) -> bool {
        matches!(self, Gate::Not)
    }
}

/// Saturate an arbitrary integer into the `0..=255` byte range. Values below
/// 0 clamp to 0, values above 255 clamp to 255 - no wraparound.
#[must_use]
pub fn clamp_to_byte(value: i64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        value.clamp(0, 255) as u8
    }
}

/// Apply `gate` to the operands, clamping each into `0..=255` first.
///
/// `b` is optional: `None` is treated as 0, which only matters for the binary
/// gates ([`Gate::Not`] ignores it entirely).
#[must_use]
pub fn apply(gate: Gate, a: i64, b: Option<i64>) -> u8 {
    let a = clamp_to_byte(a);
    let b = clamp_to_byte(b.unwrap_or(0));

    match gate {
        Gate::And => a & b,
        Gate::Or => a | b,
        Gate::Xor => a ^ b,
        // 8-bit one's complement.
        Gate::Not => a ^ 0xFF,
        Gate::Nand => (a & b) ^ 0xFF,
        Gate::Nor => (a | b) ^ 0xFF,
        Gate::Xnor => (a ^ b) ^ 0xFF,
    }
}
