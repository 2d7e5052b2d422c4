// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Controller for the logic-gate playground: two operand fields, a gate
//! selector, and a decimal + binary result readout. Operands are forgiving:
//! text that fails to parse counts as 0, and out-of-byte values clamp.

use crate::{Gate, InlineString, bitwise_engine, byte_codec, inline_string};

/// Everything the rendering host needs after an operand or gate change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateUpdate {
    pub gate: Gate,
    /// Operand A after parsing and clamping, for echoing back into its field.
    pub a: u8,
    /// Operand B after parsing and clamping. Meaningless for unary gates.
    pub b: u8,
    pub output_dec: InlineString,
    pub output_bin: InlineString,
    /// Unary gates (NOT) hide the second operand field.
    pub show_second_operand: bool,
}

/// Recompute the gate output from the raw operand texts.
#[must_use]
pub fn gate_update(gate: Gate, a_text: &str, b_text: &str) -> GateUpdate {
    // % is Display, ? is Debug.
    tracing::debug!(message = "gate update", gate = %gate, a = ?a_text, b = ?b_text);

    let a_raw = parse_operand(a_text);
    let b_raw = parse_operand(b_text);

    let b_operand = if gate.is_unary() { None } else { Some(b_raw) };
    let output = bitwise_engine::apply(gate, a_raw, b_operand);

    GateUpdate {
        gate,
        a: bitwise_engine::clamp_to_byte(a_raw),
        b: bitwise_engine::clamp_to_byte(b_raw),
        output_dec: inline_string!("{output}"),
        output_bin: byte_codec::to_bin8(output),
        show_second_operand: !gate.is_unary(),
    }
}

/// Anything that is not a plain decimal integer reads as 0.
fn parse_operand(text: &str) -> i64 {
    text.trim().parse::<i64>().unwrap_or(0)
}
