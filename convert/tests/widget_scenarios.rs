// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end scenarios driving the controllers the way a rendering host
//! would: boot-time defaults first, then user edits, asserting the exact
//! strings that land in each sibling field.

use pretty_assertions::assert_eq;
use r3bl_convert::{AsciiSource, ColorField, DEFAULT_BOOT_COLOR, FieldContent, Gate,
                   INVALID_CODE_SEQUENCE_MARKER, INVALID_INPUT_MARKER,
                   INVALID_OCTET_MARKER, Radix, ascii_edit, base_converter_edit,
                   color_edit, gate_update, ip_octet_edit};

/// At boot the color widget is seeded with the default accent color; every
/// display field and the preview swatch must come back populated.
#[test]
fn test_boot_color_chain() {
    let update = color_edit(ColorField::Hex, DEFAULT_BOOT_COLOR);
    assert!(!update.source_error);
    assert_eq!(
        update.patch_for("hexInput"),
        Some(&FieldContent::Value("#007BFF".to_string()))
    );
    assert_eq!(
        update.patch_for("rgbInput"),
        Some(&FieldContent::Value("rgb(0, 123, 255)".to_string()))
    );
    assert_eq!(
        update.patch_for("hslInput"),
        Some(&FieldContent::Value("hsl(211, 100%, 50%)".to_string()))
    );
    assert_eq!(
        update.patch_for("colorPreview"),
        Some(&FieldContent::Value("#007BFF".to_string()))
    );
}

/// At boot the IP widget is seeded with 192.168.1.1 in the decimal row; the
/// binary and hex rows must fill in octet by octet.
#[test]
fn test_boot_ip_address_chain() {
    let expected = [
        ("11000000", "C0"),
        ("10101000", "A8"),
        ("00000001", "01"),
        ("00000001", "01"),
    ];
    for (octet, text) in ["192", "168", "1", "1"].into_iter().enumerate() {
        let octet = u8::try_from(octet).unwrap();
        let update = ip_octet_edit(octet, Radix::Decimal, text);
        assert!(!update.source_error);

        let (bin, hex) = expected[usize::from(octet)];
        let bin_id = format!("binInput{}", octet + 1);
        let hex_id = format!("hexInput{}", octet + 1);
        assert_eq!(
            update.patch_for(&bin_id),
            Some(&FieldContent::Value(bin.to_string()))
        );
        assert_eq!(
            update.patch_for(&hex_id),
            Some(&FieldContent::Value(hex.to_string()))
        );
    }
}

#[test]
fn test_typing_255_in_decimal_base_field() {
    let update = base_converter_edit(Radix::Decimal, "255");
    assert_eq!(
        update.patch_for("hexInput"),
        Some(&FieldContent::Value("FF".to_string()))
    );
    assert_eq!(
        update.patch_for("binInput"),
        Some(&FieldContent::Value("11111111".to_string()))
    );
}

/// A value far beyond 64 bits must convert without precision loss.
#[test]
fn test_base_converter_handles_128_bit_values() {
    let update = base_converter_edit(Radix::Hexadecimal, "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
    assert_eq!(
        update.patch_for("decInput"),
        Some(&FieldContent::Value(
            "340282366920938463463374607431768211455".to_string()
        ))
    );
}

#[test]
fn test_base_converter_length_ceiling() {
    let huge = "9".repeat(5000);
    let update = base_converter_edit(Radix::Decimal, &huge);
    assert!(update.source_error);
    assert_eq!(
        update.patch_for("hexInput"),
        Some(&FieldContent::ErrorMarker(INVALID_INPUT_MARKER))
    );
}

#[test]
fn test_ip_octet_rejects_256() {
    let update = ip_octet_edit(0, Radix::Decimal, "256");
    assert!(update.source_error);
    assert_eq!(
        update.patch_for("binInput1"),
        Some(&FieldContent::ErrorMarker(INVALID_OCTET_MARKER))
    );
}

/// Editing a code field and then feeding the decoded text back through the
/// text side reproduces the original sequence.
#[test]
fn test_ascii_round_trip_through_both_directions() {
    let update = ascii_edit(AsciiSource::Codes(Radix::Decimal), "72 101 108 108 111");
    let Some(FieldContent::Value(decoded)) = update.patch_for("textInput") else {
        panic!("expected decoded text, got {update:?}");
    };
    assert_eq!(decoded, "Hello");

    let update = ascii_edit(AsciiSource::Text, decoded);
    assert_eq!(
        update.patch_for("decInput"),
        Some(&FieldContent::Value("72 101 108 108 111".to_string()))
    );
}

#[test]
fn test_ascii_bad_token_fails_the_whole_sequence() {
    let update = ascii_edit(AsciiSource::Codes(Radix::Hexadecimal), "48 QQ");
    assert!(update.source_error);
    assert_eq!(
        update.patch_for("textInput"),
        Some(&FieldContent::ErrorMarker(INVALID_CODE_SEQUENCE_MARKER))
    );
}

/// The color triangle must close: an HSL edit produces a hex value that,
/// fed back through the hex side, reproduces the same RGB.
#[test]
fn test_color_triangle_closes() {
    let update = color_edit(ColorField::Hsl, "hsl(120, 50%, 50%)");
    let Some(FieldContent::Value(hex)) = update.patch_for("hexInput") else {
        panic!("expected hex value, got {update:?}");
    };

    let update = color_edit(ColorField::Hex, hex);
    let Some(FieldContent::Value(rgb)) = update.patch_for("rgbInput") else {
        panic!("expected rgb value, got {update:?}");
    };
    assert_eq!(rgb, "rgb(64, 191, 64)");
}

#[test]
fn test_not_gate_on_zero() {
    let update = gate_update(Gate::Not, "0", "");
    assert_eq!(update.output_dec.as_str(), "255");
    assert_eq!(update.output_bin.as_str(), "11111111");
    assert!(!update.show_second_operand);
}

#[test]
fn test_gate_operands_clamp_before_applying() {
    let update = gate_update(Gate::And, "300", "255");
    assert_eq!(update.a, 255);
    assert_eq!(update.output_dec.as_str(), "255");
}
