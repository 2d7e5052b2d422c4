// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Controller for the IP-octet editor: 4 octets × 3 bases = 12 fields. An
//! edit in one field resyncs the other two fields of the *same octet* only.

use crate::{ByteDecode, FieldPatch, InlineString, Radix, WidgetUpdate, byte_codec,
            inline_string};

/// Marker shown in an octet's sibling fields when the source text is not a
/// valid byte in its base.
pub const INVALID_OCTET_MARKER: &str = "Invalid Octet";

/// Field id of one octet cell, matching the widget markup convention:
/// `decInput1` .. `decInput4`, `binInput1` .., `hexInput1` ..
#[must_use]
pub fn ip_field_id(radix: Radix, octet: u8) -> InlineString {
    inline_string!("{radix}Input{}", octet + 1)
}

/// Handle an edit in one octet cell. `octet` is the 0-based octet index
/// (0..=3).
#[must_use]
pub fn ip_octet_edit(octet: u8, source: Radix, text: &str) -> WidgetUpdate {
    // % is Display, ? is Debug.
    tracing::debug!(message = "ip octet edit", octet, source = %source, text = ?text);

    let mut update = WidgetUpdate::default();

    match byte_codec::decode(text, source) {
        Ok(ByteDecode::Empty) => {
            for target in source.siblings() {
                update
                    .patches
                    .push(FieldPatch::blank(&ip_field_id(target, octet)));
            }
        }
        Ok(ByteDecode::Value(value)) => {
            let triplet = byte_codec::encode(value);
            for target in source.siblings() {
                let rendered = match target {
                    Radix::Binary => triplet.bin.as_str(),
                    Radix::Decimal => triplet.dec.as_str(),
                    Radix::Hexadecimal => triplet.hex.as_str(),
                };
                update
                    .patches
                    .push(FieldPatch::value(&ip_field_id(target, octet), rendered));
            }
        }
        Err(_) => {
            update.source_error = true;
            for target in source.siblings() {
                update
                    .patches
                    .push(FieldPatch::marker(&ip_field_id(target, octet), INVALID_OCTET_MARKER));
            }
        }
    }

    update
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::FieldContent;

    #[test]
    fn test_decimal_edit_resyncs_bin_and_hex_of_same_octet() {
        let update = ip_octet_edit(0, Radix::Decimal, "192");
        assert!(!update.source_error);
        assert_eq!(
            update.patch_for("binInput1"),
            Some(&FieldContent::Value("11000000".to_string()))
        );
        assert_eq!(
            update.patch_for("hexInput1"),
            Some(&FieldContent::Value("C0".to_string()))
        );
        // Other octets are untouched.
        assert_eq!(update.patch_for("binInput2"), None);
    }

    #[test_case(1, "hexInput2", "decInput2")]
    #[test_case(3, "hexInput4", "decInput4")]
    fn test_octet_index_maps_to_field_suffix(octet: u8, hex_id: &str, dec_id: &str) {
        let update = ip_octet_edit(octet, Radix::Binary, "00000001");
        assert_eq!(
            update.patch_for(hex_id),
            Some(&FieldContent::Value("01".to_string()))
        );
        assert_eq!(
            update.patch_for(dec_id),
            Some(&FieldContent::Value("1".to_string()))
        );
    }

    #[test_case("256"; "above byte range")]
    #[test_case("1G"; "not hex-free decimal")]
    fn test_invalid_octet_marks_siblings(text: &str) {
        let update = ip_octet_edit(2, Radix::Decimal, text);
        assert!(update.source_error);
        assert_eq!(
            update.patch_for("binInput3"),
            Some(&FieldContent::ErrorMarker(INVALID_OCTET_MARKER))
        );
        assert_eq!(
            update.patch_for("hexInput3"),
            Some(&FieldContent::ErrorMarker(INVALID_OCTET_MARKER))
        );
    }

    #[test]
    fn test_empty_octet_blanks_siblings() {
        let update = ip_octet_edit(1, Radix::Hexadecimal, "");
        assert!(!update.source_error);
        assert_eq!(update.patch_for("decInput2"), Some(&FieldContent::Blank));
        assert_eq!(update.patch_for("binInput2"), Some(&FieldContent::Blank));
    }
}
