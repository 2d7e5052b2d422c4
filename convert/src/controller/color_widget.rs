// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Controller for the color converter: hex, RGB, and HSL fields plus a
//! preview swatch. A valid edit rewrites all three fields (the source
//! included, canonicalized) and the swatch; an invalid edit marks the two
//! sibling fields and resets the swatch to a neutral color.

use crate::{ConversionError, ERROR_PREVIEW_COLOR, FieldPatch, HslColor, RgbColor,
            WidgetUpdate, color_converter, rgb_to_hsl, hsl_to_rgb};

pub const INVALID_HEX_MARKER: &str = "Invalid Hex";
pub const INVALID_RGB_MARKER: &str = "Invalid RGB";
pub const INVALID_HSL_MARKER: &str = "Invalid HSL";
pub const OUT_OF_RANGE_RGB_MARKER: &str = "Out of Range (0-255)";
pub const OUT_OF_RANGE_HSL_MARKER: &str = "Out of Range";

pub const HEX_FIELD_ID: &str = "hexInput";
pub const RGB_FIELD_ID: &str = "rgbInput";
pub const HSL_FIELD_ID: &str = "hslInput";
pub const PREVIEW_FIELD_ID: &str = "colorPreview";

/// Which textual form of the color widget was edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Hex,
    Rgb,
    Hsl,
}

/// Handle an edit in one field of the color converter group.
#[must_use]
pub fn color_edit(source: ColorField, text: &str) -> WidgetUpdate {
    // % is Display, ? is Debug.
    tracing::debug!(message = "color edit", source = ?source, text = ?text);

    match source {
        ColorField::Hex => match color_converter::parse_hex(text) {
            Ok(rgb) => success_update(rgb, rgb_to_hsl(rgb)),
            Err(_) => failure_update(source, INVALID_HEX_MARKER),
        },
        ColorField::Rgb => match color_converter::parse_rgb_triplet(text) {
            Ok(rgb) => success_update(rgb, rgb_to_hsl(rgb)),
            Err(ConversionError::OutOfRange { .. }) => {
                failure_update(source, OUT_OF_RANGE_RGB_MARKER)
            }
            Err(_) => failure_update(source, INVALID_RGB_MARKER),
        },
        // On success the parsed h/s/l is echoed back, not re-derived from
        // RGB, so a user-typed hsl(211, 100%, 50%) never drifts by rounding.
        ColorField::Hsl => match color_converter::parse_hsl_triplet(text) {
            Ok(hsl) => success_update(hsl_to_rgb(hsl), hsl),
            Err(ConversionError::OutOfRange { .. }) => {
                failure_update(source, OUT_OF_RANGE_HSL_MARKER)
            }
            Err(_) => failure_update(source, INVALID_HSL_MARKER),
        },
    }
}

/// All four targets (three text fields + swatch) get values. The source
/// field is included so its text gets canonicalized in place.
fn success_update(rgb: RgbColor, hsl: HslColor) -> WidgetUpdate {
    let hex = rgb.to_hex_string();

    let mut update = WidgetUpdate::default();
    update
        .patches
        .push(FieldPatch::value(HEX_FIELD_ID, hex.as_str()));
    update
        .patches
        .push(FieldPatch::value(RGB_FIELD_ID, rgb.to_rgb_string().as_str()));
    update
        .patches
        .push(FieldPatch::value(HSL_FIELD_ID, hsl.to_hsl_string().as_str()));
    update
        .patches
        .push(FieldPatch::value(PREVIEW_FIELD_ID, hex.as_str()));
    update
}

/// Both sibling display fields get the marker; the swatch resets to neutral.
fn failure_update(source: ColorField, marker: &'static str) -> WidgetUpdate {
    let siblings = match source {
        ColorField::Hex => [RGB_FIELD_ID, HSL_FIELD_ID],
        ColorField::Rgb => [HEX_FIELD_ID, HSL_FIELD_ID],
        ColorField::Hsl => [HEX_FIELD_ID, RGB_FIELD_ID],
    };

    let mut update = WidgetUpdate {
        source_error: true,
        ..WidgetUpdate::default()
    };
    for field in siblings {
        update.patches.push(FieldPatch::marker(field, marker));
    }
    update
        .patches
        .push(FieldPatch::value(PREVIEW_FIELD_ID, ERROR_PREVIEW_COLOR));
    update
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::FieldContent;

    #[test]
    fn test_hex_edit_updates_every_field_and_swatch() {
        let update = color_edit(ColorField::Hex, "#007BFF");
        assert!(!update.source_error);
        assert_eq!(
            update.patch_for(HEX_FIELD_ID),
            Some(&FieldContent::Value("#007BFF".to_string()))
        );
        assert_eq!(
            update.patch_for(RGB_FIELD_ID),
            Some(&FieldContent::Value("rgb(0, 123, 255)".to_string()))
        );
        assert_eq!(
            update.patch_for(HSL_FIELD_ID),
            Some(&FieldContent::Value("hsl(211, 100%, 50%)".to_string()))
        );
        assert_eq!(
            update.patch_for(PREVIEW_FIELD_ID),
            Some(&FieldContent::Value("#007BFF".to_string()))
        );
    }

    #[test]
    fn test_lowercase_hex_is_canonicalized_in_place() {
        let update = color_edit(ColorField::Hex, "007bff");
        assert_eq!(
            update.patch_for(HEX_FIELD_ID),
            Some(&FieldContent::Value("#007BFF".to_string()))
        );
    }

    #[test]
    fn test_invalid_hex_marks_siblings_and_resets_swatch() {
        let update = color_edit(ColorField::Hex, "#00ZZFF");
        assert!(update.source_error);
        assert_eq!(
            update.patch_for(RGB_FIELD_ID),
            Some(&FieldContent::ErrorMarker(INVALID_HEX_MARKER))
        );
        assert_eq!(
            update.patch_for(HSL_FIELD_ID),
            Some(&FieldContent::ErrorMarker(INVALID_HEX_MARKER))
        );
        assert_eq!(
            update.patch_for(PREVIEW_FIELD_ID),
            Some(&FieldContent::Value(ERROR_PREVIEW_COLOR.to_string()))
        );
    }

    #[test]
    fn test_rgb_out_of_range_distinguished_from_invalid() {
        let update = color_edit(ColorField::Rgb, "rgb(0, 123, 256)");
        assert_eq!(
            update.patch_for(HEX_FIELD_ID),
            Some(&FieldContent::ErrorMarker(OUT_OF_RANGE_RGB_MARKER))
        );

        let update = color_edit(ColorField::Rgb, "no numbers here");
        assert_eq!(
            update.patch_for(HEX_FIELD_ID),
            Some(&FieldContent::ErrorMarker(INVALID_RGB_MARKER))
        );
    }

    #[test]
    fn test_hsl_edit_echoes_parsed_values() {
        let update = color_edit(ColorField::Hsl, "211 100 50");
        assert_eq!(
            update.patch_for(HSL_FIELD_ID),
            Some(&FieldContent::Value("hsl(211, 100%, 50%)".to_string()))
        );
        assert_eq!(
            update.patch_for(HEX_FIELD_ID),
            Some(&FieldContent::Value("#007BFF".to_string()))
        );
    }
}
