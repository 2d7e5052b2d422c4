// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Controller for the ASCII transcoder: one text field and three code-
//! sequence fields (hex, dec, bin). Editing the text fans out to all three
//! code fields; editing any code field fills the text field back in.

use crate::{FieldPatch, Radix, TextDecode, WidgetUpdate, radix_field_id, text_codec};

/// Marker shown in the text field when any token of a code sequence fails to
/// parse or falls outside `0..=255`. The whole sequence fails together.
pub const INVALID_CODE_SEQUENCE_MARKER: &str = "Invalid Code Sequence";

/// Field id of the plain-text input.
pub const TEXT_FIELD_ID: &str = "textInput";

/// Which field of the ASCII widget group was edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsciiSource {
    /// The plain-text field.
    Text,
    /// One of the three code-sequence fields, in the given base.
    Codes(Radix),
}

/// Handle an edit in the ASCII transcoder group.
#[must_use]
pub fn ascii_edit(source: AsciiSource, text: &str) -> WidgetUpdate {
    // % is Display, ? is Debug.
    tracing::debug!(message = "ascii edit", source = ?source, text = ?text);

    let mut update = WidgetUpdate::default();

    match source {
        AsciiSource::Text => {
            if text.trim().is_empty() {
                for target in [Radix::Hexadecimal, Radix::Decimal, Radix::Binary] {
                    update.patches.push(FieldPatch::blank(&radix_field_id(target)));
                }
                return update;
            }

            let codes = text_codec::text_to_codes(text);
            update
                .patches
                .push(FieldPatch::value(&radix_field_id(Radix::Hexadecimal), codes.hex));
            update
                .patches
                .push(FieldPatch::value(&radix_field_id(Radix::Decimal), codes.dec));
            update
                .patches
                .push(FieldPatch::value(&radix_field_id(Radix::Binary), codes.bin));
        }
        AsciiSource::Codes(radix) => match text_codec::codes_to_text(text, radix) {
            Ok(TextDecode::Empty) => {
                update.patches.push(FieldPatch::blank(TEXT_FIELD_ID));
            }
            Ok(TextDecode::Text(decoded)) => {
                update.patches.push(FieldPatch::value(TEXT_FIELD_ID, decoded));
            }
            Err(_) => {
                update.source_error = true;
                update
                    .patches
                    .push(FieldPatch::marker(TEXT_FIELD_ID, INVALID_CODE_SEQUENCE_MARKER));
            }
        },
    }

    update
}
