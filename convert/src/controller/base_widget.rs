// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Controller for the generic base-N converter widget: three fields (hex,
//! dec, bin), each holding the same arbitrary-magnitude value in its own
//! base.

use crate::{BigBaseOutcome, FieldPatch, Radix, WidgetUpdate, big_base, radix_field_id};

/// Marker shown in sibling fields when the source text fails the
/// character-class pre-flight check.
pub const INVALID_CHARACTER_MARKER: &str = "Invalid Character";

/// Marker shown in sibling fields when the pre-flight check passes but the
/// full parse still fails (e.g. the input exceeds the length ceiling).
pub const INVALID_INPUT_MARKER: &str = "Invalid Input / Out of Range";

/// Handle an edit in one field of the base converter group.
///
/// The raw (untrimmed) text is validated with [`big_base::is_valid_input`]
/// first, so the host can show error styling without committing to a full
/// parse; conversion then fans out to the two sibling bases.
#[must_use]
pub fn base_converter_edit(source: Radix, text: &str) -> WidgetUpdate {
    // % is Display, ? is Debug.
    tracing::debug!(message = "base converter edit", source = %source, text = ?text);

    let mut update = WidgetUpdate::default();

    if text.trim().is_empty() {
        for target in source.siblings() {
            update.patches.push(FieldPatch::blank(&radix_field_id(target)));
        }
        return update;
    }

    if !big_base::is_valid_input(text, source.base()) {
        update.source_error = true;
        for target in source.siblings() {
            update
                .patches
                .push(FieldPatch::marker(&radix_field_id(target), INVALID_CHARACTER_MARKER));
        }
        return update;
    }

    for target in source.siblings() {
        match big_base::convert(text, source.base(), target.base()) {
            Ok(outcome) => {
                let rendered = match outcome {
                    BigBaseOutcome::Empty => String::new(),
                    BigBaseOutcome::Value(text) => text,
                };
                update
                    .patches
                    .push(FieldPatch::value(&radix_field_id(target), rendered));
            }
            Err(_) => {
                update.source_error = true;
                update
                    .patches
                    .push(FieldPatch::marker(&radix_field_id(target), INVALID_INPUT_MARKER));
            }
        }
    }

    update
}
