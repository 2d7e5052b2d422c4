// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineString, InlineVec, Radix, inline_string};

/// What a single sibling field should display after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldContent {
    /// A successfully converted value.
    Value(String),
    /// A human-readable error marker, e.g. `Invalid Octet`.
    ErrorMarker(&'static str),
    /// Clear the field (the source was empty).
    Blank,
}

/// One instruction for the rendering host: write `content` into the field
/// identified by `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPatch {
    pub field: InlineString,
    pub content: FieldContent,
}

impl FieldPatch {
    #[must_use]
    pub fn value(field: &str, text: impl Into<String>) -> Self {
        FieldPatch {
            field: inline_string!("{field}"),
            content: FieldContent::Value(text.into()),
        }
    }

    #[must_use]
    pub fn marker(field: &str, marker: &'static str) -> Self {
        FieldPatch {
            field: inline_string!("{field}"),
            content: FieldContent::ErrorMarker(marker),
        }
    }

    #[must_use]
    pub fn blank(field: &str) -> Self {
        FieldPatch {
            field: inline_string!("{field}"),
            content: FieldContent::Blank,
        }
    }
}

/// The full outcome of one field edit: patches for the sibling fields, plus
/// whether the edited field itself should show error styling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetUpdate {
    pub source_error: bool,
    pub patches: InlineVec<FieldPatch>,
}

impl WidgetUpdate {
    /// Look up the patch for a given field id. Handy in tests and for hosts
    /// that render fields individually.
    #[must_use]
    pub fn patch_for(&self, field: &str) -> Option<&FieldContent> {
        self.patches
            .iter()
            .find(|patch| patch.field.as_str() == field)
            .map(|patch| &patch.content)
    }
}

/// Field id of a base-group input, matching the widget markup convention:
/// `hexInput`, `decInput`, `binInput`.
#[must_use]
pub fn radix_field_id(radix: Radix) -> InlineString {
    inline_string!("{radix}Input")
}
