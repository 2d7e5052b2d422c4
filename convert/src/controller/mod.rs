// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Presentation-free sync controllers, one per widget group.
//!
//! Each controller function takes the edited field's raw text plus its
//! declared base/format/gate, dispatches to the pure codecs, and returns a
//! [`WidgetUpdate`]: a list of [`FieldPatch`]es for the sibling fields plus a
//! `source_error` flag for the edited field's own error styling. Either every
//! sibling gets a value, or every sibling gets an error marker - a patch list
//! is never partially populated.
//!
//! What is deliberately NOT here: focus management, cursor advancement,
//! enable/disable bookkeeping, and CSS class juggling. Those belong to the
//! rendering host. The host gets the *predicates* it needs for keystroke
//! filtering from [`crate::byte_codec::max_digits`] and
//! [`crate::byte_codec::is_digit`].

// Attach sources.
pub mod ascii_widget;
pub mod base_widget;
pub mod color_widget;
pub mod field_patch;
pub mod gate_widget;
pub mod ip_widget;

// Re-export.
pub use ascii_widget::*;
pub use base_widget::*;
pub use color_widget::*;
pub use field_patch::*;
pub use gate_widget::*;
pub use ip_widget::*;
