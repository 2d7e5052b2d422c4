// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text ⇄ per-character byte codes for the ASCII transcoder widget.
//!
//! Forward: each character becomes one token in three parallel space-joined
//! sequences (2-digit hex, decimal, 8-bit binary). Characters above `U+00FF`
//! are not displayable as one byte, so they become the `[?]` sentinel in all
//! three sequences at once - the rest of the string still converts.
//!
//! Reverse: all-or-nothing. One bad token fails the entire conversion;
//! partial success is never surfaced.

// Attach sources.
pub mod codes;

// Re-export.
pub use codes::*;
