// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logic-gate calculator core: applies a named gate over one or two 8-bit
//! operands.
//!
//! Operands are saturated into `0..=255` before the operation. This is a
//! deliberate permissive policy (the calculator widget clamps and echoes the
//! clamped value back into the input) and the opposite of
//! [`crate::byte_codec`]'s strict rejection. The output is always in
//! `0..=255` by construction.

// Attach sources.
pub mod gate;

// Re-export.
pub use gate::*;
