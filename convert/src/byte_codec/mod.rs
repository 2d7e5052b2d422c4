// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single-byte codec: converts one unsigned 8-bit value among its hex,
//! decimal, and binary textual forms. Used by the ASCII transcoder and the
//! IP-octet editor, where every field denotes a value in `0..=255`.
//!
//! Decoding is strict: any character that is not a digit of the declared
//! [`Radix`] fails the whole token (no prefix salvage), and values outside
//! `0..=255` are rejected rather than wrapped. Contrast with
//! [`crate::bitwise_engine`], which deliberately saturates.
//!
//! [`Radix`]: crate::Radix

// Attach sources.
pub mod byte_decode;
pub mod byte_encode;

// Re-export.
pub use byte_decode::*;
pub use byte_encode::*;
