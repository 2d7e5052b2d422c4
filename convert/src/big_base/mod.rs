// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Arbitrary-magnitude base conversion for the generic base-N widget.
//!
//! Parsing uses [`num_bigint::BigInt`], so a source value of any length
//! parses exactly - there is no 53-bit float ceiling anywhere in this path.
//! Semantics are sign + magnitude in every base: `-255` in decimal renders as
//! `-FF` in hex, never as a two's-complement bit pattern.

// Attach sources.
pub mod big_base_codec;

// Re-export.
pub use big_base_codec::*;
