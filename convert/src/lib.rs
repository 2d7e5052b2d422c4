// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_convert
//!
//! Pure conversion core shared by a family of numeric/conversion widgets: an
//! ASCII ⇄ hex/dec/bin transcoder, an RGB/HSL/hex color converter, an IP-octet
//! multi-base editor, a bitwise logic-gate calculator, and a generic base-N
//! converter.
//!
//! Every operation in this crate is a pure function of its explicit inputs:
//! parse a string in a declared base or format, validate it, convert it to one
//! or more target representations, and return either canonical strings or a
//! [`ConversionError`]. There is no shared mutable state, no I/O, and no
//! presentation logic here. The UI layer (or the `conv` CLI in this workspace)
//! supplies raw field text and renders whatever comes back.
//!
//! ## Modules
//!
//! | Module             | What it does                                                    |
//! | :----------------- | :-------------------------------------------------------------- |
//! | [`byte_codec`]     | Single `u8` value ⇄ hex/dec/bin textual forms                   |
//! | [`bitwise_engine`] | Named logic gates over clamped 8-bit operands                   |
//! | [`color_converter`]| RGB ⇄ HSL ⇄ `#RRGGBB` with boundary rounding                    |
//! | [`big_base`]       | Arbitrary-magnitude integers between bases 2-36, no precision loss |
//! | [`text_codec`]     | Text ⇄ per-character byte codes with an out-of-range sentinel   |
//! | [`controller`]     | Field-id level dispatch: one edit in, sibling field patches out |
//!
//! ## Error handling
//!
//! Fallible operations return `Result<_, `[`ConversionError`]`>`. Empty input
//! is never an error: codecs model it as a distinguished success (e.g.
//! [`ByteDecode::Empty`]) so callers can render a blank field. Errors never
//! partially populate a result - the [`controller`] either patches every
//! sibling field with a value, or marks all of them invalid.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod big_base;
pub mod bitwise_engine;
pub mod byte_codec;
pub mod color_converter;
pub mod common;
pub mod controller;
pub mod text_codec;

// Re-export flat public API.
pub use big_base::*;
pub use bitwise_engine::*;
pub use byte_codec::*;
pub use color_converter::*;
pub use common::*;
pub use controller::*;
pub use text_codec::*;
