// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB ⇄ HSL ⇄ `#RRGGBB` triangulation with rounding at the boundary.
//!
//! All three representations denote the same visual color up to rounding:
//! round-tripping RGB → HSL → RGB reproduces each channel within ±1. Internal
//! computation stays in `f64`; integers appear only at the API boundary
//! (degrees, percentages, 0-255 channel values).
//!
//! Parsing accepts three textual forms:
//! - `#RRGGBB` (the `#` is optional) via [`parse_hex`].
//! - free-form RGB triplets (`rgb(0, 123, 255)`, `0 123 255`, ...) via
//!   [`parse_rgb_triplet`].
//! - free-form HSL triplets (`hsl(211, 100%, 50%)`, `211 100 50`, ...) via
//!   [`parse_hsl_triplet`].

// Attach sources.
pub mod color_types;
pub mod rgb_hsl;
pub mod triplet_parser;

// Re-export.
pub use color_types::*;
pub use rgb_hsl::*;
pub use triplet_parser::*;
