// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineString, inline_string};

/// A color as three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// A color as hue (degrees, `0..=360`), saturation and lightness
/// (percentages, `0..=100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslColor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

/// Neutral swatch color the preview resets to when the source field fails to
/// parse.
pub const ERROR_PREVIEW_COLOR: &str = "#F4F4F4";

/// Default color the widget boots with.
pub const DEFAULT_BOOT_COLOR: &str = "#007BFF";

impl RgbColor {
    /// Canonical `#RRGGBB` rendering, uppercase, zero-padded.
    #[must_use]
    pub fn to_hex_string(self) -> InlineString {
        inline_string!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Canonical `rgb(r, g, b)` rendering.
    #[must_use]
    pub fn to_rgb_string(self) -> InlineString {
        inline_string!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl HslColor {
    /// Canonical `hsl(h, s%, l%)` rendering.
    #[must_use]
    pub fn to_hsl_string(self) -> InlineString {
        inline_string!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}
