// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The closed set of numeral bases the fixed-width widgets operate in. The
//! generic base-N converter ([`crate::big_base`]) accepts any base in 2..=36
//! and takes a raw `u32` instead.

use strum_macros::{Display, EnumIter, EnumString};

use crate::ConversionError;

/// Numeral base for byte / text / IP-octet conversions.
///
/// Unknown bases are rejected at the boundary via [`TryFrom<u32>`], never
/// silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Radix {
    #[strum(to_string = "bin", serialize = "2", serialize = "binary")]
    Binary,
    #[strum(to_string = "dec", serialize = "10", serialize = "decimal")]
    Decimal,
    #[strum(to_string = "hex", serialize = "16", serialize = "hexadecimal")]
    Hexadecimal,
}

impl Radix {
    /// The numeric base, suitable for `from_str_radix` style parsing.
    #[must_use]
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// The other two bases in the closed set. When one field of a widget
    /// group changes, these are the fields that get (re)written.
    #[must_use]
    pub fn siblings(self) -> [Radix; 2] {
        match self {
            Radix::Binary => [Radix::Hexadecimal, Radix::Decimal],
            Radix::Decimal => [Radix::Hexadecimal, Radix::Binary],
            Radix::Hexadecimal => [Radix::Decimal, Radix::Binary],
        }
    }
}

impl TryFrom<u32> for Radix {
    type Error = ConversionError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        match base {
            2 => Ok(Radix::Binary),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hexadecimal),
            _ => Err(ConversionError::UnsupportedBase { base }),
        }
    }
}
