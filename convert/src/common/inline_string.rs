// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocated string & vec storage for the short renderings this crate
//! produces (2-digit hex, 8-digit binary, `rgb(r, g, b)` strings, field ids).

use smallstr::SmallString;
use smallvec::SmallVec;

/// Stack allocated string storage for small strings. When this gets larger
/// than [`DEFAULT_STRING_STORAGE_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the
/// heap if it gets larger than [`INLINE_VEC_SIZE`]. The widest widget group
/// (ASCII transcoder) patches 4 fields, so 8 never spills in practice.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;

/// Format the arguments into a freshly allocated [`InlineString`]. No heap
/// allocation occurs unless the output spills past
/// [`DEFAULT_STRING_STORAGE_SIZE`].
#[macro_export]
macro_rules! inline_string {
    ($($arg:tt)*) => {{
        use std::fmt::Write;
        let mut acc = $crate::InlineString::new();
        // We don't care about the result of this operation.
        write!(&mut acc, $($arg)*).ok();
        acc
    }};
}
