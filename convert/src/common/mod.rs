// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod conversion_error;
pub mod inline_string;
pub mod radix;

// Re-export.
pub use conversion_error::*;
pub use inline_string::*;
pub use radix::*;
