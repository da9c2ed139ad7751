// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! Byte values and escape sequences used on the wire. Input bytes are what the key
//! decoder matches against, output sequences are what the line editor emits.

// Attach.
pub mod input_sequences;
pub mod output_sequences;

// Re-export.
pub use input_sequences::*;
pub use output_sequences::*;
