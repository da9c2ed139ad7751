// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod constants;
pub mod terminal_raw_mode;

// Re-export.
pub use constants::*;
pub use terminal_raw_mode::*;
