// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod pty_pair;

// Re-export.
pub use pty_pair::*;
