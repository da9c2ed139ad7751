// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod readline_impl;

// Re-export.
pub use readline_impl::*;
