// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod input_device;
pub mod output_device;

// Re-export.
pub use input_device::*;
pub use output_device::*;
