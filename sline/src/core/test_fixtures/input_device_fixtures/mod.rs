// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod byte_source_mock;
pub mod input_device_ext_mock;

// Re-export.
pub use byte_source_mock::*;
pub use input_device_ext_mock::*;
