// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod ring_buffer;
pub mod ring_buffer_heap;

// Re-export.
pub use ring_buffer::*;
pub use ring_buffer_heap::*;
