// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! Tracing setup. The editor itself only calls the `tracing` macros; a binary decides
//! whether and where they go with [`try_initialize_logging_global`].

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
