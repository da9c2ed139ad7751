// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

// Attach.
pub mod app_main;
pub mod clap_config;
pub mod input_source;
#[cfg(unix)]
pub mod signal_guard;

// Re-export.
pub use app_main::*;
pub use clap_config::*;
pub use input_source::*;
#[cfg(unix)]
pub use signal_guard::*;
