// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! Fakes for the terminal: a scripted byte source, an in-memory output sink, and a PTY
//! pair for checking termios changes without a controlling terminal.

// Attach sources.
pub mod input_device_fixtures;
pub mod output_device_fixtures;
pub mod pty_test_fixtures;

// Re-export.
pub use input_device_fixtures::*;
pub use output_device_fixtures::*;
pub use pty_test_fixtures::*;
