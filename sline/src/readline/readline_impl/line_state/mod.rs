// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! The line being edited by one [`Sline::read_line`] call, and the terminal output that
//! keeps the visible line in step with it.
//!
//! | Module           | Responsibility                                            |
//! |------------------|-----------------------------------------------------------|
//! | `core`           | [`LineState`] struct, buffer and cursor accessors         |
//! | `cursor`         | Cursor motion (left, right, home, end)                    |
//! | `editing`        | Insert, delete, and whole-line replacement                |
//! | `event_handlers` | [`KeyEvent`] dispatch, history navigation                 |
//! | `render`         | Suffix redraw with save / restore cursor                  |
//!
//! The buffer is byte oriented and the terminal is assumed to draw one cell per byte.
//! Every operation keeps `0 <= cursor <= len <= capacity`, and none of them allocate
//! once the [`LineState`] exists.
//!
//! [`Sline::read_line`]: crate::Sline::read_line
//! [`KeyEvent`]: crate::KeyEvent

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules organized by functional responsibility.
mod core;
mod cursor;
mod editing;
mod event_handlers;
mod render;

// Public re-exports (expose stable API).
pub use core::*;
pub use event_handlers::*;
