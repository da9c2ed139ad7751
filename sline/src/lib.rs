// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! # sline
//!
//! A small, synchronous line editor for interactive prompts. It is a readline substitute
//! with exactly the features a desk calculator prompt needs, and nothing else.
//!
//! - [`TerminalMode`] puts the terminal in raw mode (no canonical input, no echo, no
//!   signal keys) with `VMIN = 0` and `VTIME = 1`, so every read returns within 100ms.
//!   The original attributes are restored on [`Sline::teardown`], on [`Drop`], or from a
//!   signal handler via [`TerminalRestorer`].
//! - [`decode_key`] turns an untrusted byte stream ([`ByteSource`]) into one
//!   [`KeyEvent`] per call. Escape sequences that are truncated or unknown decode to
//!   [`KeyEvent::Unrecognized`] and never leak bytes into the line.
//! - [`LineState`] is the fixed capacity line buffer. Every edit writes the minimal
//!   ANSI output: the inserted byte, then the shifted tail bracketed by save / restore
//!   cursor.
//! - [`History`] is a bounded FIFO of submitted lines, backed by a [`RingBufferHeap`].
//! - [`Sline`] owns all of the above for one interactive session.
//!
//! ```no_run
//! use sline::{LineError, Sline};
//!
//! let mut sline = Sline::new();
//! sline.setup().expect("raw mode");
//! loop {
//!     match sline.read_line_string(64) {
//!         Ok(line) => println!("{line}"),
//!         Err(LineError::EndOfInput) => break,
//!         Err(_) => {
//!             eprintln!("sline: {}", sline.error_message());
//!             break;
//!         }
//!     }
//! }
//! sline.teardown();
//! ```
//!
//! Unix only. Everything is byte oriented: a multi-byte UTF-8 character occupies as
//! many cursor cells as it has bytes.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]
// Deny unwrap in production library code (but allow in tests).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod core;
pub mod readline;

// Re-export.
pub use core::*;
pub use readline::*;

/// Version of this crate, e.g. for a `--version` banner.
pub const SLINE_VERSION: &str = env!("CARGO_PKG_VERSION");
