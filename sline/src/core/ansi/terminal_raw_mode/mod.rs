// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! Terminal raw mode for a line editor.
//!
//! ## Cooked vs line-raw
//!
//! **Cooked mode** (the default) has the kernel line discipline buffer input until
//! Enter, echo what is typed, and turn Ctrl+C / Ctrl+Z into signals. A line editor needs
//! to see every byte as it arrives, so [`TerminalMode::setup`] clears three local mode
//! flags:
//!
//! | Flag     | Effect when cleared                                       |
//! |----------|-----------------------------------------------------------|
//! | `ICANON` | bytes are delivered immediately, not per line             |
//! | `ECHO`   | typed bytes don't appear; the editor draws them itself    |
//! | `ISIG`   | Ctrl+C arrives as `0x03` instead of raising `SIGINT`      |
//!
//! and sets `VMIN = 0`, `VTIME = 1`. A `read(2)` then returns as soon as one byte is
//! available, or returns 0 after 100ms of silence. The key decoder treats that 0 as a
//! timeout and polls again, and uses it to bail out of a truncated escape sequence.
//!
//! Unlike `cfmakeraw`, output processing (`OPOST`) and CR to LF translation (`ICRNL`)
//! are left alone, so `"\n"` still moves to the start of the next line and Enter still
//! arrives as `LF`. The same change from a shell:
//!
//! ```bash
//! stty -icanon -echo -isig min 0 time 1
//! ```
//!
//! ## Ownership
//!
//! There are no process globals. A [`TerminalMode`] owns the terminal handle and the
//! snapshot of the original attributes. The snapshot is restored by
//! [`TerminalMode::teardown`], which is idempotent and also runs on [`Drop`]. For exits
//! that skip destructors (a fatal signal), take a [`TerminalRestorer`] after setup and
//! move it into the signal handling thread.
//!
//! ```no_run
//! use sline::TerminalMode;
//!
//! let mut mode = TerminalMode::new_stdin();
//! mode.setup().expect("raw mode");
//! // ... read bytes ...
//! mode.teardown().expect("restore");
//! ```

// Private modules (hide internal structure).
mod raw_mode_core;
mod raw_mode_unix;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
pub use raw_mode_unix::TerminalFd;
