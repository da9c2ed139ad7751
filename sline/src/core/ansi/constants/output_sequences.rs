// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! Output sequences written by the line editor. This is the complete wire vocabulary;
//! nothing else except the line's own bytes and a final newline is ever emitted.

use std::io::{self, Write};

/// `ESC [ 0 K`: erase from the cursor to the end of the line.
pub const CLEAR_TO_EOL: &[u8] = b"\x1b[0K";

/// `ESC 7` (DECSC): save cursor position.
pub const SAVE_CURSOR: &[u8] = b"\x1b7";

/// `ESC 8` (DECRC): restore cursor position.
pub const RESTORE_CURSOR: &[u8] = b"\x1b8";

/// `ESC [ D`: one cell left.
pub const CURSOR_LEFT: &[u8] = b"\x1b[D";

/// `ESC [ C`: one cell right.
pub const CURSOR_RIGHT: &[u8] = b"\x1b[C";

/// Moves the cursor one cell left without the CSI round trip. Used before a backward
/// delete.
pub const BACKSPACE: &[u8] = b"\x08";

pub const NEWLINE: &[u8] = b"\n";

/// `ESC [ n D`. Writes nothing when `n` is zero, since `ESC [ 0 D` moves one cell on
/// most terminals.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_cursor_backward(term: &mut dyn Write, n: usize) -> io::Result<()> {
    if n == 0 {
        return Ok(());
    }
    write!(term, "\x1b[{n}D")
}

/// `ESC [ n C`. Writes nothing when `n` is zero.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_cursor_forward(term: &mut dyn Write, n: usize) -> io::Result<()> {
    if n == 0 {
        return Ok(());
    }
    write!(term, "\x1b[{n}C")
}
