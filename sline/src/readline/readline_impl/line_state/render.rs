// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::{CLEAR_TO_EOL, RESTORE_CURSOR, SAVE_CURSOR};
use std::io::{self, Write};

/// Rewrites everything right of the terminal cursor as `suffix`, leaving the cursor
/// where it was. Only the tail of the line is ever retransmitted.
pub(super) fn redraw_tail(term: &mut dyn Write, suffix: &[u8]) -> io::Result<()> {
    term.write_all(CLEAR_TO_EOL)?;
    if suffix.is_empty() {
        return Ok(());
    }
    term.write_all(SAVE_CURSOR)?;
    term.write_all(suffix)?;
    term.write_all(RESTORE_CURSOR)
}
