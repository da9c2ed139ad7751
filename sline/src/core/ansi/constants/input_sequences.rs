// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! Input byte constants for the key decoder.
//!
//! # Sequences the decoder understands
//!
//! | Keys              | Bytes                                |
//! |-------------------|--------------------------------------|
//! | Up / Down         | `ESC [ A` / `ESC [ B` (or `ESC O ..`)|
//! | Right / Left      | `ESC [ C` / `ESC [ D` (or `ESC O ..`)|
//! | Home              | `ESC [ H`, `ESC [ 1 ~`, `ESC [ 7 ~`  |
//! | End               | `ESC [ F`, `ESC [ 4 ~`, `ESC [ 8 ~`  |
//! | Delete (forward)  | `ESC [ 3 ~`                          |
//! | Backspace         | `DEL` (0x7F)                         |
//! | End of input      | `ETX` (Ctrl+C), `EOT` (Ctrl+D)       |
//! | Submit            | `LF` (or `CR` if not translated)     |
//!
//! Only single digit parameters are recognized. Anything else after an `ESC` is
//! swallowed and reported as unrecognized.

// ==================== ANSI Sequence Components ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// SS3 'O' byte, sent instead of `[` by terminals in application cursor mode.
pub const ANSI_SS3_O: u8 = b'O';

/// Terminator of the numeric key sequences: `~` (126 in decimal, 0x7E in hex)
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

// ==================== Arrow Keys (CSI A/B/C/D) ====================

pub const ARROW_UP_FINAL: u8 = b'A';
pub const ARROW_DOWN_FINAL: u8 = b'B';
pub const ARROW_RIGHT_FINAL: u8 = b'C';
pub const ARROW_LEFT_FINAL: u8 = b'D';

// ==================== Special Keys (CSI H/F) ====================

pub const SPECIAL_HOME_FINAL: u8 = b'H';
pub const SPECIAL_END_FINAL: u8 = b'F';

// ==================== Special Keys (CSI n~) ====================

/// CSI 1~: Home key code (vt220)
pub const SPECIAL_HOME_ALT1_CODE: u8 = b'1';

/// CSI 3~: Delete key code
pub const SPECIAL_DELETE_CODE: u8 = b'3';

/// CSI 4~: End key code (vt220)
pub const SPECIAL_END_ALT1_CODE: u8 = b'4';

/// CSI 7~: Home key code (rxvt)
pub const SPECIAL_HOME_ALT2_CODE: u8 = b'7';

/// CSI 8~: End key code (rxvt)
pub const SPECIAL_END_ALT2_CODE: u8 = b'8';

// ==================== Control Codes ====================

/// Ctrl+C. Arrives as a byte since `ISIG` is off in raw mode.
pub const CONTROL_ETX: u8 = 0x03;

/// Ctrl+D.
pub const CONTROL_EOT: u8 = 0x04;

/// Enter, after the terminal translates CR to LF (`ICRNL`).
pub const CONTROL_LF: u8 = 0x0A;

/// Enter, when `ICRNL` is off.
pub const CONTROL_CR: u8 = 0x0D;

/// Backspace key on most terminals.
pub const CONTROL_DEL: u8 = 0x7F;
