// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! Turns raw input bytes into [`KeyEvent`]s, one per call to [`decode_key`].
//!
//! The byte stream is untrusted: keys can be pressed mid-sequence, the terminal can send
//! sequences this decoder doesn't know, and a lone `ESC` press looks exactly like the
//! start of a sequence. Every escape sequence therefore decodes to some event without
//! waiting longer than one read timeout per byte, and bytes that were part of an
//! unknown sequence are discarded rather than inserted into the line.

use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_FUNCTION_KEY_TERMINATOR, ANSI_SS3_O,
            ARROW_DOWN_FINAL, ARROW_LEFT_FINAL, ARROW_RIGHT_FINAL, ARROW_UP_FINAL,
            ByteSource, CONTROL_CR, CONTROL_DEL, CONTROL_EOT, CONTROL_ETX, CONTROL_LF,
            ReadOutcome, SPECIAL_DELETE_CODE, SPECIAL_END_ALT1_CODE,
            SPECIAL_END_ALT2_CODE, SPECIAL_END_FINAL, SPECIAL_HOME_ALT1_CODE,
            SPECIAL_HOME_ALT2_CODE, SPECIAL_HOME_FINAL};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Any byte that isn't a key below, including other control codes.
    Char(u8),
    Backspace,
    /// Forward delete.
    Delete,
    EndOfInput,
    Submit,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// An escape sequence that was unknown or cut short.
    Unrecognized,
}

/// Blocks until one key is decoded. Timeouts before the first byte are retried.
///
/// # Errors
///
/// Returns the source's error on a hard read failure, including one in the middle of an
/// escape sequence.
pub fn decode_key<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<KeyEvent> {
    let byte = loop {
        match source.read_byte() {
            ReadOutcome::Byte(byte) => break byte,
            ReadOutcome::Timeout => {}
            ReadOutcome::Error(err) => return Err(err),
        }
    };

    let key = match byte {
        ANSI_ESC => decode_escape_sequence(source)?,
        CONTROL_DEL => KeyEvent::Backspace,
        CONTROL_ETX | CONTROL_EOT => KeyEvent::EndOfInput,
        CONTROL_LF | CONTROL_CR => KeyEvent::Submit,
        other => KeyEvent::Char(other),
    };

    tracing::trace!(message = "decoded key", byte, ?key);
    Ok(key)
}

/// A byte that must follow quickly, or `None` if the read timed out.
fn read_sequence_byte<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<Option<u8>> {
    match source.read_byte() {
        ReadOutcome::Byte(byte) => Ok(Some(byte)),
        ReadOutcome::Timeout => Ok(None),
        ReadOutcome::Error(err) => Err(err),
    }
}

/// Called after `ESC`. Always consumes two bytes (if they arrive), and a third when the
/// second is a digit.
fn decode_escape_sequence<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<KeyEvent> {
    let Some(introducer) = read_sequence_byte(source)? else {
        return Ok(KeyEvent::Unrecognized);
    };
    let Some(code) = read_sequence_byte(source)? else {
        return Ok(KeyEvent::Unrecognized);
    };

    if code.is_ascii_digit() {
        let Some(terminator) = read_sequence_byte(source)? else {
            return Ok(KeyEvent::Unrecognized);
        };
        if introducer != ANSI_CSI_BRACKET || terminator != ANSI_FUNCTION_KEY_TERMINATOR {
            return Ok(KeyEvent::Unrecognized);
        }
        return Ok(decode_numeric_code(code));
    }

    Ok(match introducer {
        ANSI_CSI_BRACKET | ANSI_SS3_O => decode_final_byte(code),
        _ => KeyEvent::Unrecognized,
    })
}

/// `ESC [ <code> ~`.
fn decode_numeric_code(code: u8) -> KeyEvent {
    match code {
        SPECIAL_DELETE_CODE => KeyEvent::Delete,
        SPECIAL_HOME_ALT1_CODE | SPECIAL_HOME_ALT2_CODE => KeyEvent::Home,
        SPECIAL_END_ALT1_CODE | SPECIAL_END_ALT2_CODE => KeyEvent::End,
        _ => KeyEvent::Unrecognized,
    }
}

/// `ESC [ <final>` or `ESC O <final>`.
fn decode_final_byte(final_byte: u8) -> KeyEvent {
    match final_byte {
        ARROW_UP_FINAL => KeyEvent::Up,
        ARROW_DOWN_FINAL => KeyEvent::Down,
        ARROW_RIGHT_FINAL => KeyEvent::Right,
        ARROW_LEFT_FINAL => KeyEvent::Left,
        SPECIAL_HOME_FINAL => KeyEvent::Home,
        SPECIAL_END_FINAL => KeyEvent::End,
        _ => KeyEvent::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteSourceMock, ScriptedRead};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn decode_all(bytes: &[u8]) -> Vec<KeyEvent> {
        let mut source = ByteSourceMock::from_bytes(bytes);
        let mut keys = vec![];
        while source.remaining() > 0 {
            keys.push(decode_key(&mut source).unwrap());
        }
        keys
    }

    #[test_case(b"a", KeyEvent::Char(b'a') ; "plain char")]
    #[test_case(b"\t", KeyEvent::Char(b'\t') ; "other control code is a char")]
    #[test_case(b"\x7f", KeyEvent::Backspace ; "del")]
    #[test_case(b"\x03", KeyEvent::EndOfInput ; "ctrl c")]
    #[test_case(b"\x04", KeyEvent::EndOfInput ; "ctrl d")]
    #[test_case(b"\n", KeyEvent::Submit ; "line feed")]
    #[test_case(b"\r", KeyEvent::Submit ; "carriage return")]
    #[test_case(b"\x1b[A", KeyEvent::Up ; "csi up")]
    #[test_case(b"\x1b[B", KeyEvent::Down ; "csi down")]
    #[test_case(b"\x1b[C", KeyEvent::Right ; "csi right")]
    #[test_case(b"\x1b[D", KeyEvent::Left ; "csi left")]
    #[test_case(b"\x1b[H", KeyEvent::Home ; "csi home")]
    #[test_case(b"\x1b[F", KeyEvent::End ; "csi end")]
    #[test_case(b"\x1bOA", KeyEvent::Up ; "ss3 up")]
    #[test_case(b"\x1bOH", KeyEvent::Home ; "ss3 home")]
    #[test_case(b"\x1b[1~", KeyEvent::Home ; "vt220 home")]
    #[test_case(b"\x1b[3~", KeyEvent::Delete ; "delete")]
    #[test_case(b"\x1b[4~", KeyEvent::End ; "vt220 end")]
    #[test_case(b"\x1b[7~", KeyEvent::Home ; "rxvt home")]
    #[test_case(b"\x1b[8~", KeyEvent::End ; "rxvt end")]
    #[test_case(b"\x1b[5~", KeyEvent::Unrecognized ; "page up is not handled")]
    #[test_case(b"\x1b[Z", KeyEvent::Unrecognized ; "unknown final byte")]
    #[test_case(b"\x1bxy", KeyEvent::Unrecognized ; "bad introducer")]
    #[test_case(b"\x1b[3x", KeyEvent::Unrecognized ; "bad terminator")]
    #[test_case(b"\x1bO3~", KeyEvent::Unrecognized ; "numeric code needs csi")]
    fn test_decode_single_key(bytes: &[u8], expected: KeyEvent) {
        let mut source = ByteSourceMock::from_bytes(bytes);
        assert_eq!(decode_key(&mut source).unwrap(), expected);
        // The whole sequence is consumed, nothing is left over as fake keystrokes.
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_timeouts_before_a_key_are_retried() {
        let mut source = ByteSourceMock::new([
            ScriptedRead::Timeout,
            ScriptedRead::Timeout,
            ScriptedRead::Timeout,
            ScriptedRead::Byte(b'5'),
        ]);
        assert_eq!(decode_key(&mut source).unwrap(), KeyEvent::Char(b'5'));
    }

    #[test]
    fn test_hard_error_is_returned() {
        let mut source =
            ByteSourceMock::new([ScriptedRead::Error(io::ErrorKind::BrokenPipe)]);
        let err = decode_key(&mut source).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_hard_error_inside_escape_sequence_is_returned() {
        let mut source = ByteSourceMock::new([
            ScriptedRead::Byte(ANSI_ESC),
            ScriptedRead::Byte(b'['),
            ScriptedRead::Error(io::ErrorKind::BrokenPipe),
        ]);
        assert!(decode_key(&mut source).is_err());
    }

    #[test]
    fn test_lone_escape_times_out_as_unrecognized() {
        let mut source = ByteSourceMock::new([
            ScriptedRead::Byte(ANSI_ESC),
            ScriptedRead::Timeout,
            ScriptedRead::Byte(b'a'),
        ]);
        assert_eq!(decode_key(&mut source).unwrap(), KeyEvent::Unrecognized);
        // The next keystroke decodes normally.
        assert_eq!(decode_key(&mut source).unwrap(), KeyEvent::Char(b'a'));
    }

    #[test]
    fn test_truncated_sequence_discards_consumed_bytes() {
        let mut source = ByteSourceMock::new([
            ScriptedRead::Byte(ANSI_ESC),
            ScriptedRead::Byte(b'['),
            ScriptedRead::Timeout,
            ScriptedRead::Byte(b'1'),
        ]);
        assert_eq!(decode_key(&mut source).unwrap(), KeyEvent::Unrecognized);
        assert_eq!(decode_key(&mut source).unwrap(), KeyEvent::Char(b'1'));
    }

    #[test]
    fn test_truncated_numeric_sequence() {
        let mut source = ByteSourceMock::new([
            ScriptedRead::Byte(ANSI_ESC),
            ScriptedRead::Byte(b'['),
            ScriptedRead::Byte(b'3'),
            ScriptedRead::Timeout,
        ]);
        assert_eq!(decode_key(&mut source).unwrap(), KeyEvent::Unrecognized);
    }

    #[test]
    fn test_mixed_stream() {
        assert_eq!(
            decode_all(b"1\x1b[D\x1bzz2\x7f\n"),
            vec![
                KeyEvent::Char(b'1'),
                KeyEvent::Left,
                KeyEvent::Unrecognized,
                KeyEvent::Char(b'2'),
                KeyEvent::Backspace,
                KeyEvent::Submit,
            ]
        );
    }
}
