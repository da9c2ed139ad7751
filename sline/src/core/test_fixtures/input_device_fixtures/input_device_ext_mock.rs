// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use super::{ByteSourceMock, ScriptedRead};
use crate::InputDevice;

pub trait InputDeviceExtMock {
    fn new_mock(script: impl IntoIterator<Item = ScriptedRead>) -> InputDevice;

    /// Shorthand for a script of plain bytes, e.g. `b"1 2 +\n"`.
    fn new_mock_from_bytes(bytes: impl AsRef<[u8]>) -> InputDevice;
}

impl InputDeviceExtMock for InputDevice {
    fn new_mock(script: impl IntoIterator<Item = ScriptedRead>) -> InputDevice {
        InputDevice {
            resource: Box::new(ByteSourceMock::new(script)),
            is_mock: true,
        }
    }

    fn new_mock_from_bytes(bytes: impl AsRef<[u8]>) -> InputDevice {
        InputDevice {
            resource: Box::new(ByteSourceMock::from_bytes(bytes)),
            is_mock: true,
        }
    }
}
