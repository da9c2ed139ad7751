// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::{CalcError, CalcResult};

/// Number of registers, named `A`..=`Z`.
pub const REGISTER_COUNT: usize = 26;

/// Named memory slots. Every register starts at `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRegisters {
    values: [f64; REGISTER_COUNT],
}

impl Default for MemoryRegisters {
    fn default() -> Self {
        Self {
            values: [0.0; REGISTER_COUNT],
        }
    }
}

impl MemoryRegisters {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// # Errors
    ///
    /// Returns [`CalcError::BadRegister`] if `name` is not `A`..=`Z`.
    pub fn get(&self, name: char) -> CalcResult<f64> {
        Ok(self.values[register_index(name)?])
    }

    /// # Errors
    ///
    /// Returns [`CalcError::BadRegister`] if `name` is not `A`..=`Z`.
    pub fn set(&mut self, name: char, value: f64) -> CalcResult<()> {
        self.values[register_index(name)?] = value;
        Ok(())
    }

    /// Resets every register to `0`.
    pub fn clear(&mut self) { self.values = [0.0; REGISTER_COUNT]; }
}

/// A token that names a register: exactly one character in `A`..=`Z`.
#[must_use]
pub fn as_register_name(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(name), None) if name.is_ascii_uppercase() => Some(name),
        _ => None,
    }
}

/// Parses the argument of `:sav`.
///
/// # Errors
///
/// - [`CalcError::RegisterRequired`] if `arg` is longer than one character.
/// - [`CalcError::BadRegister`] if it is one character outside `A`..=`Z`.
pub fn parse_register_arg(arg: &str) -> CalcResult<char> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(name), None) => {
            register_index(name)?;
            Ok(name)
        }
        _ => Err(CalcError::RegisterRequired),
    }
}

fn register_index(name: char) -> CalcResult<usize> {
    if name.is_ascii_uppercase() {
        Ok(usize::from(name as u8 - b'A'))
    } else {
        Err(CalcError::BadRegister)
    }
}
