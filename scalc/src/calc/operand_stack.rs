// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::{CalcError, CalcResult, Operands};
use smallvec::SmallVec;

/// Most operands the stack holds at once.
pub const STACK_SIZE: usize = 32;

/// Operand stack that persists across lines. Lives inline (no heap) since it is bounded
/// by [`STACK_SIZE`].
///
/// Indices used by [`Self::peek`] count from the top: `0` is the most recent push.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    elems: SmallVec<[f64; STACK_SIZE]>,
}

impl OperandStack {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn len(&self) -> usize { self.elems.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.elems.is_empty() }

    /// # Errors
    ///
    /// Returns [`CalcError::StackOverflow`] if the stack already holds [`STACK_SIZE`]
    /// elements. The stack is unchanged.
    pub fn push(&mut self, value: f64) -> CalcResult<()> {
        if self.elems.len() == STACK_SIZE {
            return Err(CalcError::StackOverflow);
        }
        self.elems.push(value);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CalcError::StackUnderflow`] if the stack is empty.
    pub fn pop(&mut self) -> CalcResult<f64> {
        self.elems.pop().ok_or(CalcError::StackUnderflow)
    }

    /// # Errors
    ///
    /// Returns [`CalcError::StackUnderflow`] if there are `index` or fewer elements.
    pub fn peek(&self, index: usize) -> CalcResult<f64> {
        let len = self.elems.len();
        if index >= len {
            return Err(CalcError::StackUnderflow);
        }
        Ok(self.elems[len - 1 - index])
    }

    /// Pops exactly `arity` operands, or none when there aren't enough.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::StackUnderflow`] if the stack holds fewer than `arity`
    /// elements, or `arity` is not 1 or 2.
    pub fn pop_operands(&mut self, arity: usize) -> CalcResult<Operands> {
        if arity > self.elems.len() {
            return Err(CalcError::StackUnderflow);
        }
        match arity {
            1 => Ok(Operands::One(self.pop()?)),
            2 => {
                let b = self.pop()?;
                let a = self.pop()?;
                Ok(Operands::Two(a, b))
            }
            _ => Err(CalcError::StackUnderflow),
        }
    }

    /// Removes the top `count` elements, or none when there aren't enough.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::StackUnderflow`] if the stack holds fewer than `count`
    /// elements.
    pub fn drop_top(&mut self, count: usize) -> CalcResult<()> {
        let len = self.elems.len();
        if count > len {
            return Err(CalcError::StackUnderflow);
        }
        self.elems.truncate(len - count);
        Ok(())
    }

    /// Pushes a copy of the top element.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::StackUnderflow`] on an empty stack, and
    /// [`CalcError::StackOverflow`] on a full one.
    pub fn dup(&mut self) -> CalcResult<()> {
        let top = self.peek(0)?;
        self.push(top)
    }

    /// Exchanges the top two elements.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::StackUnderflow`] with fewer than two elements.
    pub fn swap(&mut self) -> CalcResult<()> {
        let len = self.elems.len();
        if len < 2 {
            return Err(CalcError::StackUnderflow);
        }
        self.elems.swap(len - 1, len - 2);
        Ok(())
    }

    pub fn clear(&mut self) { self.elems.clear(); }

    /// Bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ { self.elems.iter().copied() }
}
