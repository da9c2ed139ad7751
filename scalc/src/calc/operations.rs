// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! The operation registry. Every operation takes one or two operands off the stack and
//! pushes one result. To add one, add a variant with its `serialize` name, then give it
//! an arity, a description, and a body below.

use crate::{CalcError, CalcResult};
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString, IntoStaticStr)]
pub enum Operation {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
    #[strum(serialize = "^")]
    Power,
    #[strum(serialize = "ln")]
    NaturalLog,
    #[strum(serialize = "sqrt")]
    SquareRoot,
    #[strum(serialize = "!")]
    Factorial,
    #[strum(serialize = "%")]
    Modulo,
}

/// Operands as popped, in push order: for `a b -`, `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    One(f64),
    Two(f64, f64),
}

impl Operation {
    /// Returns `None` if `token` isn't an operation name.
    #[must_use]
    pub fn lookup(token: &str) -> Option<Self> { token.parse().ok() }

    /// The token that invokes this operation, e.g. `"sqrt"`.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }

    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Operation::NaturalLog | Operation::SquareRoot | Operation::Factorial => 1,
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power
            | Operation::Modulo => 2,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Operation::Add => "Addition.",
            Operation::Subtract => "Subtraction.",
            Operation::Multiply => "Multiplication.",
            Operation::Divide => "Division.",
            Operation::Power => "Raise to the power of the last element.",
            Operation::NaturalLog => "Natural logarithm.",
            Operation::SquareRoot => "Square root.",
            Operation::Factorial => "Factorial.",
            Operation::Modulo => "Remainder of integer division.",
        }
    }

    /// Floating point results such as `1 0 /` (infinity) or `-1 sqrt` (NaN) are
    /// returned as is.
    ///
    /// # Errors
    ///
    /// - [`CalcError::UndefinedOperation`] for `%` by zero (after truncating to an
    ///   integer), or one that overflows.
    /// - [`CalcError::StackUnderflow`] if `operands` doesn't match [`Self::arity`].
    pub fn apply(self, operands: Operands) -> CalcResult<f64> {
        match (self, operands) {
            (Operation::Add, Operands::Two(a, b)) => Ok(a + b),
            (Operation::Subtract, Operands::Two(a, b)) => Ok(a - b),
            (Operation::Multiply, Operands::Two(a, b)) => Ok(a * b),
            (Operation::Divide, Operands::Two(a, b)) => Ok(a / b),
            (Operation::Power, Operands::Two(a, b)) => Ok(a.powf(b)),
            (Operation::Modulo, Operands::Two(a, b)) => modulo(a, b),
            (Operation::NaturalLog, Operands::One(n)) => Ok(n.ln()),
            (Operation::SquareRoot, Operands::One(n)) => Ok(n.sqrt()),
            (Operation::Factorial, Operands::One(n)) => Ok(factorial(n)),
            _ => Err(CalcError::StackUnderflow),
        }
    }
}

/// `n * (n - 1) * ...` while the factor is greater than one. Also defined for
/// non-integers, e.g. `2.5 !` is `2.5 * 1.5`.
fn factorial(n: f64) -> f64 {
    let mut result = 1.0;
    let mut factor = n;
    while factor > 1.0 {
        result *= factor;
        factor -= 1.0;
    }
    result
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn modulo(a: f64, b: f64) -> CalcResult<f64> {
    let (a, b) = (a as i64, b as i64);
    a.checked_rem(b)
        .map(|it| it as f64)
        .ok_or(CalcError::UndefinedOperation)
}
