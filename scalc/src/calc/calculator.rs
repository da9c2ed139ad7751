// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::{CalcError, CalcResult, Command, CommandOutput, HistorySource, MemoryRegisters,
            OperandStack, Operation, as_register_name};
use std::{fmt::{Debug, Formatter},
          io::{self, Write}};

/// Decimals printed when none are configured.
pub const DEFAULT_PRECISION: usize = 2;

/// Where evaluation results go. `out` gets results, `err` gets `"{token}: {message}"`
/// diagnostics, and `history` is what `:dmp` writes out.
pub struct EvalContext<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub history: &'a dyn HistorySource,
}

impl Debug for EvalContext<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvalContext").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Desk calculator state: the operand stack and memory registers, both kept across
/// lines for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    pub stack: OperandStack,
    pub memory: MemoryRegisters,
    precision: usize,
}

impl Default for Calculator {
    fn default() -> Self { Self::new(DEFAULT_PRECISION) }
}

impl Calculator {
    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self {
            stack: OperandStack::new(),
            memory: MemoryRegisters::new(),
            precision,
        }
    }

    #[must_use]
    pub fn format_number(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }

    /// Evaluates one line of input. Leading whitespace is skipped and blank lines do
    /// nothing. A line starting with `:` is a [`Command`], anything else is an RPN
    /// expression.
    ///
    /// Calculation errors are reported on `context.err` and don't stop the session.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `context.out` or `context.err` fails.
    pub fn eval_line(
        &mut self,
        line: &str,
        context: &mut EvalContext<'_>,
    ) -> io::Result<LineOutcome> {
        let expr = line.trim_start();
        if expr.is_empty() {
            return Ok(LineOutcome::Continue);
        }
        if expr.starts_with(':') {
            return self.eval_command(expr, context);
        }
        self.eval_math(expr, context)?;
        Ok(LineOutcome::Continue)
    }

    /// Pushes numbers and register values, and applies operations, left to right. The
    /// first failing token ends the line; everything before it stays applied. On success
    /// the top of the stack is printed.
    fn eval_math(&mut self, expr: &str, context: &mut EvalContext<'_>) -> io::Result<()> {
        for token in expr.split_ascii_whitespace() {
            if let Err(err) = self.eval_token(token) {
                tracing::debug!(message = "expression failed", token, error = %err);
                return writeln!(context.err, "{token}: {err}");
            }
        }

        match self.stack.peek(0) {
            Ok(top) => writeln!(context.out, "{}", self.format_number(top)),
            Err(err) => writeln!(context.err, "{expr}: {err}"),
        }
    }

    fn eval_token(&mut self, token: &str) -> CalcResult<()> {
        if let Ok(number) = token.parse::<f64>() {
            return self.stack.push(number);
        }
        if let Some(name) = as_register_name(token) {
            let value = self.memory.get(name)?;
            return self.stack.push(value);
        }
        let operation = Operation::lookup(token).ok_or(CalcError::UndefinedOperation)?;
        let operands = self.stack.pop_operands(operation.arity())?;
        let result = operation.apply(operands)?;
        self.stack.push(result)
    }

    fn eval_command(
        &mut self,
        expr: &str,
        context: &mut EvalContext<'_>,
    ) -> io::Result<LineOutcome> {
        let mut tokens = expr.split_ascii_whitespace();
        let name = tokens.next().unwrap_or_default();
        let arg = tokens.next();

        let result = Command::lookup(name)
            .ok_or(CalcError::InvalidCommand)
            .and_then(|command| self.run_command(command, arg, context.history));

        match result {
            Ok(CommandOutput::Silent) => Ok(LineOutcome::Continue),
            Ok(CommandOutput::Print(text)) => {
                writeln!(context.out, "{text}")?;
                Ok(LineOutcome::Continue)
            }
            Ok(CommandOutput::Quit) => Ok(LineOutcome::Quit),
            Err(err) => {
                tracing::debug!(message = "command failed", expr, error = %err);
                writeln!(context.err, "{expr}: {err}")?;
                Ok(LineOutcome::Continue)
            }
        }
    }
}
