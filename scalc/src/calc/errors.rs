// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use std::io;

/// Why a line could not be fully evaluated. None of these end the session: the
/// evaluator prints `"{token}: {message}"` on stderr and moves on to the next line.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum CalcError {
    #[error("too few arguments passed.")]
    #[diagnostic(code(scalc::command::few_args))]
    FewArgs,

    /// Opening or writing the `:dmp` target failed.
    #[error("{0}")]
    #[diagnostic(code(scalc::command::file_io))]
    FileIo(#[from] io::Error),

    #[error("invalid command.")]
    #[diagnostic(code(scalc::command::invalid))]
    InvalidCommand,

    #[error("not found.")]
    #[diagnostic(code(scalc::command::whatis_not_found))]
    WhatisNotFound,

    /// A single character that isn't one of `A`..=`Z`.
    #[error("bad register.")]
    #[diagnostic(code(scalc::memory::bad_register))]
    BadRegister,

    /// More than one character where a register name was expected.
    #[error("register required.")]
    #[diagnostic(code(scalc::memory::register_required))]
    RegisterRequired,

    /// Not a number, register, or known operation, or an operation with no defined
    /// result such as `% 0`.
    #[error("undefined operation.")]
    #[diagnostic(code(scalc::operation::undefined))]
    UndefinedOperation,

    #[error("too many elements stored in stack.")]
    #[diagnostic(code(scalc::stack::overflow))]
    StackOverflow,

    #[error("too few elements in stack.")]
    #[diagnostic(code(scalc::stack::underflow))]
    StackUnderflow,
}

pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(CalcError::FewArgs, "too few arguments passed.")]
    #[test_case(CalcError::InvalidCommand, "invalid command.")]
    #[test_case(CalcError::WhatisNotFound, "not found.")]
    #[test_case(CalcError::BadRegister, "bad register.")]
    #[test_case(CalcError::RegisterRequired, "register required.")]
    #[test_case(CalcError::UndefinedOperation, "undefined operation.")]
    #[test_case(CalcError::StackOverflow, "too many elements stored in stack.")]
    #[test_case(CalcError::StackUnderflow, "too few elements in stack.")]
    fn test_messages(err: CalcError, expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_file_io_uses_os_message() {
        let err = CalcError::from(io::Error::new(
            io::ErrorKind::NotFound,
            "No such file or directory",
        ));
        assert_eq!(err.to_string(), "No such file or directory");
    }
}
