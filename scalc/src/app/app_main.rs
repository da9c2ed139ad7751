// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::{CLIArg, Calculator, EvalContext, InputSource, LineOutcome};
use miette::IntoDiagnostic;
use std::io::{self, Write};

/// Evaluates the file named on the command line, or standard input. With `-i`, the
/// prompt takes over once the file is exhausted, keeping the stack and registers.
///
/// # Errors
///
/// Returns the fatal errors that end the program with status 1: the file can't be
/// opened, the terminal can't be set up, or the prompt fails while reading.
pub fn run_app(cli_arg: &CLIArg) -> miette::Result<()> {
    let mut calculator = Calculator::new(cli_arg.precision);

    let input = match &cli_arg.file {
        Some(path) => InputSource::open_file(path)?,
        None => InputSource::stdin()?,
    };
    if run_input(&mut calculator, input)? == LineOutcome::Quit {
        return Ok(());
    }

    if cli_arg.interactive && cli_arg.file.is_some() {
        tracing::info!(message = "file exhausted, switching to standard input");
        run_input(&mut calculator, InputSource::stdin()?)?;
    }

    Ok(())
}

/// Owns `input` for its lifetime: a prompt is guarded against termination signals
/// while it runs and restored when it ends.
fn run_input(calculator: &mut Calculator, mut input: InputSource) -> miette::Result<LineOutcome> {
    #[cfg(unix)]
    let _signal_guard = input
        .restorer()
        .map(crate::SignalGuard::new)
        .transpose()
        .into_diagnostic()?;

    tracing::info!(message = "session start", is_prompt = input.is_prompt());
    let result = run_session(calculator, &mut input, &mut io::stdout(), &mut io::stderr());
    input.teardown();
    tracing::info!(message = "session end", result = ?result);

    result
}

/// Reads and evaluates lines until input is exhausted or `:quit`.
///
/// # Errors
///
/// Returns the input's fatal read error, or a failure to write to `out` or `err`.
pub fn run_session(
    calculator: &mut Calculator,
    input: &mut InputSource,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> miette::Result<LineOutcome> {
    while let Some(line) = input.next_line(err)? {
        let mut context = EvalContext {
            out: &mut *out,
            err: &mut *err,
            history: &*input,
        };
        if calculator.eval_line(&line, &mut context).into_diagnostic()? == LineOutcome::Quit {
            return Ok(LineOutcome::Quit);
        }
    }
    Ok(LineOutcome::Continue)
}
