// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! Colon commands, e.g. `:p 3` or `:sav A`. A command takes at most one argument, the
//! first whitespace separated token after its name. Anything after that is ignored.

use crate::{CalcError, CalcResult, Calculator, HistorySource, Operation, SCALC_VERSION,
            parse_register_arg};
use sline::SLINE_VERSION;
use std::{fs::File,
          io::{BufWriter, Write}};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString, IntoStaticStr)]
pub enum Command {
    #[strum(serialize = ":d")]
    Drop,
    #[strum(serialize = ":dmp")]
    Dump,
    #[strum(serialize = ":dup")]
    Dup,
    #[strum(serialize = ":mclr")]
    MemoryClear,
    #[strum(serialize = ":list")]
    List,
    #[strum(serialize = ":p")]
    Print,
    #[strum(serialize = ":sav")]
    Save,
    #[strum(serialize = ":swp")]
    Swap,
    #[strum(serialize = ":ver")]
    Version,
    #[strum(serialize = ":whatis")]
    Whatis,
    #[strum(serialize = ":quit")]
    Quit,
}

impl Command {
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> { name.parse().ok() }

    #[must_use]
    pub fn name(self) -> &'static str { self.into() }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Command::Drop => "Drop the stack.",
            Command::Dump => "Dump session to file.",
            Command::Dup => "Duplicate last element in stack.",
            Command::MemoryClear => "Clear all memory registers.",
            Command::List => "List all available operations.",
            Command::Print => "Print stack.",
            Command::Save => "Save value to register.",
            Command::Swap => "Swap the two last elements in stack.",
            Command::Version => "Shows scalc version information.",
            Command::Whatis => "Show info on command or operation.",
            Command::Quit => "Exit scalc.",
        }
    }
}

/// What a successful command asks the caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Silent,
    /// Print this text, followed by a newline.
    Print(String),
    Quit,
}

/// `scalc 0.3.0 (sline 0.3.0)`.
#[must_use]
pub fn version_banner() -> String { format!("scalc {SCALC_VERSION} (sline {SLINE_VERSION})") }

impl Calculator {
    /// Runs `command` against the stack and registers. Nothing is printed here; output
    /// comes back as [`CommandOutput::Print`].
    ///
    /// # Errors
    ///
    /// Returns the reason the command failed. A failed command leaves the stack and
    /// registers unchanged.
    pub fn run_command(
        &mut self,
        command: Command,
        arg: Option<&str>,
        history: &dyn HistorySource,
    ) -> CalcResult<CommandOutput> {
        match command {
            Command::Drop => {
                let count = parse_count_arg(arg)?;
                match usize::try_from(count) {
                    Ok(count) => self.stack.drop_top(count)?,
                    // Negative drops everything.
                    Err(_) => self.stack.clear(),
                }
                Ok(CommandOutput::Silent)
            }
            Command::Dump => {
                let path = arg.ok_or(CalcError::FewArgs)?;
                let written = dump_history(path, history)?;
                tracing::debug!(message = "dumped session", path, written);
                Ok(CommandOutput::Silent)
            }
            Command::Dup => self.stack.dup().map(|()| CommandOutput::Silent),
            Command::MemoryClear => {
                self.memory.clear();
                Ok(CommandOutput::Silent)
            }
            Command::List => {
                let names: Vec<&str> = Operation::iter().map(Operation::name).collect();
                Ok(CommandOutput::Print(names.join(" ")))
            }
            Command::Print => self.print_stack(parse_count_arg(arg)?),
            Command::Save => {
                let arg = arg.ok_or(CalcError::FewArgs)?;
                let value = self.stack.peek(0)?;
                let name = parse_register_arg(arg)?;
                self.memory.set(name, value)?;
                Ok(CommandOutput::Silent)
            }
            Command::Swap => self.stack.swap().map(|()| CommandOutput::Silent),
            Command::Version => Ok(CommandOutput::Print(version_banner())),
            Command::Whatis => {
                let query = arg.ok_or(CalcError::FewArgs)?;
                let (id, description) = whatis(query).ok_or(CalcError::WhatisNotFound)?;
                Ok(CommandOutput::Print(format!("{id}: {description}")))
            }
            Command::Quit => Ok(CommandOutput::Quit),
        }
    }

    /// The top `count` elements, deepest first, one per line. A negative `count`
    /// prints the whole stack.
    fn print_stack(&self, count: i64) -> CalcResult<CommandOutput> {
        let count = usize::try_from(count).unwrap_or(self.stack.len());
        let mut lines = Vec::with_capacity(count.min(self.stack.len()));
        for index in (0..count).rev() {
            lines.push(self.format_number(self.stack.peek(index)?));
        }
        if lines.is_empty() {
            return Ok(CommandOutput::Silent);
        }
        Ok(CommandOutput::Print(lines.join("\n")))
    }
}

/// `:d` and `:p` take an optional count, which defaults to one.
fn parse_count_arg(arg: Option<&str>) -> CalcResult<i64> {
    match arg {
        None => Ok(1),
        Some(arg) => arg.parse().map_err(|_| CalcError::InvalidCommand),
    }
}

fn whatis(query: &str) -> Option<(&'static str, &'static str)> {
    if query.starts_with(':') {
        Command::lookup(query).map(|it| (it.name(), it.description()))
    } else {
        Operation::lookup(query).map(|it| (it.name(), it.description()))
    }
}

/// Writes the entered expressions, one per line, to `path`. Blank lines and commands
/// are left out, so the file can be fed back to `scalc` to replay the session.
fn dump_history(path: &str, history: &dyn HistorySource) -> CalcResult<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut written = 0;
    let entries = (0..).map_while(|index| history.history_entry(index));
    for entry in entries {
        if entry.is_empty() || entry.starts_with(':') {
            continue;
        }
        writeln!(writer, "{entry}")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}
