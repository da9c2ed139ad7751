// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::DEFAULT_PRECISION;
use clap::{Args, Parser};
use tracing_core::LevelFilter;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "scalc")]
#[command(about = "Stack based (RPN) desk calculator")]
#[command(disable_version_flag = true)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\n\nEvaluate expressions typed at the prompt, or read them from a file.\nUSAGE:\n  scalc [\x1b[32mfile\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "file")]
    pub file: Option<String>,

    #[arg(
        long,
        short = 'i',
        help = "Switch to the interactive prompt once the file is exhausted."
    )]
    pub interactive: bool,

    #[arg(long, short = 'v', help = "Print version information and exit.")]
    pub version: bool,

    #[arg(
        long,
        short = 'p',
        default_value_t = DEFAULT_PRECISION,
        help = "Number of decimals printed for results."
    )]
    pub precision: usize,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value_t = LevelFilter::DEBUG,
        help = "Most verbose level written to the log file, when logging is enabled."
    )]
    pub log_level: LevelFilter,
}
