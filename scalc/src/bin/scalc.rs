// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use clap::Parser;
use scalc::{CLIArg, run_app, version_banner};
use sline::{TracingConfig, WriterConfig, try_initialize_logging_global};

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.version {
        println!("{}", version_banner());
        return Ok(());
    }

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(TracingConfig {
            level_filter: cli_arg.global_options.log_level,
            writer_config: WriterConfig::File(sline::DEFAULT_LOG_FILE_NAME.to_string()),
        })?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let result = run_app(&cli_arg);

    if enable_logging {
        tracing::debug!(message = "Stop logging...", failed = result.is_err());
    }

    result
}
