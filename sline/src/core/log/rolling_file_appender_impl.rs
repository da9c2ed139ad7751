// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// A file appender that never rolls over: every run appends to the same file.
///
/// Note that if you wrap this up in a non blocking writer, the worker guard must be
/// kept alive for the whole program, otherwise buffered lines are lost on exit.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
/// - The file can't be created or opened for appending
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = match path.parent() {
        // "log.txt" has the empty path as its parent.
        Some(it) if it.as_os_str().is_empty() => PathBuf::from("."),
        Some(it) => it.to_path_buf(),
        None => {
            return Err(miette::miette!(
                "Can't access parent folder of {}. It might not exist, or don't have required permissions.",
                path.display()
            ));
        }
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(&parent)
        .map_err(|err| miette::miette!("Can't create log file {}: {err}", path.display()))
}
