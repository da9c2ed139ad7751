// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Default file for [`WriterConfig::File`]. Relative to the current working directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where log lines go.
///
/// While a line is being edited the terminal is in raw mode and stdout belongs to the
/// editor, so logs always go to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String /* path */),
}

/// Everything needed to install a subscriber. Build one from a level, a level filter,
/// or a [`WriterConfig`] with `into()`:
///
/// ```
/// use sline::{TracingConfig, WriterConfig};
///
/// let config: TracingConfig = tracing_core::LevelFilter::DEBUG.into();
/// assert_eq!(config.writer_config, WriterConfig::File("log.txt".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    /// Logging is off if either the level is `OFF` or there is nowhere to write to.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.level_filter == LevelFilter::OFF
            || matches!(self.writer_config, WriterConfig::None)
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}
