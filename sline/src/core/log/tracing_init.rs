// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use super::{TracingConfig, WriterConfig, rolling_file_appender_impl};
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Log files
/// are read with `tail -f`, so no ANSI colors.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_thread_names(true)
            .with_target(true)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers for `tracing_config`. This does not install them; see
/// [`try_initialize_logging_global`] and [`try_initialize_logging_thread_local`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    if let Some(layer) =
        try_create_file_layer(level_filter, &tracing_config.writer_config)?
    {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let WriterConfig::File(path) = writer_config else {
        return Ok(None);
    };
    let file = rolling_file_appender_impl::try_create(path)?;
    Ok(Some(Box::new(
        create_fmt!().with_writer(file).with_filter(level_filter),
    )))
}

/// Global default subscriber, which once set, can't be unset or changed. This is
/// meant for binaries.
///
/// Logging is **DISABLED** by **default**. Nothing is installed when
/// [`TracingConfig::is_disabled`], and the `tracing` macros then cost a relaxed atomic
/// load.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let tracing_config: TracingConfig = options.into();
    if tracing_config.is_disabled() {
        return Ok(());
    }

    let layers = try_create_layers(&tracing_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|err| miette::miette!("Can't install global subscriber: {err}"))
}

/// Thread local subscriber, removed when the returned guard drops. This is meant for
/// tests.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let tracing_config: TracingConfig = options.into();
    if tracing_config.is_disabled() {
        return Ok(None);
    }

    let layers = try_create_layers(&tracing_config)?;
    Ok(Some(tracing_subscriber::registry().with(layers).set_default()))
}
