// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # [`try_initialize_logging_global`]
//!
//! Convenience method to set up a [`tracing_subscriber`] registry for the
//! `oklch-convert` binary. Use [`TracingConfig`] to pick where the output goes
//! ([`WriterConfig`]) and the [`LevelFilter`]. Logging is off by default, since the
//! binary writes the rewritten text to `stdout` and must not interleave log lines
//! with it.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WriterConfig {
    #[default]
    None,
    Stderr,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::None,
        }
    }
}

/// Initialize the global default subscriber. Once set it can't be changed, so this is
/// only meant to be called once from `main`. Does nothing for [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created or a global subscriber has
/// already been set.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    match try_create_layer(tracing_config)? {
        Some(layer) => tracing_subscriber::registry()
            .with(layer)
            .try_init()
            .into_diagnostic(),
        None => Ok(()),
    }
}

/// Thread local version of [`try_initialize_logging_global`], great for tests. Drop the
/// returned guard to restore the previous subscriber for this thread.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    Ok(try_create_layer(tracing_config)?
        .map(|layer| tracing_subscriber::registry().with(layer).set_default()))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file path has no file name.
pub fn try_create_layer(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let TracingConfig {
        level_filter,
        writer_config,
    } = tracing_config;

    let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> = match writer_config {
        WriterConfig::None => None,
        WriterConfig::Stderr => Some(Box::new(
            create_fmt!()
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )),
        WriterConfig::File(path) => {
            let Some(file_name) = path.file_name() else {
                miette::bail!("Log file path has no file name: {}", path.display());
            };
            let folder = match path.parent() {
                Some(it) if !it.as_os_str().is_empty() => it.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let file_appender = tracing_appender::rolling::never(folder, file_name);
            Some(Box::new(
                create_fmt!()
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .with_filter(level_filter),
            ))
        }
    };

    Ok(layer)
}
