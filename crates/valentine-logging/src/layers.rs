//! Layer and writer construction
//!
//! Every layer carries its own [`EnvFilter`], so console and file output can
//! run at different levels on the same registry.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::{ConsoleConfig, FileConfig, JsonlConfig, RotationStrategy};
use crate::LoggingError;

/// Type-erased layer stacked onto the registry
pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Build a filter from `RUST_LOG`, falling back to `level`
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(from_env) if !from_env.trim().is_empty() => from_env,
        _ => level.to_string(),
    };
    EnvFilter::try_new(&directive)
        .map_err(|source| LoggingError::InvalidFilter { directive, source })
}

/// Console layer: pretty text or JSONL to stdout
pub fn console_layer(
    console: &ConsoleConfig,
    jsonl: &JsonlConfig,
    filter: EnvFilter,
) -> BoxedLayer {
    if console.pretty {
        fmt::layer()
            .with_ansi(console.ansi)
            .with_target(true)
            .with_filter(filter)
            .boxed()
    } else {
        jsonl_layer(std::io::stdout, jsonl, filter)
    }
}

/// JSONL formatting layer for any writer
pub fn jsonl_layer<W>(writer: W, jsonl: &JsonlConfig, filter: EnvFilter) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    fmt::layer()
        .json()
        .with_ansi(false)
        .with_current_span(true)
        .with_span_list(jsonl.include_spans)
        .flatten_event(jsonl.flatten_events)
        .with_file(jsonl.include_location)
        .with_line_number(jsonl.include_location)
        .with_writer(writer)
        .with_filter(filter)
        .boxed()
}

/// Path of the single log file used by [`RotationStrategy::Never`]
pub fn single_file_path(config: &FileConfig) -> PathBuf {
    config.directory.join(format!("{}.log", config.prefix))
}

/// Open the session file writer
///
/// A guard comes back only when `config.non_blocking` is set; it must outlive
/// all logging.
pub fn file_writer(
    config: &FileConfig,
) -> Result<(BoxMakeWriter, Option<WorkerGuard>), LoggingError> {
    fs::create_dir_all(&config.directory).map_err(|source| LoggingError::Io {
        path: config.directory.clone(),
        source,
    })?;

    match config.rotation {
        RotationStrategy::Never => {
            // Truncate so each session starts with a fresh file
            let path = single_file_path(config);
            let file = File::create(&path).map_err(|source| LoggingError::Io { path, source })?;
            if config.non_blocking {
                let (writer, guard) = tracing_appender::non_blocking(file);
                Ok((BoxMakeWriter::new(writer), Some(guard)))
            } else {
                Ok((BoxMakeWriter::new(Mutex::new(file)), None))
            }
        }
        RotationStrategy::Daily => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(&config.prefix)
                .filename_suffix("log")
                .build(&config.directory)?;
            if config.non_blocking {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                Ok((BoxMakeWriter::new(writer), Some(guard)))
            } else {
                Ok((BoxMakeWriter::new(appender), None))
            }
        }
    }
}
