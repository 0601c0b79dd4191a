//! Structured telemetry initialisation for the editing surface.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::sync::Mutex;

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::MakeWriter;

use quill_config::{LogFormat, LogSettings};

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Handle returned when telemetry has been initialised.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the configured log filter expression.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
    /// Failed to open the configured log file.
    #[error("failed to open log file '{path}': {source}")]
    LogFile {
        /// Path of the file that could not be opened.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Configures the global tracing subscriber when invoked for the first time.
///
/// Repeated calls are idempotent: the first invocation installs the global
/// subscriber; later ones return a fresh [`TelemetryHandle`] without
/// touching global state again.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter expression is invalid, the
/// configured log file cannot be opened, or a subscriber is already
/// installed by other means.
pub fn initialise(settings: &LogSettings) -> Result<TelemetryHandle, TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(settings))
        .map(|_| TelemetryHandle)
}

fn install_subscriber(settings: &LogSettings) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&settings.filter)
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let subscriber = match &settings.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path.as_std_path())
                .map_err(|source| TelemetryError::LogFile {
                    path: path.to_string(),
                    source,
                })?;
            build(filter, settings.format, Mutex::new(file), false)
        }
        None => build(
            filter,
            settings.format,
            io::stderr,
            io::stderr().is_terminal(),
        ),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}

fn build<W>(
    filter: EnvFilter,
    format: LogFormat,
    writer: W,
    ansi: bool,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(writer)
        // Avoid stray colour codes in non-TTY sinks while keeping colour on
        // interactive terminals.
        .with_ansi(ansi)
        // Add a timestamp so embedders can correlate surface activity.
        .with_timer(fmt::time::UtcTime::rfc_3339());

    match format {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    }
}
