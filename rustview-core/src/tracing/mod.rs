//! Tracing integration for structured logging
//!
//! Initializes the `tracing` subscriber for the viewer. The controller
//! logs its defensive skips (no-op zoom requests, stale display events,
//! kiosk misuse) through `tracing` macros; this module wires those to
//! stderr, stdout or a file, honouring `RUST_LOG` when set.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Global flag indicating whether tracing has been initialized.
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur during tracing initialization.
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize the tracing subscriber.
    #[error("failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing has already been initialized.
    #[error("tracing has already been initialized")]
    AlreadyInitialized,

    /// Failed to create the log file.
    #[error("failed to create log file: {0}")]
    FileCreationFailed(String),
}

/// Result type for tracing operations.
pub type TracingResult<T> = Result<T, TracingError>;

/// Log level for the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Errors, warnings and info (default).
    #[default]
    Info,
    /// All of the above plus debug messages.
    Debug,
    /// Everything.
    Trace,
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

/// Output destination for logs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Write to stdout.
    Stdout,
    /// Write to stderr.
    #[default]
    Stderr,
    /// Write to a file.
    File {
        /// Path to the log file.
        path: PathBuf,
    },
}

/// Tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TracingConfig {
    /// Minimum level to record.
    pub level: TracingLevel,
    /// Where logs go.
    pub output: TracingOutput,
}

/// Returns `true` once [`init_tracing`] has succeeded or failed past the
/// guard.
pub fn is_tracing_initialized() -> bool {
    TRACING_INITIALIZED.load(Ordering::SeqCst)
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level when set. May only be called
/// once per process.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rustview_core={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match &config.output {
        TracingOutput::Stdout => registry
            .with(fmt::layer().with_writer(std::io::stdout))
            .try_init(),
        TracingOutput::Stderr => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        TracingOutput::File { path } => {
            let file = std::fs::File::create(path)
                .map_err(|err| TracingError::FileCreationFailed(err.to_string()))?;
            registry
                .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
                .try_init()
        }
    };
    result.map_err(|err| TracingError::InitializationFailed(err.to_string()))
}
