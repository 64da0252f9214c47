use crate::args::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where diagnostics go for the current command.
pub(crate) enum LogSink {
    Stderr,
    File(PathBuf),
    /// The interactive viewer owns the terminal; with no file configured
    /// nothing may be written to it.
    Disabled,
}

/// `RUST_LOG` wins over `--log-level`.
fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

pub(crate) fn init(level: LogLevel, sink: LogSink) -> Result<()> {
    match sink {
        LogSink::Disabled => Ok(()),
        LogSink::Stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .with(build_filter(level))
                .try_init()?;
            Ok(())
        }
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(build_filter(level))
                .try_init()?;
            Ok(())
        }
    }
}
