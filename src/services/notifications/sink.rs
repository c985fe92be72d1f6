//! Output sink abstraction for notification delivery.
//!
//! The providers render their delivery line through a `MessageSink` rather
//! than calling `println!` directly, so a write failure surfaces as a real
//! `AppError::Io` and tests can capture exactly what was delivered.

use crate::error::{AppError, AppResult};
use std::io::Write;

/// Destination for rendered notification lines
pub trait MessageSink: Send + Sync {
    /// Writes one line (newline appended) and flushes.
    ///
    /// # Errors
    /// `AppError::Io` if the underlying writer fails.
    fn write_line(&self, line: &str) -> AppResult<()>;

    /// Sink name used in error context and logs
    fn name(&self) -> &'static str;
}

/// Production sink writing delivery lines to standard output
///
/// Locks stdout per line; the flush matters when stdout is a pipe.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn write_line(&self, line: &str) -> AppResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line).map_err(|source| AppError::Io {
            stream: self.name(),
            source,
        })?;
        stdout.flush().map_err(|source| AppError::Io {
            stream: self.name(),
            source,
        })
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}
