#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `yellog` is a minimal process-wide logging facility: one global logger
//! that accepts leveled, formatted messages and writes them, synchronously
//! and thread-safely, to standard output and optionally to an append-only
//! log file, each line stamped with a configurable strftime-style timestamp.
//!
//! # Design
//!
//! The crate is a single leaf component. [`Logger::global`] hands out the
//! lazily-created singleton; the [`trace!`] … [`critical!`] macros and the
//! crate-level free functions are thin sugar over it. A record below the
//! configured priority is dropped before any lock is taken or timestamp
//! rendered. Everything else is rendered exactly once into a reused scratch
//! buffer and the identical bytes are written to both sinks under a single
//! mutex, so concurrent callers never interleave partial lines.
//!
//! [`RecordSink`] exposes the same line rendering over any
//! [`io::Write`](std::io::Write) implementor for callers that want to stream
//! records somewhere other than the global sinks.
//!
//! # Invariants
//!
//! - At most one log file handle is open at a time; enabling file output
//!   always closes the previous handle before attempting the new open.
//! - Filtering is monotonic over the six-level scale: a record at level `L`
//!   is emitted iff `L >= priority`.
//! - Scratch buffers are reused across calls but rewritten from the start of
//!   each emission, so no stale content reaches a sink.
//!
//! # Errors
//!
//! Opening the file sink reports failure once, as `false` from the enable
//! call; the logger then keeps operating on stdout alone. Write failures on
//! either sink are swallowed — logging never disturbs the caller's control
//! flow, never panics, and never terminates the process.
//!
//! # Examples
//!
//! Leveled logging to stdout:
//!
//! ```
//! yellog::set_priority(yellog::Level::Debug);
//! yellog::debug!("cache warmed in {} ms", 12);
//! yellog::info!("listening on {}:{}", "127.0.0.1", 4222);
//! ```
//!
//! Mirroring every line into an append-only file:
//!
//! ```no_run
//! if !yellog::enable_file_output_to("server.log") {
//!     yellog::warn!("file sink unavailable, continuing on stdout");
//! }
//! yellog::error!("connection lost: {}", "timed out");
//! ```

mod level;
mod logger;
mod macros;
mod sink;
mod timestamp;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use level::{Level, ParseLevelError};
pub use logger::{Logger, DEFAULT_LOG_PATH};
pub use sink::{Record, RecordSink};
pub use timestamp::DEFAULT_TIMESTAMP_FORMAT;

#[cfg(feature = "tracing")]
pub use tracing_bridge::{init_tracing, GlobalLoggerLayer};

use std::fmt;
use std::path::{Path, PathBuf};

/// Logs `message` at `level` through the global logger.
///
/// The [`trace!`] … [`critical!`] macros expand to this function; it is
/// public for callers that carry a [`Level`] value at runtime.
pub fn log(level: Level, message: fmt::Arguments<'_>) {
    Logger::global().log(level, message);
}

/// Sets the minimum severity emitted by the global logger.
///
/// The default is [`Level::Info`].
pub fn set_priority(level: Level) {
    Logger::global().set_priority(level);
}

/// Returns the global logger's current minimum emitted severity.
pub fn priority() -> Level {
    Logger::global().priority()
}

/// Sets the strftime-style timestamp format applied to every line.
///
/// The format is not validated; see [`DEFAULT_TIMESTAMP_FORMAT`].
pub fn set_timestamp_format(format: &str) {
    Logger::global().set_timestamp_format(format);
}

/// Returns the global logger's current timestamp format string.
pub fn timestamp_format() -> String {
    Logger::global().timestamp_format()
}

/// Enables the global file sink at [`DEFAULT_LOG_PATH`].
///
/// Returns `true` when the file was opened; on failure the sink stays
/// disabled and logging continues on stdout alone.
pub fn enable_file_output() -> bool {
    Logger::global().enable_file_output()
}

/// Enables the global file sink at `path` (append mode, created if absent).
///
/// Any previously open handle is closed first. Returns `true` when the open
/// succeeds.
pub fn enable_file_output_to<P: AsRef<Path>>(path: P) -> bool {
    Logger::global().enable_file_output_to(path)
}

/// Returns the configured log file path, or `None` if file output was never
/// enabled. The path is reported even when the last open attempt failed.
pub fn file_path() -> Option<PathBuf> {
    Logger::global().file_path()
}

/// Returns `true` iff the global logger currently holds an open file handle.
pub fn is_file_output_enabled() -> bool {
    Logger::global().is_file_output_enabled()
}
