//! src/logger.rs
//! The process-wide logger: priority filtering, the mutex-guarded dual-sink
//! write path, and the file-handle lifecycle.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};

use chrono::Local;

use crate::level::Level;
use crate::sink::Record;
use crate::timestamp::{self, DEFAULT_TIMESTAMP_FORMAT};

/// Path used by [`Logger::enable_file_output`] when no explicit path is
/// given, resolved against the process working directory.
pub const DEFAULT_LOG_PATH: &str = "log.txt";

/// State shared by every log call, guarded by the write lock.
///
/// The scratch buffers are reused across calls; both are rewritten from the
/// start of each emission, so no stale content from a previous call can reach
/// either sink.
struct Inner {
    timestamp_format: String,
    filepath: Option<PathBuf>,
    file: Option<File>,
    stamp: String,
    line: String,
}

/// The process-wide logger.
///
/// One instance exists per process, created lazily by [`Logger::global`] and
/// alive until exit. All configuration and logging goes through it, either
/// directly or via the crate-level free functions and the
/// [`trace!`](crate::trace) … [`critical!`](crate::critical) macros.
///
/// Records below the configured priority are dropped before any lock is
/// taken or any timestamp is rendered. Everything else is rendered once and
/// written, under a single lock, to stdout and to the file sink when one is
/// open — so concurrent callers never interleave partial lines.
pub struct Logger {
    priority: AtomicU8,
    inner: Mutex<Inner>,
}

impl Logger {
    /// Returns the process-wide logger, creating it on first use.
    pub fn global() -> &'static Self {
        static LOGGER: OnceLock<Logger> = OnceLock::new();
        LOGGER.get_or_init(Self::new)
    }

    fn new() -> Self {
        Self {
            priority: AtomicU8::new(Level::Info as u8),
            inner: Mutex::new(Inner {
                timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_owned(),
                filepath: None,
                file: None,
                stamp: String::new(),
                line: String::new(),
            }),
        }
    }

    /// Locks the shared state, recovering from a poisoned lock.
    ///
    /// A panic in one logging thread must not silence every other thread for
    /// the rest of the process, so poison is deliberately ignored.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Sets the minimum severity that will be emitted.
    ///
    /// Messages below `level` are dropped. The default is [`Level::Info`].
    pub fn set_priority(&self, level: Level) {
        self.priority.store(level as u8, Ordering::Relaxed);
    }

    /// Returns the current minimum emitted severity.
    pub fn priority(&self) -> Level {
        // The atomic only ever holds a discriminant stored by set_priority.
        Level::from_ordinal(self.priority.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// Sets the strftime-style timestamp format applied to every line.
    ///
    /// The format is not validated; a specifier the renderer cannot handle
    /// degrades that line's timestamp field to empty (see
    /// [`DEFAULT_TIMESTAMP_FORMAT`](crate::DEFAULT_TIMESTAMP_FORMAT)).
    pub fn set_timestamp_format(&self, format: &str) {
        let mut inner = self.lock();
        inner.timestamp_format.clear();
        inner.timestamp_format.push_str(format);
    }

    /// Returns the current timestamp format string.
    pub fn timestamp_format(&self) -> String {
        self.lock().timestamp_format.clone()
    }

    /// Enables the file sink at the default path, [`DEFAULT_LOG_PATH`].
    ///
    /// See [`enable_file_output_to`](Self::enable_file_output_to).
    pub fn enable_file_output(&self) -> bool {
        self.enable_file_output_to(DEFAULT_LOG_PATH)
    }

    /// Enables the file sink at `path`, opened in append mode and created if
    /// absent.
    ///
    /// Any handle that is already open is closed first, before the new open
    /// is attempted. Returns `true` when the open succeeds. On failure the
    /// sink stays disabled and logging continues on stdout alone, while
    /// [`file_path`](Self::file_path) still reports the attempted path.
    pub fn enable_file_output_to<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        let mut inner = self.lock();
        inner.file = None;
        inner.filepath = Some(path.to_owned());
        match open_append(path) {
            Ok(file) => {
                inner.file = Some(file);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns the configured file path, whether or not the last open
    /// succeeded, or `None` if file output was never enabled.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.lock().filepath.clone()
    }

    /// Returns `true` iff a file handle is currently open.
    pub fn is_file_output_enabled(&self) -> bool {
        self.lock().file.is_some()
    }

    /// Logs `message` at `level`.
    ///
    /// This is the function behind the six entry-point macros. Emission is
    /// fire-and-forget: sink write failures are swallowed so logging can
    /// never disturb the caller's control flow.
    pub fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        // Unsynchronized fast path; a stale priority read during a
        // concurrent set_priority is benign.
        if (level as u8) < self.priority.load(Ordering::Relaxed) {
            return;
        }

        let mut inner = self.lock();
        let now = Local::now();
        let Inner {
            timestamp_format,
            file,
            stamp,
            line,
            ..
        } = &mut *inner;

        timestamp::render_into(stamp, timestamp_format, &now);
        let record = Record {
            timestamp: stamp,
            level,
            message,
        };
        line.clear();
        record.render_to(line);

        let _ = io::stdout().write_all(line.as_bytes());
        if let Some(file) = file {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Opens `path` for appending, creating the file if it does not exist.
fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().append(true).create(true).open(path)
}
