//! src/sink.rs
//! Record rendering and the reusable writer-backed sink.
//!
//! The global logger and [`RecordSink`] share one rendering routine,
//! [`Record::render_to`], so every sink emits byte-identical lines for the
//! same record.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use crate::level::Level;

/// Spaces between the timestamp and the level tag.
const TIMESTAMP_SEPARATOR: &str = "    ";

/// Spaces between the level tag and the message body.
const TAG_SEPARATOR: &str = "     ";

/// One loggable record: a rendered timestamp, a severity, and the caller's
/// formatted message.
///
/// Records borrow their parts so building one costs nothing beyond the
/// timestamp rendering the caller already performed.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    /// Timestamp text, already rendered with the configured format.
    pub timestamp: &'a str,
    /// Severity of the message.
    pub level: Level,
    /// The message body, captured via [`format_args!`].
    pub message: fmt::Arguments<'a>,
}

impl Record<'_> {
    /// Appends the full line for this record to `buf`:
    /// timestamp, separator, level tag, separator, message, newline.
    ///
    /// Writing into a `String` cannot fail at the I/O layer; if a `Display`
    /// implementation inside the message returns an error the body is
    /// truncated at that point and the line is still terminated. Argument
    /// correctness is the caller's concern, as with any `format_args!` use.
    pub fn render_to(&self, buf: &mut String) {
        buf.push_str(self.timestamp);
        buf.push_str(TIMESTAMP_SEPARATOR);
        buf.push_str(self.level.tag());
        buf.push_str(TAG_SEPARATOR);
        let _ = buf.write_fmt(self.message);
        buf.push('\n');
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("timestamp", &self.timestamp)
            .field("level", &self.level)
            .field("message", &self.message)
            .finish()
    }
}

/// Streaming sink that renders [`Record`] values into an [`io::Write`]
/// target.
///
/// The sink owns the underlying writer together with a reusable scratch
/// buffer. Each call to [`write`](Self::write) renders the record once into
/// the scratch and streams the bytes to the writer, so repeated writes avoid
/// allocating fresh line storage.
///
/// # Examples
///
/// Collect records into a `Vec<u8>`:
///
/// ```
/// use yellog::{Level, Record, RecordSink};
///
/// let mut sink = RecordSink::new(Vec::new());
/// sink.write(&Record {
///     timestamp: "12:00:00  01-01-2024",
///     level: Level::Info,
///     message: format_args!("ready"),
/// })?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.ends_with("ready\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RecordSink<W> {
    writer: W,
    scratch: String,
}

impl<W> RecordSink<W> {
    /// Creates a sink over `writer` with an empty scratch buffer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: String::new(),
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for RecordSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> RecordSink<W>
where
    W: Write,
{
    /// Renders `record` and writes the resulting line to the underlying
    /// writer.
    pub fn write(&mut self, record: &Record<'_>) -> io::Result<()> {
        self.scratch.clear();
        record.render_to(&mut self.scratch);
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
