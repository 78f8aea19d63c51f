// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logger core and its severity methods.
//!
//! # Emitting a line
//!
//! Every severity method funnels into one sequence:
//!
//! 1. Drop the call if its level is below the isolation level.
//! 2. Read the clock and the caller's source location.
//! 3. Under the content lock: reset the buffer, write the header and the message,
//!    terminate the line, make sure today's file is bound, and write the buffer to
//!    the sink in one call.
//!
//! The caller's location comes from `#[track_caller]`, so it is known before the
//! content lock is taken and costs nothing to obtain.
//!
//! # Locks
//!
//! The content lock guards the buffer, prefix, flags and sink. The rotation lock
//! lives in the rotator and guards the target and the file swap. When both are held
//! the content lock is always taken first.

use crate::builder::LoggerBuilder;
use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::flags::Flags;
use crate::header::{CallSite, format_header};
use crate::level::Level;
use crate::rotation::{FileRotator, RotationTarget};
use crate::sink::Sink;
use std::backtrace::Backtrace;
use std::fmt::{self, Display, Write as _};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug)]
struct Content {
    buf: Vec<u8>,
    prefix: String,
    flags: Flags,
    sink: Sink,
}

/**
One independent log stream.

A `Logger` is `Send + Sync`; share it behind an `Arc` (or a `static`) and call it
from as many threads as needed. Each call writes exactly one complete line.

```rust
use daylog::{Flags, InMemorySink, Level, Logger};

let sink = InMemorySink::new();
let logger = Logger::new(sink.clone(), "SRV", Flags::DEFAULT);
logger.set_level(Level::Info);

daylog::debugf!(logger, "dropped").unwrap();
daylog::errorf!(logger, "boom {}", 7).unwrap();

let logs = sink.drain_logs();
assert!(!logs.contains("dropped"));
assert!(logs.starts_with("<SRV>"));
assert!(logs.contains("[ERROR]"));
assert!(logs.ends_with("boom 7\n"));
```
*/
#[derive(Debug)]
pub struct Logger {
    content: Mutex<Content>,
    rotator: FileRotator,
    isolation: AtomicU8,
    clock: Arc<dyn Clock>,
}

impl Default for Logger {
    /// Writes to stderr with [`Flags::DEFAULT`] and no prefix.
    fn default() -> Self {
        Self::stderr("", Flags::DEFAULT)
    }
}

impl Logger {
    /// A logger writing to `writer`.
    pub fn new<W: Write + Send + 'static>(
        writer: W,
        prefix: impl Into<String>,
        flags: Flags,
    ) -> Self {
        Self::from_parts(
            Sink::writer(writer),
            prefix.into(),
            flags,
            Level::Debug,
            None,
            Arc::new(SystemClock),
        )
    }

    /// A logger writing to the process's standard error.
    pub fn stderr(prefix: impl Into<String>, flags: Flags) -> Self {
        Self::from_parts(
            Sink::Stderr,
            prefix.into(),
            flags,
            Level::Debug,
            None,
            Arc::new(SystemClock),
        )
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_parts(
        sink: Sink,
        prefix: String,
        flags: Flags,
        level: Level,
        target: Option<RotationTarget>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            content: Mutex::new(Content {
                buf: Vec::new(),
                prefix,
                flags,
                sink,
            }),
            rotator: FileRotator::new(target),
            isolation: AtomicU8::new(level as u8),
            clock,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Content> {
        // a panic while holding the lock leaves at worst a half-built buffer,
        // which the next call resets
        self.content.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ===== configuration =====

    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    /// Replaces the header fields.
    pub fn set_flags(&self, flags: Flags) {
        self.lock().flags = flags;
    }

    /// Adds header fields to the current set.
    pub fn add_flags(&self, flags: Flags) {
        self.lock().flags |= flags;
    }

    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    /// Replaces the prefix; an empty prefix omits the `<...>` field.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.lock().prefix = prefix.into();
    }

    /// The isolation level: lines below it are dropped.
    pub fn level(&self) -> Level {
        Level::from_u8(self.isolation.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.isolation.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a line at `level` would be written.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        !level.is_isolated_by(self.level())
    }

    /**
    Sends lines to `{dir}/{base_name}.{YYYYMMDD}`, switching files at local midnight.

    The file is opened by the next emitted line, not by this call.
    */
    pub fn set_log_file(&self, dir: impl Into<PathBuf>, base_name: impl Into<String>) {
        self.rotator
            .set_target(Some(RotationTarget::new(dir, base_name)));
    }

    pub fn log_file(&self) -> Option<RotationTarget> {
        self.rotator.target()
    }

    /// Number of log files opened by rotation so far.
    #[doc(hidden)]
    pub fn files_opened(&self) -> u64 {
        self.rotator.opens()
    }

    /**
    Releases the bound log file and forgets the rotation target.

    Subsequent lines go to standard error. A logger that is simply dropped closes
    its file as well.
    */
    pub fn close(&self) {
        let mut content = self.lock();
        self.rotator.close(&mut content.sink);
    }

    pub fn flush(&self) -> Result<()> {
        self.lock().sink.flush().map_err(Error::Write)
    }

    // ===== core =====

    /**
    Writes one line at `level`, bypassing the isolation level.

    The level gate belongs to the severity methods (`infof`, `error`, ...), which
    return early for isolated levels and call through to here otherwise. `emit`
    itself always writes.

    A missing trailing newline is added. The error from a failed write, or
    otherwise from a failed rotation, is returned; a failed rotation still writes
    the line to the previous sink.
    */
    #[track_caller]
    pub fn emit(&self, level: Level, message: &str) -> Result<()> {
        self.output(level, message, CallSite::caller())
    }

    fn output(&self, level: Level, message: &str, site: CallSite) -> Result<()> {
        let now = self.clock.now();

        let mut guard = self.lock();
        let Content {
            buf,
            prefix,
            flags,
            sink,
        } = &mut *guard;

        buf.clear();
        format_header(buf, prefix, *flags, now, site, level);
        buf.extend_from_slice(message.as_bytes());
        if !message.ends_with('\n') {
            buf.push(b'\n');
        }

        let rotated = self.rotator.ensure_current(sink, now.date());
        sink.write_line(buf.as_slice()).map_err(Error::Write)?;
        rotated
    }

    #[track_caller]
    fn logf(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        if level.is_isolated_by(self.level()) {
            return Ok(());
        }
        let site = CallSite::caller();
        match args.as_str() {
            Some(literal) => self.output(level, literal, site),
            None => self.output(level, &args.to_string(), site),
        }
    }

    #[track_caller]
    fn logv(&self, level: Level, values: &[&dyn Display]) -> Result<()> {
        if level.is_isolated_by(self.level()) {
            return Ok(());
        }
        self.output(level, &join_values(values), CallSite::caller())
    }

    // ===== severities =====

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.logf(Level::Debug, args)
    }

    /// Logs `values` separated by single spaces.
    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) -> Result<()> {
        self.logv(Level::Debug, values)
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.logf(Level::Info, args)
    }

    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) -> Result<()> {
        self.logv(Level::Info, values)
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.logf(Level::Warn, args)
    }

    #[track_caller]
    pub fn warn(&self, values: &[&dyn Display]) -> Result<()> {
        self.logv(Level::Warn, values)
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.logf(Level::Error, args)
    }

    #[track_caller]
    pub fn error(&self, values: &[&dyn Display]) -> Result<()> {
        self.logv(Level::Error, values)
    }

    /**
    Logs at [`Level::Panic`], then panics with the message as a `String` payload.

    Returns normally only when the isolation level suppresses `Panic`.
    */
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) {
        if Level::Panic.is_isolated_by(self.level()) {
            return;
        }
        self.escalate_panic(args.to_string(), CallSite::caller());
    }

    #[track_caller]
    pub fn panic(&self, values: &[&dyn Display]) {
        if Level::Panic.is_isolated_by(self.level()) {
            return;
        }
        self.escalate_panic(join_values(values), CallSite::caller());
    }

    #[track_caller]
    fn escalate_panic(&self, message: String, site: CallSite) -> ! {
        let _ = self.output(Level::Panic, &message, site);
        std::panic::panic_any(message)
    }

    /// Logs at [`Level::Fatal`], then exits the process with status 1.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.escalate_fatal(&args.to_string(), CallSite::caller())
    }

    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> ! {
        self.escalate_fatal(&join_values(values), CallSite::caller())
    }

    fn escalate_fatal(&self, message: &str, site: CallSite) -> ! {
        // Fatal is the highest level, so the isolation level never suppresses it
        let _ = self.output(Level::Fatal, message, site);
        let _ = self.lock().sink.flush();
        std::process::exit(1)
    }

    /**
    Logs the message at [`Level::Error`] followed by the calling thread's backtrace
    and a blank line, regardless of the isolation level.
    */
    #[track_caller]
    pub fn stack(&self, args: fmt::Arguments<'_>) -> Result<()> {
        let site = CallSite::caller();
        let mut message = args.to_string();
        message.push('\n');
        let thread = std::thread::current();
        let _ = writeln!(message, "thread '{}':", thread.name().unwrap_or("<unnamed>"));
        let _ = write!(message, "{}", Backtrace::force_capture());
        let trimmed = message.trim_end_matches('\n').len();
        message.truncate(trimmed);
        message.push_str("\n\n");
        self.output(Level::Error, &message, site)
    }
}

/// `values` separated by single spaces and terminated by a newline.
pub(crate) fn join_values(values: &[&dyn Display]) -> String {
    let mut joined = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        let _ = write!(joined, "{}", value);
    }
    joined.push('\n');
    joined
}

/*
Boilerplate notes.

Clone: no. A logger owns its buffer and file; share it with Arc instead.
PartialEq/Eq/Hash: identity would be the only sensible meaning; not implemented.
Default: stderr with the default header, the same as the process default logger.
Send/Sync: automatic, and required.
*/
