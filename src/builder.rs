// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.
//!
//! ```rust
//! use daylog::{Flags, Level, Logger};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::builder()
//!     .prefix("SRV")
//!     .flags(Flags::DEFAULT | Flags::MICROSECONDS)
//!     .level(Level::Info)
//!     .log_file(dir.path(), "server.log")
//!     .build();
//!
//! daylog::infof!(logger, "listening on {}", 8999).unwrap();
//! assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
//! ```

use crate::clock::{Clock, SystemClock};
use crate::flags::Flags;
use crate::level::Level;
use crate::logger::Logger;
use crate::rotation::RotationTarget;
use crate::sink::Sink;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug)]
pub struct LoggerBuilder {
    sink: Sink,
    prefix: String,
    flags: Flags,
    level: Level,
    target: Option<RotationTarget>,
    clock: Arc<dyn Clock>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Stderr, [`Flags::DEFAULT`], no prefix, every level enabled, no log file.
    pub fn new() -> Self {
        Self {
            sink: Sink::Stderr,
            prefix: String::new(),
            flags: Flags::DEFAULT,
            level: Level::Debug,
            target: None,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// The isolation level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Write to `writer` until a log file is bound.
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.sink = Sink::writer(writer);
        self
    }

    pub fn stderr(mut self) -> Self {
        self.sink = Sink::Stderr;
        self
    }

    /// Rotate daily through `{dir}/{base_name}.{YYYYMMDD}`.
    pub fn log_file(mut self, dir: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        self.target = Some(RotationTarget::new(dir, base_name));
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> Logger {
        Logger::from_parts(
            self.sink,
            self.prefix,
            self.flags,
            self.level,
            self.target,
            self.clock,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_sink::InMemorySink;

    #[test]
    fn defaults() {
        let logger = LoggerBuilder::new().build();
        assert_eq!(logger.flags(), Flags::DEFAULT);
        assert_eq!(logger.prefix(), "");
        assert_eq!(logger.level(), Level::Debug);
        assert!(logger.log_file().is_none());
    }

    #[test]
    fn configured() {
        let sink = InMemorySink::new();
        let logger = Logger::builder()
            .writer(sink.clone())
            .prefix("A")
            .flags(Flags::NONE)
            .level(Level::Warn)
            .build();
        logger.infof(format_args!("no")).unwrap();
        logger.warnf(format_args!("yes")).unwrap();
        assert_eq!(sink.contents(), "<A>yes\n");
    }
}
