// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A writer that keeps every byte it receives, for tests and for programmatic
//! inspection of a logger's output. Clones share the same buffer, so one clone
//! can be handed to a [`Logger`](crate::Logger) while the other reads back what
//! was written.
//!
//! ```rust
//! use daylog::{Flags, InMemorySink, Logger};
//!
//! let sink = InMemorySink::new();
//! let logger = Logger::new(sink.clone(), "", Flags::LEVEL | Flags::TIME);
//! daylog::infof!(logger, "hello {}", 42).unwrap();
//!
//! let logs = sink.drain_logs();
//! assert!(logs.contains("[INFO]hello 42"));
//! assert!(sink.drain_logs().is_empty());
//! ```

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Everything written so far, leaving the buffer intact.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Everything written so far, clearing the buffer.
    pub fn drain_logs(&self) -> String {
        let mut bytes = self.lock();
        let result = String::from_utf8_lossy(&bytes).into_owned();
        bytes.clear();
        result
    }

    /// Number of complete lines written so far.
    pub fn line_count(&self) -> usize {
        self.lock().iter().filter(|b| **b == b'\n').count()
    }
}

impl Write for InMemorySink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_buffer() {
        let sink = InMemorySink::new();
        let mut writer = sink.clone();
        writer.write_all(b"one\ntwo\n").unwrap();
        assert_eq!(sink.line_count(), 2);
        assert_eq!(sink.contents(), "one\ntwo\n");
        assert_eq!(sink.drain_logs(), "one\ntwo\n");
        assert_eq!(sink.contents(), "");
    }
}
