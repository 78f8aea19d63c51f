// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output destinations.
//!
//! A [`Sink`] is where a logger writes its finished lines. Each line arrives in one
//! `write_all` call so that lines from different threads never interleave.

use std::fmt::Debug;
use std::fs::File;
use std::io::Write;

#[derive(Default)]
pub enum Sink {
    /// The process's standard error stream; the default.
    #[default]
    Stderr,
    /// The day's log file, owned by the rotator.
    File(File),
    /// Any caller-provided writer.
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Sink::Writer(Box::new(writer))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Sink::File(_))
    }

    pub(crate) fn write_line(&mut self, line: &[u8]) -> std::io::Result<()> {
        match self {
            Sink::Stderr => std::io::stderr().lock().write_all(line),
            Sink::File(file) => file.write_all(line),
            Sink::Writer(writer) => writer.write_all(line),
        }
    }

    pub(crate) fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Stderr => std::io::stderr().flush(),
            Sink::File(file) => file.flush(),
            Sink::Writer(writer) => writer.flush(),
        }
    }
}

impl Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sink::Stderr => f.write_str("Sink::Stderr"),
            Sink::File(file) => f.debug_tuple("Sink::File").field(file).finish(),
            Sink::Writer(_) => f.write_str("Sink::Writer(..)"),
        }
    }
}

/*
Boilerplate notes.

Clone is not possible for files or boxed writers.
PartialEq would need to compare handles; not meaningful.
Default is stderr, matching a logger built without a destination.
*/
