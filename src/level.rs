// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Display;
use std::str::FromStr;

/**
Severity of a log line.

Levels are ordered; a logger drops every line whose level is below its isolation level.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Print-style debugging
    #[default]
    Debug = 0,
    /// Normal operation
    Info = 1,
    /// Suspicious condition
    Warn = 2,
    /// Runtime error
    Error = 3,
    /// Programmer error; the call panics after logging
    Panic = 4,
    /// Unrecoverable; the process exits after logging
    Fatal = 5,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Panic,
        Level::Fatal,
    ];

    /// The bracketed tag written into the header, e.g. `[ERROR]`.
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG]",
            Level::Info => "[INFO]",
            Level::Warn => "[WARN]",
            Level::Error => "[ERROR]",
            Level::Panic => "[PANIC]",
            Level::Fatal => "[FATAL]",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            3 => Level::Error,
            4 => Level::Panic,
            _ => Level::Fatal,
        }
    }

    /**
    Whether a line at `self` is suppressed by the isolation level `floor`.

    A line is dropped iff the floor is strictly above it.
    */
    #[inline]
    pub const fn is_isolated_by(self, floor: Level) -> bool {
        (floor as u8) > (self as u8)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
        Level::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| crate::Error::ParseLevel(s.to_string()))
    }
}

/*
Boilerplate notes.

Copy/Ord/Hash derive naturally for a fieldless enum.
Default is Debug, which is the isolation level that lets everything through.
From<u8> is not public; out-of-range integers have no meaningful level.
*/
