// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for daylog.
//!
//! Only recoverable failures live here. Escalating severities (`panic`/`fatal`)
//! never come back through this type; they diverge instead.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sink rejected the formatted line.
    #[error("failed to write log line: {0}")]
    Write(#[source] std::io::Error),

    /// The rotation directory could not be created.
    #[error("failed to create log directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The day's log file could not be opened.
    #[error("failed to open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown log level {0:?}")]
    ParseLevel(String),

    #[error("unknown header flag {0:?}")]
    ParseFlags(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the failure happened while swapping the day's file rather than writing.
    pub fn is_rotation(&self) -> bool {
        matches!(self, Error::CreateDir { .. } | Error::OpenFile { .. })
    }
}
