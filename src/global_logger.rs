// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger.
//!
//! Most programs want one logger shared by every module. This module holds it:
//! [`default_logger`] hands out the current instance and [`set_default_logger`]
//! replaces it. The format macros (`infof!("...")` and friends) write to it when
//! no logger is named.
//!
//! # Initialization
//!
//! The default logger writes to stderr with [`Flags::DEFAULT`](crate::Flags::DEFAULT)
//! and no prefix. It is created the first time it is needed; creation is
//! thread-safe and has no dependency on any other static, so there is no ordering
//! to get wrong. Programs that want a different configuration call
//! [`set_default_logger`] once at startup, before spawning threads that log.
//!
//! ```
//! use daylog::global_logger::{default_logger, set_default_logger};
//! use daylog::{Flags, InMemorySink, Logger};
//! use std::sync::Arc;
//!
//! let sink = InMemorySink::new();
//! let previous = set_default_logger(Arc::new(Logger::new(sink.clone(), "APP", Flags::NONE)));
//!
//! daylog::infof!("started").unwrap();
//! assert_eq!(sink.drain_logs(), "<APP>started\n");
//!
//! set_default_logger(previous);
//! ```
//!
//! # Lifecycle
//!
//! Loggers are reference-counted. Replacing the default does not close the old
//! instance while another thread is still writing through it; it is dropped, and
//! its file closed, when the last `Arc` goes away.

use crate::logger::Logger;
use std::sync::{Arc, OnceLock, RwLock};

static DEFAULT_LOGGER: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Logger>> {
    DEFAULT_LOGGER.get_or_init(|| RwLock::new(Arc::new(Logger::default())))
}

/// The current default logger.
///
/// The read lock is held only long enough to clone the `Arc`.
pub fn default_logger() -> Arc<Logger> {
    slot().read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Replaces the default logger, returning the previous one.
pub fn set_default_logger(logger: Arc<Logger>) -> Arc<Logger> {
    let mut current = slot().write().unwrap_or_else(|e| e.into_inner());
    std::mem::replace(&mut *current, logger)
}

#[cfg(test)]
pub(crate) static TEST_LOGGER_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());
