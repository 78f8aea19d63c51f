// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format-style logging macros.
//!
//! Each macro takes either a logger followed by a format string, or just a format
//! string, in which case the line goes to the
//! [default logger](crate::global_logger::default_logger):
//!
//! ```rust
//! use daylog::{Flags, InMemorySink, Logger};
//!
//! let sink = InMemorySink::new();
//! let logger = Logger::new(sink.clone(), "", Flags::NONE);
//! let id = 3;
//! daylog::infof!(logger, "recv msgId={id}, len={}", 12).unwrap();
//! assert_eq!(sink.drain_logs(), "recv msgId=3, len=12\n");
//! ```
//!
//! The format string must be a literal. Formatting happens only if the line passes
//! the logger's isolation level, and the line is attributed to the macro's call site.
//!
//! `debugf!`, `infof!`, `warnf!`, `errorf!` and `stack!` evaluate to
//! [`daylog::Result<()>`](crate::Result). `panicf!` evaluates to `()` (and panics
//! unless `Panic` is isolated); `fatalf!` never returns.

#[doc(hidden)]
#[macro_export]
macro_rules! __dispatch {
    ($method:ident; $fmt:literal $($rest:tt)*) => {
        $crate::global_logger::default_logger().$method(::std::format_args!($fmt $($rest)*))
    };
    ($method:ident; $logger:expr, $fmt:literal $($rest:tt)*) => {
        ($logger).$method(::std::format_args!($fmt $($rest)*))
    };
}

/// Logs at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debugf {
    ($($tokens:tt)*) => { $crate::__dispatch!(debugf; $($tokens)*) };
}

/// Logs at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! infof {
    ($($tokens:tt)*) => { $crate::__dispatch!(infof; $($tokens)*) };
}

/// Logs at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warnf {
    ($($tokens:tt)*) => { $crate::__dispatch!(warnf; $($tokens)*) };
}

/// Logs at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! errorf {
    ($($tokens:tt)*) => { $crate::__dispatch!(errorf; $($tokens)*) };
}

/// Logs at [`Level::Panic`](crate::Level::Panic), then panics with the message.
#[macro_export]
macro_rules! panicf {
    ($($tokens:tt)*) => { $crate::__dispatch!(panicf; $($tokens)*) };
}

/// Logs at [`Level::Fatal`](crate::Level::Fatal), then exits with status 1.
#[macro_export]
macro_rules! fatalf {
    ($($tokens:tt)*) => { $crate::__dispatch!(fatalf; $($tokens)*) };
}

/// Logs the message and the current thread's backtrace at [`Level::Error`](crate::Level::Error),
/// ignoring the isolation level.
#[macro_export]
macro_rules! stack {
    ($($tokens:tt)*) => { $crate::__dispatch!(stack; $($tokens)*) };
}

#[cfg(test)]
mod tests {
    use crate::{Flags, InMemorySink, Level, Logger};
    use std::sync::Arc;

    #[test]
    fn explicit_logger() {
        let sink = InMemorySink::new();
        let logger = Logger::new(sink.clone(), "", Flags::LEVEL | Flags::TIME);
        crate::debugf!(logger, "d").unwrap();
        crate::infof!(&logger, "i {}", 1).unwrap();
        let name = "w";
        crate::warnf!(logger, "{name}").unwrap();
        crate::errorf!(logger, "e {x}", x = 2,).unwrap();
        let logs = sink.drain_logs();
        assert!(logs.contains("[DEBUG]d\n"));
        assert!(logs.contains("[INFO]i 1\n"));
        assert!(logs.contains("[WARN]w\n"));
        assert!(logs.contains("[ERROR]e 2\n"));
    }

    #[test]
    fn arc_logger_and_caller_line() {
        let sink = InMemorySink::new();
        let logger = Arc::new(Logger::new(sink.clone(), "", Flags::TIME | Flags::SHORT_FILE));
        let line = line!() + 1;
        crate::infof!(logger, "here").unwrap();
        assert!(sink.contents().ends_with(&format!(" macros.rs:{line}: here\n")));
    }

    #[test]
    fn panicf_macro() {
        let sink = InMemorySink::new();
        let logger = Logger::new(sink.clone(), "", Flags::NONE);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            crate::panicf!(logger, "oops {}", 9);
        }));
        assert!(result.is_err());
        assert_eq!(sink.contents(), "oops 9\n");

        logger.set_level(Level::Fatal);
        crate::panicf!(logger, "quiet");
    }

    #[test]
    fn stack_macro() {
        let sink = InMemorySink::new();
        let logger = Logger::new(sink.clone(), "", Flags::NONE);
        crate::stack!(logger, "where am i").unwrap();
        assert!(sink.contents().starts_with("where am i\n"));
    }
}
