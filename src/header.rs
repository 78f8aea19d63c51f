// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line header rendering.
//!
//! A header is written into the logger's reusable buffer ahead of every message:
//!
//! ```text
//! <SRV>2019/04/11 11:15:33.123123 [ERROR]server.rs:42: message
//! ```
//!
//! Each piece is controlled by a [`Flags`] bit. The level and file fields are only
//! written when at least one of the time-related fields (date, time, microseconds) is
//! enabled; with no time field the header is just the prefix.

use crate::Level;
use crate::flags::Flags;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::panic::Location;

/// Source location a line is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const UNKNOWN: CallSite = CallSite {
        file: "unknown-file",
        line: 0,
    };

    /// The first caller outside the `#[track_caller]` chain.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&Location<'static>> for CallSite {
    fn from(location: &Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

const TIME_FIELDS: Flags = Flags::DATE.union(Flags::TIME).union(Flags::MICROSECONDS);

/**
Appends the header for one line to `buf`.

Rendering is a pure function of its inputs; identical arguments always produce
identical bytes.
*/
pub fn format_header(
    buf: &mut Vec<u8>,
    prefix: &str,
    flags: Flags,
    now: NaiveDateTime,
    site: CallSite,
    level: Level,
) {
    if !prefix.is_empty() {
        buf.push(b'<');
        buf.extend_from_slice(prefix.as_bytes());
        buf.push(b'>');
    }

    if !flags.intersects(TIME_FIELDS) {
        return;
    }

    if flags.contains(Flags::DATE) {
        write_padded(buf, now.year().max(0) as u32, 4);
        buf.push(b'/');
        write_padded(buf, now.month(), 2);
        buf.push(b'/');
        write_padded(buf, now.day(), 2);
        buf.push(b' ');
    }

    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        write_padded(buf, now.hour(), 2);
        buf.push(b':');
        write_padded(buf, now.minute(), 2);
        buf.push(b':');
        write_padded(buf, now.second(), 2);
        if flags.contains(Flags::MICROSECONDS) {
            buf.push(b'.');
            // leap seconds report nanoseconds past 1e9
            write_padded(buf, (now.nanosecond() % 1_000_000_000) / 1_000, 6);
        }
        buf.push(b' ');
    }

    if flags.contains(Flags::LEVEL) {
        buf.extend_from_slice(level.tag().as_bytes());
    }

    if flags.wants_location() {
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(site.file)
        } else {
            site.file
        };
        buf.extend_from_slice(file.as_bytes());
        buf.push(b':');
        write_padded(buf, site.line, 0);
        buf.extend_from_slice(b": ");
    }
}

/// The part of `path` after its final `/` or `\\`, or `path` itself when there is none.
pub fn short_file(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(i) if i > 0 => &path[i + 1..],
        _ => path,
    }
}

/**
Appends `value` as decimal, left-padded with zeros to at least `width` digits.

A width of 0 or 1 means no padding; zero still renders as a single `0`.
*/
pub fn write_padded(buf: &mut Vec<u8>, value: u32, width: usize) {
    if value == 0 && width <= 1 {
        buf.push(b'0');
        return;
    }

    // u32::MAX has 10 digits; wider requests are clamped
    let mut digits = [b'0'; 16];
    let width = width.min(digits.len());
    let mut pos = digits.len();
    let mut rest = value;
    while rest > 0 {
        pos -= 1;
        digits[pos] = b'0' + (rest % 10) as u8;
        rest /= 10;
    }
    let start = pos.min(digits.len() - width);
    buf.extend_from_slice(&digits[start..]);
}
