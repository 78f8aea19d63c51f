// SPDX-License-Identifier: MIT OR Apache-2.0

//! Header field selection.
//!
//! [`Flags`] is a small bit set naming which fields the header formatter writes
//! before each message. Individual fields combine with `|`, and membership is
//! tested with [`Flags::contains`] or [`Flags::intersects`].
//!
//! ```rust
//! use daylog::Flags;
//!
//! let flags = Flags::DATE | Flags::TIME | Flags::LEVEL;
//! assert!(flags.contains(Flags::STD));
//! assert!(!flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE));
//! ```

use std::fmt::{Debug, Display};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    /// No header fields.
    pub const NONE: Flags = Flags(0);
    /// `2019/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// `01:23:12`
    pub const TIME: Flags = Flags(1 << 1);
    /// `01:23:12.111222`; implies the time field.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full path of the calling source file.
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path component of the calling source file.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// `[DEBUG]`, `[INFO]`, ...
    pub const LEVEL: Flags = Flags(1 << 5);
    /// Date and time.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);
    /// Level, short file name, date and time.
    pub const DEFAULT: Flags = Flags(Self::LEVEL.0 | Self::SHORT_FILE.0 | Self::STD.0);

    const NAMED: [(&'static str, Flags); 8] = [
        ("date", Flags::DATE),
        ("time", Flags::TIME),
        ("microseconds", Flags::MICROSECONDS),
        ("longfile", Flags::LONG_FILE),
        ("shortfile", Flags::SHORT_FILE),
        ("level", Flags::LEVEL),
        ("std", Flags::STD),
        ("default", Flags::DEFAULT),
    ];

    pub const fn empty() -> Self {
        Flags::NONE
    }

    /// Whether every bit of `other` is set.
    #[inline]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any bit of `other` is set.
    #[inline]
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }

    /// Any of the fields that need the caller's source location.
    #[inline]
    pub const fn wants_location(self) -> bool {
        self.intersects(Flags(Self::SHORT_FILE.0 | Self::LONG_FILE.0))
    }
}

impl BitOr for Flags {
    type Output = Flags;
    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;
    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl BitAndAssign for Flags {
    fn bitand_assign(&mut self, rhs: Flags) {
        self.0 &= rhs.0;
    }
}

impl Debug for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Flags({})", self)
    }
}

impl Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        // only the single-bit names; presets would print twice
        for (name, flag) in &Self::NAMED[..6] {
            if self.contains(*flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = crate::Error;

    /// Parses `|`-separated field names, e.g. `"date|time|level"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::NONE;
        for part in s.split('|').map(str::trim) {
            if part.is_empty() || part.eq_ignore_ascii_case("none") {
                continue;
            }
            let normalized = part.replace(['_', '-'], "");
            let (_, flag) = Self::NAMED
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(&normalized))
                .ok_or_else(|| crate::Error::ParseFlags(part.to_string()))?;
            flags |= *flag;
        }
        Ok(flags)
    }
}
