// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily log-file rotation.
//!
//! When a logger has a [`RotationTarget`], every line is written to
//! `{dir}/{base}.{YYYYMMDD}` for the local date at which it was emitted. The first
//! line of each day opens that day's file and closes the previous one.
//!
//! # Locking
//!
//! The common case, a file already bound for today, is answered from two atomics
//! without taking any lock. Otherwise the rotation lock is taken and the check is
//! repeated, so threads that raced past the fast path together open the file once.
//!
//! # Failures
//!
//! If the directory cannot be created or the file cannot be opened, the current
//! sink stays in place and the error is returned. The next emit tries again.

use crate::error::{Error, Result};
use crate::sink::Sink;
use chrono::{Datelike, NaiveDate};
use std::fs::{DirBuilder, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

pub(crate) const FILE_MODE: u32 = 0o644;
pub(crate) const DIR_MODE: u32 = 0o775;

/// Directory and base name of a rotating log file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RotationTarget {
    dir: PathBuf,
    base_name: String,
}

impl RotationTarget {
    pub fn new(dir: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The file lines emitted on `day` go to.
    pub fn path_for(&self, day: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.base_name, day.format("%Y%m%d")))
    }

    fn ensure_dir(&self) -> Result<()> {
        if self.dir.as_os_str().is_empty() {
            return Ok(());
        }
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder.create(&self.dir).map_err(|source| Error::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }

    fn open(&self, day: NaiveDate) -> Result<File> {
        self.ensure_dir()?;
        let path = self.path_for(day);
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        options
            .open(&path)
            .map_err(|source| Error::OpenFile { path, source })
    }
}

const NO_DAY: i32 = i32::MIN;

#[derive(Debug)]
pub(crate) struct FileRotator {
    /// The rotation lock.
    target: Mutex<Option<RotationTarget>>,
    configured: AtomicBool,
    bound: AtomicBool,
    /// Days from CE of the last completed rotation.
    last_day: AtomicI32,
    opens: AtomicU64,
}

impl FileRotator {
    pub(crate) fn new(target: Option<RotationTarget>) -> Self {
        Self {
            configured: AtomicBool::new(target.is_some()),
            target: Mutex::new(target),
            bound: AtomicBool::new(false),
            last_day: AtomicI32::new(NO_DAY),
            opens: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<RotationTarget>> {
        self.target.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn is_current(&self, day: i32) -> bool {
        self.bound.load(Ordering::Acquire) && self.last_day.load(Ordering::Acquire) == day
    }

    pub(crate) fn target(&self) -> Option<RotationTarget> {
        self.lock().clone()
    }

    /**
    Replaces the rotation target.

    The next [`ensure_current`](Self::ensure_current) opens a file for the new target
    even if one is already bound for today.
    */
    pub(crate) fn set_target(&self, target: Option<RotationTarget>) {
        let mut guard = self.lock();
        self.configured.store(target.is_some(), Ordering::Release);
        self.bound.store(false, Ordering::Release);
        self.last_day.store(NO_DAY, Ordering::Release);
        *guard = target;
    }

    /// Makes `sink` today's file, opening it if the bound file is stale or missing.
    pub(crate) fn ensure_current(&self, sink: &mut Sink, today: NaiveDate) -> Result<()> {
        if !self.configured.load(Ordering::Acquire) {
            return Ok(());
        }
        let day = today.num_days_from_ce();
        if self.is_current(day) {
            return Ok(());
        }

        let guard = self.lock();
        let Some(target) = guard.as_ref() else {
            return Ok(());
        };
        if self.is_current(day) {
            return Ok(());
        }

        let file = target.open(today)?;
        // replacing the sink drops, and so closes, the previous file
        *sink = Sink::File(file);
        self.opens.fetch_add(1, Ordering::Relaxed);
        self.last_day.store(day, Ordering::Release);
        self.bound.store(true, Ordering::Release);
        Ok(())
    }

    /// Unbinds the target and hands the sink back to stderr if it was a rotated file.
    pub(crate) fn close(&self, sink: &mut Sink) {
        let mut guard = self.lock();
        *guard = None;
        self.configured.store(false, Ordering::Release);
        self.bound.store(false, Ordering::Release);
        self.last_day.store(NO_DAY, Ordering::Release);
        if sink.is_file() {
            *sink = Sink::Stderr;
        }
    }

    /// How many files have been opened over the rotator's lifetime.
    pub(crate) fn opens(&self) -> u64 {
        self.opens.load(Ordering::Relaxed)
    }
}
