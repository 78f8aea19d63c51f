// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily file rotation driven by a manual clock.

use chrono::{NaiveDate, NaiveDateTime};
use daylog::{Flags, Level, Logger, ManualClock};
use std::sync::Arc;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn logger_at(dir: &std::path::Path, start: NaiveDateTime) -> (Logger, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start));
    let logger = Logger::builder()
        .flags(Flags::STD | Flags::LEVEL)
        .log_file(dir.join("logs"), "server.log")
        .clock(clock.clone())
        .build();
    (logger, clock)
}

#[test]
fn one_file_per_day() {
    let dir = tempfile::tempdir().unwrap();
    let (logger, clock) = logger_at(dir.path(), at(2023, 12, 31, 23, 58, 0));

    for i in 0..100 {
        daylog::infof!(logger, "line {i}").unwrap();
    }
    assert_eq!(logger.files_opened(), 1);

    clock.advance(chrono::Duration::minutes(5));
    daylog::infof!(logger, "new year").unwrap();
    daylog::infof!(logger, "still new year").unwrap();
    assert_eq!(logger.files_opened(), 2);

    let old = std::fs::read_to_string(dir.path().join("logs/server.log.20231231")).unwrap();
    assert_eq!(old.lines().count(), 100);
    assert!(old.starts_with("2023/12/31 23:58:00 [INFO]line 0\n"));

    let new = std::fs::read_to_string(dir.path().join("logs/server.log.20240101")).unwrap();
    assert_eq!(
        new,
        "2024/01/01 00:03:00 [INFO]new year\n2024/01/01 00:03:00 [INFO]still new year\n"
    );
}

#[test]
fn suppressed_lines_do_not_open_files() {
    let dir = tempfile::tempdir().unwrap();
    let (logger, _clock) = logger_at(dir.path(), at(2024, 5, 1, 12, 0, 0));
    logger.set_level(Level::Error);
    daylog::infof!(logger, "nothing").unwrap();
    assert_eq!(logger.files_opened(), 0);
    assert!(!dir.path().join("logs").exists());
}

#[test]
fn existing_file_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs/server.log.20240501");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "earlier\n").unwrap();

    let (logger, _clock) = logger_at(dir.path(), at(2024, 5, 1, 12, 0, 0));
    logger.set_flags(Flags::NONE);
    daylog::infof!(logger, "later").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "earlier\nlater\n");
}

#[test]
fn close_releases_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let (logger, _clock) = logger_at(dir.path(), at(2024, 5, 1, 12, 0, 0));
    daylog::infof!(logger, "to file").unwrap();
    logger.close();
    assert!(logger.log_file().is_none());

    logger.set_log_file(dir.path().join("other"), "next");
    daylog::infof!(logger, "to other").unwrap();
    assert_eq!(logger.files_opened(), 2);
    let other = std::fs::read_to_string(dir.path().join("other/next.20240501")).unwrap();
    assert!(other.ends_with("[INFO]to other\n"));
}

#[test]
fn unwritable_directory_reports_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("blocked");
    std::fs::write(&blocked, b"").unwrap();

    let clock = Arc::new(ManualClock::new(at(2024, 5, 1, 12, 0, 0)));
    let logger = Logger::builder()
        .flags(Flags::NONE)
        .writer(std::io::sink())
        .log_file(&blocked, "app")
        .clock(clock)
        .build();

    let err = daylog::infof!(logger, "lost").unwrap_err();
    assert!(err.is_rotation());
    assert_eq!(logger.files_opened(), 0);

    std::fs::remove_file(&blocked).unwrap();
    daylog::infof!(logger, "found").unwrap();
    assert_eq!(logger.files_opened(), 1);
    assert_eq!(
        std::fs::read_to_string(blocked.join("app.20240501")).unwrap(),
        "found\n"
    );
}

#[test]
fn failed_rotation_keeps_the_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let (logger, clock) = logger_at(dir.path(), at(2024, 5, 1, 23, 59, 0));
    logger.set_flags(Flags::NONE);
    daylog::infof!(logger, "one").unwrap();

    let next = dir.path().join("logs/server.log.20240502");
    std::fs::create_dir(&next).unwrap();
    clock.advance(chrono::Duration::minutes(2));

    let err = daylog::infof!(logger, "two").unwrap_err();
    assert!(matches!(err, daylog::Error::OpenFile { .. }));
    let old = dir.path().join("logs/server.log.20240501");
    assert_eq!(std::fs::read_to_string(&old).unwrap(), "one\ntwo\n");

    std::fs::remove_dir(&next).unwrap();
    daylog::infof!(logger, "three").unwrap();
    assert_eq!(std::fs::read_to_string(&old).unwrap(), "one\ntwo\n");
    assert_eq!(std::fs::read_to_string(&next).unwrap(), "three\n");
}
