// SPDX-License-Identifier: MIT OR Apache-2.0

//! `fatal` terminates the process. The test re-runs this binary as a child
//! process and observes its exit status.

use daylog::{Flags, Level, Logger};
use std::process::Command;

const CHILD_ENV: &str = "DAYLOG_FATAL_CHILD";

fn run_child(test_name: &str) -> std::process::Output {
    Command::new(std::env::current_exe().unwrap())
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap()
}

#[test]
fn fatalf_exits_with_status_one() {
    if std::env::var_os(CHILD_ENV).is_some() {
        let logger = Logger::stderr("", Flags::TIME | Flags::LEVEL);
        // the isolation level cannot suppress fatal
        logger.set_level(Level::Fatal);
        daylog::fatalf!(logger, "die {}", 1);
    }

    let output = run_child("fatalf_exits_with_status_one");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[FATAL]die 1\n"), "stderr was {stderr:?}");
}

#[test]
fn fatal_exits_even_when_the_write_fails() {
    if std::env::var_os(CHILD_ENV).is_some() {
        struct Refuses;
        impl std::io::Write for Refuses {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("refused"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let logger = Logger::new(Refuses, "", Flags::NONE);
        logger.fatal(&[&"die"]);
    }

    let output = run_child("fatal_exits_even_when_the_write_fails");
    assert_eq!(output.status.code(), Some(1));
}
