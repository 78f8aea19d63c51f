//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# daylog

daylog is a small, leveled logger for long-running services that write plain text
lines to stderr or to one log file per day.

# Lines

Every call writes exactly one line: an optional header followed by the message.
The header starts with the logger's prefix in angle brackets, if it has one.

```text
<SRV>2019/04/11 11:15:33 [ERROR]server.rs:42: boom 7
```

Which header fields appear is chosen with [`Flags`]:

| Flag           | Renders                       |
|----------------|-------------------------------|
| `DATE`         | `2019/04/11 `                 |
| `TIME`         | `11:15:33 `                   |
| `MICROSECONDS` | `11:15:33.123123 `            |
| `LEVEL`        | `[ERROR]`                     |
| `SHORT_FILE`   | `server.rs:42: `              |
| `LONG_FILE`    | `/src/app/server.rs:42: `     |

`LEVEL` and the file fields are only written when at least one of `DATE`, `TIME`
or `MICROSECONDS` is enabled. [`Flags::DEFAULT`] is `DATE | TIME | LEVEL | SHORT_FILE`.

# Levels

Six [`Level`]s, in order: `Debug`, `Info`, `Warn`, `Error`, `Panic`, `Fatal`. A logger
drops, without formatting anything, every call below its isolation level
([`Logger::set_level`]).

`Panic` calls panic with the message after writing it. `Fatal` calls exit the process
with status 1 after writing it. `stack` writes the current thread's backtrace at
`Error` regardless of the isolation level.

# The API

```rust
use daylog::{Flags, InMemorySink, Level, Logger};

let sink = InMemorySink::new();
let logger = Logger::new(sink.clone(), "SRV", Flags::DEFAULT);
logger.set_level(Level::Info);

daylog::debugf!(logger, "not written").unwrap();
daylog::errorf!(logger, "boom {}", 7).unwrap();
logger.info(&[&"recv", &"msgId=", &1]).unwrap();

assert_eq!(sink.line_count(), 2);
```

Each severity has a format variant (`infof`, taking [`std::fmt::Arguments`], usually
through the `infof!` macro) and a list variant (`info`, taking values that are joined
with single spaces). Calls return [`Result`]; logging failures never interrupt the
caller beyond that.

Without a logger argument, the macros write to the process default logger; see
[`global_logger`].

# Daily files

```rust
# let dir = tempfile::tempdir().unwrap();
let logger = daylog::Logger::default();
logger.set_log_file(dir.path(), "server.log");
daylog::infof!(logger, "written to server.log.YYYYMMDD").unwrap();
```

Lines go to `{dir}/{base}.{YYYYMMDD}` for the local date at which they are written.
The first line of a new day opens the new file and closes the old one. If the file
cannot be opened, lines keep going to the previous destination and each call
returns the error until the file can be opened.

# Multithreading

A [`Logger`] is `Send + Sync`. Concurrent calls never interleave: formatting and the
write happen under one lock, and each line reaches the sink in a single write. All
work happens on the calling thread; there is no background writer.
*/

mod builder;
mod clock;
mod error;
mod flags;
pub mod global_logger;
mod header;
mod inmemory_sink;
mod level;
mod logger;
mod macros;
mod rotation;
mod sink;

pub use builder::LoggerBuilder;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use flags::Flags;
pub use global_logger::{default_logger, set_default_logger};
pub use header::{CallSite, format_header, short_file, write_padded};
pub use inmemory_sink::InMemorySink;
pub use level::Level;
pub use logger::Logger;
pub use rotation::RotationTarget;
