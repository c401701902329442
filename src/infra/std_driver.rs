use crate::domain_model::TimestampFlags;
use crate::domain_port::{Driver, SinkError};
use chrono::{DateTime, Utc};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Writes lines to any `io::Write` sink, each headed by a timestamp and a prefix.
///
/// Example with `TimestampFlags::STD` and prefix `"[LOG] "`:
///
/// ```text
/// 2021/04/20 00:32:27 [LOG] [ main.rs:15 ] [INFO] Hello, this is a message.
/// ```
pub struct StdDriver<W: Write + Send> {
    sink: Mutex<W>,
    prefix: String,
    flags: TimestampFlags,
}

impl<W: Write + Send> StdDriver<W> {
    pub fn new(sink: W, prefix: impl Into<String>, flags: TimestampFlags) -> Self {
        Self {
            sink: Mutex::new(sink),
            prefix: prefix.into(),
            flags,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn flags(&self) -> TimestampFlags {
        self.flags
    }

    /// Consumes the driver and hands back its sink.
    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn render(&self, now: DateTime<Utc>, line: &str) -> String {
        let stamp = self.flags.stamp(now);
        let mut record = String::with_capacity(stamp.len() + self.prefix.len() + line.len() + 1);
        if self.flags.contains(TimestampFlags::LEADING_PREFIX) {
            record.push_str(&self.prefix);
            record.push_str(&stamp);
        } else {
            record.push_str(&stamp);
            record.push_str(&self.prefix);
        }
        record.push_str(line);
        record.push('\n');
        record
    }
}

impl StdDriver<Stdout> {
    pub fn stdout(prefix: impl Into<String>, flags: TimestampFlags) -> Self {
        Self::new(io::stdout(), prefix, flags)
    }
}

impl StdDriver<Stderr> {
    pub fn stderr(prefix: impl Into<String>, flags: TimestampFlags) -> Self {
        Self::new(io::stderr(), prefix, flags)
    }
}

impl StdDriver<File> {
    /// Appends to the file at `path`, creating it if it does not exist.
    pub fn file(
        path: impl AsRef<Path>,
        prefix: impl Into<String>,
        flags: TimestampFlags,
    ) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(file, prefix, flags))
    }
}

impl<W: Write + Send> Driver for StdDriver<W> {
    fn println(&self, line: &str) {
        let record = self.render(Utc::now(), line);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = write_record(&mut *sink, &record) {
            panic!("failed to write log line: {e}");
        }
    }
}

fn write_record<W: Write + ?Sized>(sink: &mut W, record: &str) -> io::Result<()> {
    sink.write_all(record.as_bytes())?;
    sink.flush()
}

impl<W: Write + Send> fmt::Debug for StdDriver<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdDriver")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 4, 20, 0, 32, 27).unwrap()
    }

    #[test]
    fn stamp_comes_before_prefix() {
        let driver = StdDriver::new(Vec::new(), "[LOG] ", TimestampFlags::STD);
        assert_eq!(
            driver.render(at(), "[ main.rs:15 ] [INFO] Hello, this is a message."),
            "2021/04/20 00:32:27 [LOG] [ main.rs:15 ] [INFO] Hello, this is a message.\n"
        );
    }

    #[test]
    fn leading_prefix_moves_prefix_first() {
        let flags = TimestampFlags::STD | TimestampFlags::LEADING_PREFIX;
        let driver = StdDriver::new(Vec::new(), "[LOG] ", flags);
        assert_eq!(driver.render(at(), "x"), "[LOG] 2021/04/20 00:32:27 x\n");
    }

    #[test]
    fn println_writes_one_terminated_line() {
        let driver = StdDriver::new(Vec::new(), "> ", TimestampFlags::empty());
        driver.println("first");
        driver.println("second");
        let written = String::from_utf8(driver.into_inner()).unwrap();
        assert_eq!(written, "> first\n> second\n");
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    #[should_panic(expected = "failed to write log line")]
    fn write_failure_is_fatal() {
        StdDriver::new(BrokenSink, "", TimestampFlags::empty()).println("lost");
    }

    #[test]
    fn file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "existing\n").unwrap();

        let driver = StdDriver::file(&path, "[APP] ", TimestampFlags::empty()).unwrap();
        driver.println("appended");
        drop(driver);

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing\n[APP] appended\n"
        );
    }

    #[test]
    fn file_sink_reports_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        let err = StdDriver::file(&path, "", TimestampFlags::empty()).unwrap_err();
        assert!(matches!(err, SinkError::Open { .. }));
        assert!(err.to_string().contains("app.log"));
    }
}
