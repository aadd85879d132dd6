//! Background thread that appends records to the log file.

use crate::error::Result;
use crate::log_record::LogRecord;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

/// Messages accepted by the writer thread.
enum WriterMessage {
    Record(LogRecord),
    /// Write out everything queued before this, then exit
    Shutdown,
}

struct LogWriter {
    out: BufWriter<File>,
}

impl LogWriter {
    fn open(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    fn write_record(&mut self, record: &LogRecord) {
        if let Err(e) = self.out.write_all(record.line().as_bytes()) {
            eprintln!("Error writing log: {}", e);
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            eprintln!("Error flushing log: {}", e);
        }
    }

    /// Drains the channel, flushing whenever it runs dry so records reach the
    /// file promptly without a syscall per line under load.
    fn run(mut self, receiver: Receiver<WriterMessage>) {
        while let Ok(first) = receiver.recv() {
            let mut stopping = false;
            for message in std::iter::once(first).chain(receiver.try_iter()) {
                match message {
                    WriterMessage::Record(record) => self.write_record(&record),
                    WriterMessage::Shutdown => {
                        stopping = true;
                        break;
                    }
                }
            }
            self.flush();
            if stopping {
                return;
            }
        }
    }
}

/// Owner of the writer thread, shared by every clone of a file logger.
///
/// Dropping the last reference shuts the thread down, so queued records are
/// on disk before the process exits.
pub(crate) struct WriterHandle {
    sender: Sender<WriterMessage>,
    thread: Mutex<Option<JoinHandle<()>>>,
}

impl WriterHandle {
    /// Queues `record`. Records sent after [`WriterHandle::shutdown`] are dropped.
    pub(crate) fn send(&self, record: LogRecord) {
        // A closed channel only means the writer thread is gone.
        let _ = self.sender.send(WriterMessage::Record(record));
    }

    /// Writes out every queued record and joins the thread. Later calls
    /// return immediately.
    pub(crate) fn shutdown(&self) {
        let handle = match self.thread.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let Some(handle) = handle else {
            return;
        };

        let _ = self.sender.send(WriterMessage::Shutdown);
        if handle.join().is_err() {
            eprintln!("Log writer thread panicked");
        }
    }
}

impl Drop for WriterHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Opens `log_path` and starts the writer thread.
pub(crate) fn spawn_writer(log_path: &Path) -> Result<WriterHandle> {
    let writer = LogWriter::open(log_path)?;
    let (sender, receiver) = channel();
    let thread = thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || writer.run(receiver))?;
    Ok(WriterHandle {
        sender,
        thread: Mutex::new(Some(thread)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_level::LogLevel;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("scan.log");

        assert!(LogWriter::open(&log_path).is_ok());
        assert!(log_path.exists());
    }

    #[test]
    fn test_open_fails_in_missing_directory() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("missing").join("scan.log");

        assert!(LogWriter::open(&log_path).is_err());
    }

    #[test]
    fn test_writer_thread_appends_records() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("scan.log");
        fs::write(&log_path, "existing line\n").unwrap();

        let writer = spawn_writer(&log_path).unwrap();
        writer.send(LogRecord::now(LogLevel::Info, None, "first"));
        writer.send(LogRecord::now(LogLevel::Warn, None, "second"));
        writer.shutdown();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.starts_with("existing line\n"));
        assert!(content.contains("INFO: first"));
        assert!(content.contains("WARN: second"));
    }

    #[test]
    fn test_shutdown_is_idempotent_and_later_records_are_dropped() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("scan.log");

        let writer = spawn_writer(&log_path).unwrap();
        writer.send(LogRecord::now(LogLevel::Info, None, "kept"));
        writer.shutdown();
        writer.shutdown();
        writer.send(LogRecord::now(LogLevel::Info, None, "too late"));
        drop(writer);

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("kept"));
        assert!(!content.contains("too late"));
    }

    #[test]
    fn test_drop_writes_out_queue() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("scan.log");

        let writer = spawn_writer(&log_path).unwrap();
        for i in 0..500 {
            writer.send(LogRecord::now(LogLevel::Info, None, &format!("line {}", i)));
        }
        drop(writer);

        let content = fs::read_to_string(log_path).unwrap();
        assert_eq!(content.lines().count(), 500);
        assert!(content.ends_with("INFO: line 499\n"));
    }
}
