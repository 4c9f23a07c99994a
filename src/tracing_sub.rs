use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::Level;

/// Writer handed to the subscriber for each event, backed by the shared log
/// file.
pub struct DelegatingWriter {
    file: Arc<Mutex<File>>,
}

fn poisoned() -> io::Error {
    io::Error::other("log file lock poisoned")
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.lock().map_err(|_| poisoned())?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.lock().map_err(|_| poisoned())?.flush()
    }
}

#[derive(Clone, Debug)]
pub struct SubscriberMakeWriter {
    file: Arc<Mutex<File>>,
}

impl SubscriberMakeWriter {
    /// Append to `path`, creating it when missing.
    pub fn file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter {
            file: Arc::clone(&self.file),
        }
    }
}

/// Initialize a tracing subscriber appending to `path`. Full-screen hosts use
/// this so log lines do not land on top of the drawn windows. Safe to call
/// more than once; later calls leave the global subscriber in place.
pub fn init_with_file(path: &Path) -> io::Result<()> {
    let writer = SubscriberMakeWriter::file(path)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}
