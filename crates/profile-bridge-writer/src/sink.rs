use crate::{Error, Result};
use profile_bridge_core::Notification;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// Receiver of named notifications, owned by the embedding application
pub trait NotificationSink {
    fn emit(&self, notification: Notification) -> Result<()>;
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| Error::Sink("sink lock poisoned".to_string()))
}

/// Keeps every notification in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    /// Drain everything received so far
    pub fn take(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|mut received| std::mem::take(&mut *received))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.received.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for RecordingSink {
    fn emit(&self, notification: Notification) -> Result<()> {
        lock(&self.received)?.push(notification);
        Ok(())
    }
}

/// Writes each notification as one JSON document per line
pub struct JsonLinesSink<W: Write> {
    writer: Mutex<W>,
    pretty: bool,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            pretty: false,
        }
    }

    /// Pretty-print each document (no longer one line per notification)
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|_| Error::Sink("sink lock poisoned".to_string()))
    }
}

impl<W: Write> NotificationSink for JsonLinesSink<W> {
    fn emit(&self, notification: Notification) -> Result<()> {
        let mut writer = lock(&self.writer)?;

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &notification)?;
        } else {
            serde_json::to_writer(&mut *writer, &notification)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }
}
