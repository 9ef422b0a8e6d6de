//! JSON-lines publisher
//!
//! Writes one envelope per message, `{"topic": ..., "key": ..., "value": {...}}`,
//! to any writer. The binary points it at stdout so the stream can be piped into
//! a broker CLI or a file.

use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use tracing::debug;

use crate::publish::{PublishError, Publisher};

#[derive(Serialize)]
struct Envelope<'a> {
    topic: &'a str,
    key: &'a str,
    value: Value,
}

/// Publisher writing JSON lines to a writer
#[derive(Debug)]
pub struct JsonLinesPublisher<W: Write> {
    writer: W,
    messages_written: u64,
}

impl<W: Write> JsonLinesPublisher<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer, messages_written: 0 }
    }

    /// Number of messages written so far
    pub fn messages_written(&self) -> u64 {
        self.messages_written
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Publisher for JsonLinesPublisher<W> {
    fn publish(&mut self, topic: &str, key: &str, value: &[u8]) -> Result<(), PublishError> {
        // Values are JSON already; embed them as objects, not strings
        let value: Value = serde_json::from_slice(value)?;
        let line = serde_json::to_string(&Envelope { topic, key, value })?;

        writeln!(self.writer, "{}", line)?;
        self.messages_written += 1;
        debug!(topic, key, "Message written");
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PublishError> {
        self.writer.flush()?;
        Ok(())
    }
}
