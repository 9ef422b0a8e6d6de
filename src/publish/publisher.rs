//! The publish interface the journey loop writes to

use std::io;
use thiserror::Error;

/// Failures reported by a publisher
#[derive(Debug, Error)]
pub enum PublishError {
    /// The underlying sink failed
    #[error("Sink I/O failure: {0}")]
    Io(#[from] io::Error),

    /// The message could not be encoded for the sink
    #[error("Failed to encode message: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The sink refused the message
    #[error("Message to topic '{topic}' rejected: {reason}")]
    Rejected {
        /// Topic of the rejected message
        topic: String,
        /// Why it was rejected
        reason: String,
    },
}

/// A message as handed to a publisher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    /// Destination topic
    pub topic: String,
    /// Message key (the record's identifier)
    pub key: String,
    /// Serialized record
    pub value: Vec<u8>,
}

/// Destination of telemetry records
///
/// `publish` returns once the message is accepted; `flush` returns once every
/// accepted message is acknowledged by the sink.
pub trait Publisher {
    /// Submit one message
    fn publish(&mut self, topic: &str, key: &str, value: &[u8]) -> Result<(), PublishError>;

    /// Wait for all submitted messages to be acknowledged
    fn flush(&mut self) -> Result<(), PublishError> {
        Ok(())
    }
}
